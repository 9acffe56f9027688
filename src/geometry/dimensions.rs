use kurbo::Shape as _;

use crate::foundation::{core::BezPath, math::fmt_num};

/// Intrinsic drawn size of a path (no stroke, no transforms).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    /// Bounding box width.
    pub width: f64,
    /// Bounding box height.
    pub height: f64,
}

impl Dimensions {
    /// Zero-area dimensions.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Build dimensions from raw values.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `true` if either side is zero.
    pub fn is_degenerate(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Clamp each side up to the given floors.
    pub fn with_floor(self, min_width: f64, min_height: f64) -> Self {
        Self {
            width: self.width.max(min_width),
            height: self.height.max(min_height),
        }
    }

    /// View box with its origin at zero.
    pub fn view_box(self) -> ViewBox {
        ViewBox {
            min_x: 0.0,
            min_y: 0.0,
            width: self.width,
            height: self.height,
        }
    }
}

/// Coordinate-mapping rectangle for the SVG drawing space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    /// Left edge.
    pub min_x: f64,
    /// Top edge.
    pub min_y: f64,
    /// Width of the drawing space.
    pub width: f64,
    /// Height of the drawing space.
    pub height: f64,
}

impl std::fmt::Display for ViewBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            fmt_num(self.min_x),
            fmt_num(self.min_y),
            fmt_num(self.width),
            fmt_num(self.height)
        )
    }
}

/// Measure the bounding box of SVG path data.
///
/// Unparseable or empty paths measure as [`Dimensions::ZERO`]; callers render the degenerate box
/// as-is.
#[tracing::instrument(skip(d), fields(len = d.len()))]
pub fn measure_path(d: &str) -> Dimensions {
    let path = match BezPath::from_svg(d.trim()) {
        Ok(path) => path,
        Err(err) => {
            tracing::warn!(error = %err, "unparseable path data, using zero dimensions");
            return Dimensions::ZERO;
        }
    };
    if path.segments().next().is_none() {
        return Dimensions::ZERO;
    }
    let bbox = path.bounding_box();
    Dimensions::new(bbox.width(), bbox.height())
}

/// Memoized [`measure_path`]: recomputes only when the path string changes.
#[derive(Clone, Debug, Default)]
pub struct DimensionCache {
    key: Option<String>,
    value: Dimensions,
    computations: u64,
}

impl DimensionCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dimensions for `d`, measuring only if `d` differs from the last input.
    pub fn get_or_measure(&mut self, d: &str) -> Dimensions {
        if self.key.as_deref() != Some(d) {
            self.value = measure_path(d);
            self.key = Some(d.to_string());
            self.computations += 1;
        }
        self.value
    }

    /// Last computed dimensions, if any.
    pub fn last(&self) -> Option<Dimensions> {
        self.key.as_ref().map(|_| self.value)
    }

    /// Number of measurements performed so far.
    pub fn computations(&self) -> u64 {
        self.computations
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/dimensions.rs"]
mod tests;
