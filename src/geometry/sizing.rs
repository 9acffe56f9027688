use std::str::FromStr;

use crate::foundation::{
    error::{HandscriptError, HandscriptResult},
    math::fmt_num,
};

/// CSS length accepted for fill-mode width/height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Length {
    /// Absolute pixels (`240px` or bare `240`).
    Px(f64),
    /// Percentage of the containing block (`100%`).
    Percent(f64),
    /// `auto`.
    Auto,
}

impl Length {
    /// Fill the containing block.
    pub const FULL: Self = Self::Percent(100.0);
}

impl Default for Length {
    fn default() -> Self {
        Self::FULL
    }
}

impl std::fmt::Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{}px", fmt_num(*v)),
            Self::Percent(v) => write!(f, "{}%", fmt_num(*v)),
            Self::Auto => f.write_str("auto"),
        }
    }
}

impl FromStr for Length {
    type Err = HandscriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        let (num, ctor): (&str, fn(f64) -> Self) = if let Some(n) = s.strip_suffix('%') {
            (n, Self::Percent)
        } else if let Some(n) = s.strip_suffix("px") {
            (n, Self::Px)
        } else {
            (s, Self::Px)
        };
        let v: f64 = num
            .trim()
            .parse()
            .map_err(|_| HandscriptError::validation(format!("invalid css length '{s}'")))?;
        if !v.is_finite() || v < 0.0 {
            return Err(HandscriptError::validation(format!(
                "css length '{s}' must be finite and >= 0"
            )));
        }
        Ok(ctor(v))
    }
}

impl TryFrom<String> for Length {
    type Error = HandscriptError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Length> for String {
    fn from(value: Length) -> Self {
        value.to_string()
    }
}

/// How the widget sizes its SVG viewport and placeholder.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SizingMode {
    /// Explicit pixel sizing from the measured box with floors for degenerate boxes.
    Fixed {
        /// Minimum wrapper width in pixels.
        #[serde(default = "default_min_width")]
        min_width: f64,
        /// Minimum wrapper height in pixels.
        #[serde(default = "default_min_height")]
        min_height: f64,
    },
    /// Caller-supplied viewport size; no floors, placeholder left unsized.
    Fill {
        /// SVG width.
        #[serde(default)]
        width: Length,
        /// SVG height.
        #[serde(default)]
        height: Length,
    },
}

fn default_min_width() -> f64 {
    100.0
}

fn default_min_height() -> f64 {
    50.0
}

impl Default for SizingMode {
    fn default() -> Self {
        Self::Fixed {
            min_width: default_min_width(),
            min_height: default_min_height(),
        }
    }
}

impl SizingMode {
    /// Fill mode with `100%` width and height.
    pub fn fill() -> Self {
        Self::Fill {
            width: Length::FULL,
            height: Length::FULL,
        }
    }

    /// Reject non-finite or negative floors.
    pub fn validate(&self) -> HandscriptResult<()> {
        if let Self::Fixed {
            min_width,
            min_height,
        } = *self
            && (!min_width.is_finite()
                || !min_height.is_finite()
                || min_width < 0.0
                || min_height < 0.0)
        {
            return Err(HandscriptError::validation(
                "sizing floors must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/sizing.rs"]
mod tests;
