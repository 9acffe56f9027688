/// Easing functions used to map normalized animation progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// CSS `ease-in-out`, i.e. `cubic-bezier(0.42, 0, 0.58, 1)`.
    #[default]
    InOut,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOut => CubicBezier::EASE_IN_OUT.solve(t),
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }

    /// CSS `animation-timing-function` closest to this easing.
    ///
    /// The polynomial families map to their usual cubic-bezier approximations.
    pub fn css_timing_function(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::InOut => "ease-in-out",
            Self::InQuad => "cubic-bezier(0.11, 0, 0.5, 0)",
            Self::OutQuad => "cubic-bezier(0.5, 1, 0.89, 1)",
            Self::InOutQuad => "cubic-bezier(0.45, 0, 0.55, 1)",
            Self::InCubic => "cubic-bezier(0.32, 0, 0.67, 0)",
            Self::OutCubic => "cubic-bezier(0.33, 1, 0.68, 1)",
            Self::InOutCubic => "cubic-bezier(0.65, 0, 0.35, 1)",
        }
    }
}

/// Unit cubic Bezier timing curve through `(0,0)` and `(1,1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    pub(crate) const EASE_IN_OUT: Self = Self {
        x1: 0.42,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };

    fn sample(a1: f64, a2: f64, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a1 + 3.0 * inv * s * s * a2 + s * s * s
    }

    fn sample_dx(&self, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * self.x1 + 6.0 * inv * s * (self.x2 - self.x1) + 3.0 * s * s * (1.0 - self.x2)
    }

    /// Map input progress `x` to eased output `y`.
    pub(crate) fn solve(&self, x: f64) -> f64 {
        const EPS: f64 = 1e-7;
        let x = x.clamp(0.0, 1.0);

        // Newton first; x(s) is monotonic for x1, x2 in [0, 1].
        let mut s = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, s) - x;
            if err.abs() < EPS {
                return Self::sample(self.y1, self.y2, s);
            }
            let d = self.sample_dx(s);
            if d.abs() < 1e-6 {
                break;
            }
            s -= err / d;
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        s = x;
        for _ in 0..64 {
            let v = Self::sample(self.x1, self.x2, s);
            if (v - x).abs() < EPS {
                break;
            }
            if v < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        Self::sample(self.y1, self.y2, s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
