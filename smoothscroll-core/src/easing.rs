const NEWTON_ITERATIONS: u8 = 8;
const SOLVE_EPSILON: f64 = 1e-7;
const BISECTION_MAX_STEPS: u8 = 64;

/// A unit cubic Bézier timing curve, as used by CSS `cubic-bezier(x1, y1, x2, y2)`.
///
/// The end points are fixed at `(0, 0)` and `(1, 1)`; `x` is time and `y` is progress.
/// `y1`/`y2` may leave `[0, 1]`, which produces overshooting curves.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    /// `cubic-bezier(0, 0, 0.2, 1)`, a decelerating curve. Default timing for scrolling.
    pub const EASE_OUT: Self = Self::new(0.0, 0.0, 0.2, 1.0);
    /// `cubic-bezier(0, 0, 1, 1)`. Default timing for property transitions.
    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Creates a curve from its two middle control points.
    ///
    /// `x1` and `x2` are expected in `[0, 1]`; values outside are clamped when sampling so the
    /// curve stays a function of time.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn from_array([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self::new(x1, y1, x2, y2)
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    fn is_linear(&self) -> bool {
        self.x1 == self.y1 && self.x2 == self.y2
    }

    /// Eased progress for time `t` (clamped to `[0, 1]`).
    pub fn sample(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        if self.is_linear() {
            return t;
        }
        let curve = Coefficients::new(self);
        curve.y(curve.solve_t_for_x(t))
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::EASE_OUT
    }
}

impl From<[f64; 4]> for CubicBezier {
    fn from(points: [f64; 4]) -> Self {
        Self::from_array(points)
    }
}

/// Polynomial form `a*t^3 + b*t^2 + c*t` of both curve axes.
struct Coefficients {
    ax: f64,
    bx: f64,
    cx: f64,
    ay: f64,
    by: f64,
    cy: f64,
}

impl Coefficients {
    fn new(p: &CubicBezier) -> Self {
        let x1 = p.x1.clamp(0.0, 1.0);
        let x2 = p.x2.clamp(0.0, 1.0);

        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let cy = 3.0 * p.y1;
        let by = 3.0 * (p.y2 - p.y1) - cy;

        Self {
            ax: 1.0 - cx - bx,
            bx,
            cx,
            ay: 1.0 - cy - by,
            by,
            cy,
        }
    }

    fn x(&self, t: f64) -> f64 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    fn y(&self, t: f64) -> f64 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    fn dx(&self, t: f64) -> f64 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    fn solve_t_for_x(&self, x: f64) -> f64 {
        // Newton-Raphson converges in a few steps unless the slope flattens out.
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = self.x(t) - x;
            if err.abs() < SOLVE_EPSILON {
                return t;
            }
            let slope = self.dx(t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= err / slope;
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        t = x;
        for _ in 0..BISECTION_MAX_STEPS {
            let current = self.x(t);
            if (current - x).abs() < SOLVE_EPSILON {
                break;
            }
            if x > current {
                lo = t;
            } else {
                hi = t;
            }
            t = lo + (hi - lo) / 2.0;
        }
        t
    }
}

/// Maps normalized time to normalized progress.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
    CubicBezier(CubicBezier),
}

impl Easing {
    /// Eased progress for `t`. Input is clamped to `[0, 1]`; the output may overshoot for
    /// Bézier curves with control points outside the unit square.
    pub fn sample(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::CubicBezier(curve) => curve.sample(t),
        }
    }

    pub fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::CubicBezier(CubicBezier::new(x1, y1, x2, y2))
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::CubicBezier(CubicBezier::EASE_OUT)
    }
}

impl From<CubicBezier> for Easing {
    fn from(curve: CubicBezier) -> Self {
        Self::CubicBezier(curve)
    }
}

impl From<[f64; 4]> for Easing {
    fn from(points: [f64; 4]) -> Self {
        Self::CubicBezier(CubicBezier::from_array(points))
    }
}
