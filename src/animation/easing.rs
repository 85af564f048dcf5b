//! Easing functions for transition curves.
//!
//! Covers the curves the site declares: CSS-style cubic béziers (including
//! the snappy `cubic-bezier(0.23, 1, 0.32, 1)` used for card hover), plain
//! quadratic curves and linear.

/// Newton iterations when inverting a bézier's x(s).
const NEWTON_ITERATIONS: usize = 8;
/// Bisection iterations when Newton stalls on a flat slope.
const BISECTION_ITERATIONS: usize = 24;
const EPSILON: f32 = 1e-6;

/// Easing function variants for transition curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Identity curve.
    Linear,
    /// `t²`.
    QuadraticIn,
    /// `1 - (1 - t)²`.
    QuadraticOut,
    /// CSS `cubic-bezier(x1, y1, x2, y2)` with implicit endpoints (0,0) and
    /// (1,1).
    CubicBezier {
        /// First control point x, in `[0, 1]`.
        x1: f32,
        /// First control point y.
        y1: f32,
        /// Second control point x, in `[0, 1]`.
        x2: f32,
        /// Second control point y.
        y2: f32,
    },
}

impl EasingFunction {
    /// `cubic-bezier(0.23, 1, 0.32, 1)`: fast attack, long settle. Card
    /// hover, tilt reset, image zoom.
    pub const SNAPPY: EasingFunction = EasingFunction::CubicBezier {
        x1: 0.23,
        y1: 1.0,
        x2: 0.32,
        y2: 1.0,
    };

    /// CSS `ease`, `[0.25, 0.1, 0.25, 1]`. Timeline card entrances.
    pub const EASE: EasingFunction = EasingFunction::CubicBezier {
        x1: 0.25,
        y1: 0.1,
        x2: 0.25,
        y2: 1.0,
    };

    /// CSS `ease-out`.
    pub const EASE_OUT: EasingFunction = EasingFunction::CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };

    /// CSS `ease-in-out`.
    pub const EASE_IN_OUT: EasingFunction = EasingFunction::CubicBezier {
        x1: 0.42,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };

    /// Eased progress at `t`, clamped to `[0, 1]`.
    ///
    /// The endpoints map exactly to 0.0 and 1.0 so a finished transition
    /// lands on its target.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }

        match *self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicBezier { x1, y1, x2, y2 } => {
                let s = solve_bezier_param(t, x1, x2);
                bezier(s, y1, y2)
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::EASE_OUT
    }
}

/// One coordinate of a cubic bézier with endpoints 0 and 1.
#[inline]
fn bezier(s: f32, p1: f32, p2: f32) -> f32 {
    let oms = 1.0 - s;
    3.0 * oms * oms * s * p1 + 3.0 * oms * s * s * p2 + s * s * s
}

#[inline]
fn bezier_slope(s: f32, p1: f32, p2: f32) -> f32 {
    let oms = 1.0 - s;
    3.0 * oms * oms * p1 + 6.0 * oms * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Find the curve parameter whose x coordinate equals `x`.
fn solve_bezier_param(x: f32, x1: f32, x2: f32) -> f32 {
    let mut s = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = bezier(s, x1, x2) - x;
        if err.abs() < EPSILON {
            return s;
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < EPSILON {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..BISECTION_ITERATIONS {
        let value = bezier(s, x1, x2);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_is_identity_on_unit_interval() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        assert_eq!(EasingFunction::SNAPPY.evaluate(-0.5), 0.0);
        assert_eq!(EasingFunction::SNAPPY.evaluate(1.5), 1.0);
    }

    #[test]
    fn test_quadratic_curves() {
        assert_eq!(EasingFunction::QuadraticIn.evaluate(0.5), 0.25);
        assert_eq!(EasingFunction::QuadraticOut.evaluate(0.5), 0.75);
    }

    #[test]
    fn test_bezier_matching_controls_is_linear() {
        let linear_bezier = EasingFunction::CubicBezier {
            x1: 0.25,
            y1: 0.25,
            x2: 0.75,
            y2: 0.75,
        };
        for i in 1..10 {
            let t = i as f32 / 10.0;
            assert!((linear_bezier.evaluate(t) - t).abs() < 1e-4);
        }
    }

    #[test]
    fn test_snappy_front_loads_progress() {
        // Most of the motion happens early, as the hover curve intends.
        let early = EasingFunction::SNAPPY.evaluate(0.2);
        assert!(early > 0.6, "expected > 0.6 at t=0.2, got {early}");
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let e = EasingFunction::EASE_IN_OUT;
        assert!((e.evaluate(0.5) - 0.5).abs() < 1e-3);
        let a = e.evaluate(0.3);
        let b = e.evaluate(0.7);
        assert!((a + b - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_bezier_is_monotonic() {
        let mut last = 0.0;
        for i in 0..=100 {
            let v = EasingFunction::EASE.evaluate(i as f32 / 100.0);
            assert!(v + 1e-5 >= last);
            last = v;
        }
    }
}
