//! Float comparison helpers.

use glam::Vec2;

/// Default tolerance for geometry comparisons.
pub const EPSILON: f32 = 1e-4;

/// Whether two floats are within `epsilon` of each other.
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

/// Whether two points are within `epsilon` of each other on both axes.
pub fn approx_eq_vec2(a: Vec2, b: Vec2, epsilon: f32) -> bool {
    approx_eq(a.x, b.x, epsilon) && approx_eq(a.y, b.y, epsilon)
}

/// Assert two floats are approximately equal.
///
/// ```
/// use tessera_test_utils::assert_approx_eq;
///
/// assert_approx_eq!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(1.0, 1.05, 0.1);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        $crate::assert_approx_eq!($a, $b, $crate::approx::EPSILON)
    };
    ($a:expr, $b:expr, $eps:expr) => {{
        let (a, b): (f32, f32) = ($a, $b);
        assert!(
            $crate::approx::approx_eq(a, b, $eps),
            "assertion failed: {} ~= {} (epsilon {})",
            a,
            b,
            $eps
        );
    }};
}

/// Assert two `Vec2` values are approximately equal.
#[macro_export]
macro_rules! assert_vec2_eq {
    ($a:expr, $b:expr) => {
        $crate::assert_vec2_eq!($a, $b, $crate::approx::EPSILON)
    };
    ($a:expr, $b:expr, $eps:expr) => {{
        let (a, b) = ($a, $b);
        assert!(
            $crate::approx::approx_eq_vec2(a, b, $eps),
            "assertion failed: {:?} ~= {:?} (epsilon {})",
            a,
            b,
            $eps
        );
    }};
}
