//! Curves sampled by the thick-line flattener.
//!
//! Provides quadratic and cubic Bezier curves plus an eased line whose `y`
//! follows a cubic ease-in-out between its endpoints.

use glam::Vec2;

/// Something that can be sampled at parameter `t` in `[0, 1]`.
pub trait CurveSampler {
    /// Evaluate the curve at parameter t (0.0 to 1.0).
    fn eval(&self, t: f32) -> Vec2;

    /// Start point, equal to `eval(0.0)`.
    fn start(&self) -> Vec2 {
        self.eval(0.0)
    }

    /// End point, equal to `eval(1.0)`.
    fn end(&self) -> Vec2 {
        self.eval(1.0)
    }
}

/// A quadratic Bezier curve (one control point).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    /// Start point
    pub from: Vec2,
    /// Control point
    pub control: Vec2,
    /// End point
    pub to: Vec2,
}

impl QuadraticBezier {
    pub fn new(from: Vec2, control: Vec2, to: Vec2) -> Self {
        Self { from, control, to }
    }

    /// Evaluate the curve at parameter t (0.0 to 1.0).
    pub fn eval(&self, t: f32) -> Vec2 {
        let mt = 1.0 - t;
        self.from * (mt * mt) + self.control * (2.0 * mt * t) + self.to * (t * t)
    }

    /// Get the derivative at parameter t.
    pub fn derivative(&self, t: f32) -> Vec2 {
        let mt = 1.0 - t;
        (self.control - self.from) * (2.0 * mt) + (self.to - self.control) * (2.0 * t)
    }
}

impl CurveSampler for QuadraticBezier {
    fn eval(&self, t: f32) -> Vec2 {
        QuadraticBezier::eval(self, t)
    }

    fn start(&self) -> Vec2 {
        self.from
    }

    fn end(&self) -> Vec2 {
        self.to
    }
}

/// A cubic Bezier curve (two control points).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Start point
    pub from: Vec2,
    /// First control point
    pub control1: Vec2,
    /// Second control point
    pub control2: Vec2,
    /// End point
    pub to: Vec2,
}

impl CubicBezier {
    pub fn new(from: Vec2, control1: Vec2, control2: Vec2, to: Vec2) -> Self {
        Self {
            from,
            control1,
            control2,
            to,
        }
    }

    /// Evaluate the curve at parameter t (0.0 to 1.0).
    pub fn eval(&self, t: f32) -> Vec2 {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        self.from * mt3
            + self.control1 * (3.0 * mt2 * t)
            + self.control2 * (3.0 * mt * t2)
            + self.to * t3
    }

    /// Get the derivative at parameter t.
    pub fn derivative(&self, t: f32) -> Vec2 {
        let mt = 1.0 - t;
        (self.control1 - self.from) * (3.0 * mt * mt)
            + (self.control2 - self.control1) * (6.0 * mt * t)
            + (self.to - self.control2) * (3.0 * t * t)
    }
}

impl CurveSampler for CubicBezier {
    fn eval(&self, t: f32) -> Vec2 {
        CubicBezier::eval(self, t)
    }

    fn start(&self) -> Vec2 {
        self.from
    }

    fn end(&self) -> Vec2 {
        self.to
    }
}

/// A line from `from` to `to` where `x` moves linearly and `y` follows a
/// cubic ease-in-out, giving an S-shaped connector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasedLine {
    pub from: Vec2,
    pub to: Vec2,
}

impl EasedLine {
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }

    /// Evaluate the line at parameter t (0.0 to 1.0).
    pub fn eval(&self, t: f32) -> Vec2 {
        Vec2::new(
            self.from.x + (self.to.x - self.from.x) * t,
            ease_cubic_in_out(t, self.from.y, self.to.y - self.from.y, 1.0),
        )
    }
}

impl CurveSampler for EasedLine {
    fn eval(&self, t: f32) -> Vec2 {
        EasedLine::eval(self, t)
    }

    fn start(&self) -> Vec2 {
        self.from
    }

    fn end(&self) -> Vec2 {
        self.to
    }
}

/// Cubic ease-in-out (Penner): value at time `t` of a transition from `b`
/// by `c` over duration `d`.
///
/// ```
/// use tessera_shapes::ease_cubic_in_out;
///
/// assert_eq!(ease_cubic_in_out(0.0, 10.0, 20.0, 1.0), 10.0);
/// assert_eq!(ease_cubic_in_out(0.5, 10.0, 20.0, 1.0), 20.0);
/// assert_eq!(ease_cubic_in_out(1.0, 10.0, 20.0, 1.0), 30.0);
/// ```
pub fn ease_cubic_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / (0.5 * d);
    if t < 1.0 {
        return 0.5 * c * t * t * t + b;
    }
    let t = t - 2.0;
    0.5 * c * (t * t * t + 2.0) + b
}
