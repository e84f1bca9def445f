use core::ops::{Add, Div, Mul, Neg, Sub};

/// 2D point or displacement in surface pixels.
///
/// A displacement is built from two points with [`Vec2::between`]; its length
/// and direction are read back with [`magnitude`](Vec2::magnitude) and
/// [`angle`](Vec2::angle). Collision math builds a fresh one per query.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Displacement from `from` to `to`.
    #[inline]
    pub fn between(from: Vec2, to: Vec2) -> Vec2 {
        to - from
    }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Direction in radians, in `(-PI, PI]`.
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        Vec2::between(self, other).magnitude()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn between_points_right_triangle() {
        let v = Vec2::between(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0));
        assert_eq!(v, Vec2::new(3.0, 4.0));
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn angle_follows_screen_axes() {
        assert_eq!(Vec2::new(1.0, 0.0).angle(), 0.0);
        assert_eq!(Vec2::new(0.0, 1.0).angle(), FRAC_PI_2);
        assert_eq!(Vec2::new(-1.0, 0.0).angle(), PI);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Vec2::new(-3.0, 2.0);
        let b = Vec2::new(5.0, -4.0);
        assert_eq!(a.distance(b), b.distance(a));
        assert_eq!(a.distance(b), 10.0);
    }
}
