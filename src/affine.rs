//! 2D affine transforms over continuous coordinates.

use ::nalgebra::{Matrix2, Vector2};

use super::*;

/// `p -> m * p + b`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    m: Matrix2<f64>,
    b: Vector2<f64>,
}

impl Default for AffineTransform {
    fn default() -> Self { Self::identity() }
}

impl AffineTransform {
    #[inline]
    pub fn new(m: Matrix2<f64>, b: Vector2<f64>) -> Self { Self { m, b } }
    #[inline]
    pub fn identity() -> Self { Self::new(Matrix2::identity(), Vector2::zeros()) }
    /// Counter-clockwise rotation by `angle` radians about the origin, in image coordinates (y down) this turns
    /// clockwise on screen.
    #[inline]
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(Matrix2::new(cos, -sin, sin, cos), Vector2::zeros())
    }
    #[inline]
    pub fn translation(by: DPoint) -> Self { Self::new(Matrix2::identity(), Vector2::new(by.x, by.y)) }
    /// The linear part
    #[inline(always)]
    pub fn matrix(&self) -> &Matrix2<f64> { &self.m }
    /// The translation part
    #[inline(always)]
    pub fn offset(&self) -> &Vector2<f64> { &self.b }
    #[inline]
    pub fn apply(&self, p: DPoint) -> DPoint {
        let v = self.m * Vector2::new(p.x, p.y) + self.b;
        DPoint::new(v.x, v.y)
    }
    /// The transform undoing `self`, `None` if the linear part is singular
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        let m = self.m.try_inverse()?;
        Some(Self::new(m, -(m * self.b)))
    }
    /// Whether both transforms agree on every entry within `eps`
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        self.m.iter().chain(self.b.iter()).zip(other.m.iter().chain(other.b.iter())).all(|(a, b)| (a - b).abs() <= eps)
    }
}

/// `(a * b).apply(p) == a.apply(b.apply(p))`
impl ::core::ops::Mul for AffineTransform {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self { Self::new(self.m * rhs.m, self.m * rhs.b + self.b) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_and_invert() {
        let t = AffineTransform::translation(DPoint::new(3., -2.)) * AffineTransform::rotation(0.7);
        let p = DPoint::new(1.5, 4.);
        let q = t.apply(p);
        let back = t.inverse().unwrap().apply(q);
        assert!((back - p).length() < 1e-12);
        assert!((t * t.inverse().unwrap()).approx_eq(&AffineTransform::identity(), 1e-12));
    }

    #[test]
    fn quarter_turn() {
        let p = AffineTransform::rotation(::core::f64::consts::FRAC_PI_2).apply(DPoint::new(1., 0.));
        assert!((p - DPoint::new(0., 1.)).length() < 1e-12);
    }

    #[test]
    fn singular_has_no_inverse() {
        assert!(AffineTransform::new(Matrix2::zeros(), Vector2::zeros()).inverse().is_none());
    }
}
