use super::Vec2;

/// 2D affine transform in canvas order `[a, b, c, d, e, f]`:
///
/// ```text
/// x' = a*x + c*y + e
/// y' = b*x + d*y + f
/// ```
///
/// `translate` and `rotate` post-multiply, so successive calls compose the way
/// a 2D canvas context does: the last call applies to local coordinates first.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub coeffs: [f32; 6],
}

impl Transform {
    pub const IDENTITY: Transform = Transform { coeffs: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0] };

    #[inline]
    pub fn translate(self, offset: Vec2) -> Self {
        let [a, b, c, d, e, f] = self.coeffs;
        Self {
            coeffs: [a, b, c, d, a * offset.x + c * offset.y + e, b * offset.x + d * offset.y + f],
        }
    }

    #[inline]
    pub fn rotate(self, angle: f32) -> Self {
        let [a, b, c, d, e, f] = self.coeffs;
        let (sin, cos) = angle.sin_cos();
        Self {
            coeffs: [
                a * cos + c * sin,
                b * cos + d * sin,
                c * cos - a * sin,
                d * cos - b * sin,
                e,
                f,
            ],
        }
    }

    /// Maps a local point into the parent (device) space.
    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        let [a, b, c, d, e, f] = self.coeffs;
        Vec2::new(a * p.x + c * p.y + e, b * p.x + d * p.y + f)
    }

    /// Returns `None` for degenerate (non-invertible) transforms.
    pub fn inverse(self) -> Option<Self> {
        let [a, b, c, d, e, f] = self.coeffs;
        let det = a * d - b * c;
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inv = 1.0 / det;
        Some(Self {
            coeffs: [
                d * inv,
                -b * inv,
                -c * inv,
                a * inv,
                (c * f - d * e) * inv,
                (b * e - a * f) * inv,
            ],
        })
    }

    /// True if every coefficient is within `eps` of the identity.
    pub fn is_identity_within(self, eps: f32) -> bool {
        self.coeffs
            .iter()
            .zip(Self::IDENTITY.coeffs.iter())
            .all(|(v, id)| (v - id).abs() <= eps)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
