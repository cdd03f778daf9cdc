use crate::Vec3;
use crate::aabb::Aabb;

/// Triangle in object space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle(pub [Vec3; 3]);

impl Triangle {
    /// Bounds of the three corners.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        let [a, b, c] = self.0;
        Aabb::new(a.min(b).min(c), a.max(b).max(c))
    }

    /// Geometric normal; zero for degenerate triangles.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        let [a, b, c] = self.0;
        (b - a).cross(c - a).normalize_or_zero()
    }
}
