use crate::Vec3;
use crate::aabb::Aabb;

/// Extent used to bound the unbounded plane for broad-phase queries.
const PLANE_EXTENT: f32 = 1.0e4;

/// Closed set of collision shape kinds used by the demo.
///
/// Each variant carries its own parameters and every consumer matches
/// exhaustively, so adding a kind is a compile-time event rather than a
/// runtime downcast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CollisionShape {
    Box { half_extents: Vec3 },
    Sphere { radius: f32 },
    StaticPlane { normal: Vec3, offset: f32 },
}

impl CollisionShape {
    /// Conservative bounds of the shape placed at `origin`.
    pub fn aabb_at(&self, origin: Vec3) -> Aabb {
        match *self {
            CollisionShape::Box { half_extents } => Aabb::centered(origin, half_extents),
            CollisionShape::Sphere { radius } => Aabb::centered(origin, Vec3::splat(radius)),
            CollisionShape::StaticPlane { normal, offset } => {
                Aabb::centered(origin + normal * offset, Vec3::splat(PLANE_EXTENT))
            }
        }
    }
}
