//! Static wall collider built from one mesh group.

use asset::line::{ObjLine, parse_line};
use asset::mesh::MeshGroup;
use corelib::aabb::Aabb;
use corelib::triangle::Triangle;
use corelib::{Vec3, vec3};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColliderError {
    #[error("group '{0}' has no vertices")]
    NoVertices(String),
    #[error("group '{group}': face index {index} out of range (1..={count})")]
    FaceIndexOutOfRange {
        group: String,
        index: i64,
        count: usize,
    },
}

/// One wall: its triangle list plus precomputed bounds.
#[derive(Clone, Debug)]
pub struct Collider {
    pub name: String,
    pub triangles: Vec<Triangle>,
    pub aabb: Aabb,
}

impl Collider {
    /// Build a collider by re-parsing a group's raw lines.
    ///
    /// Vertices come from the `v` lines in order; faces from the group's
    /// renormalized indices, which are 1-based against that local vertex
    /// order. Bounds cover every declared vertex, referenced or not.
    pub fn from_group(group: &MeshGroup) -> Result<Self, ColliderError> {
        let mut vertices: Vec<Vec3> = Vec::new();
        for line in &group.lines {
            if let ObjLine::Vertex([x, y, z]) = parse_line(line) {
                vertices.push(vec3(x, y, z));
            }
        }

        let aabb = Aabb::from_points(vertices.iter().copied())
            .ok_or_else(|| ColliderError::NoVertices(group.name.clone()))?;

        let mut triangles = Vec::with_capacity(group.face_count());
        for tri in group.face_indices.chunks_exact(3) {
            let mut corners = [Vec3::ZERO; 3];
            for (slot, &index) in corners.iter_mut().zip(tri) {
                let vi = usize::try_from(index - 1)
                    .ok()
                    .filter(|&vi| vi < vertices.len())
                    .ok_or_else(|| ColliderError::FaceIndexOutOfRange {
                        group: group.name.clone(),
                        index,
                        count: vertices.len(),
                    })?;
                *slot = vertices[vi];
            }
            triangles.push(Triangle(corners));
        }

        Ok(Self {
            name: group.name.clone(),
            triangles,
            aabb,
        })
    }

    /// Triangles whose own bounds overlap `probe` — the candidates a
    /// narrow-phase test would examine after the wall-level AABB hit.
    pub fn narrow_hits<'a>(&'a self, probe: &'a Aabb) -> impl Iterator<Item = &'a Triangle> {
        self.triangles
            .iter()
            .filter(move |tri| tri.aabb().intersects(probe))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asset::groups::load_groups_from_str;

    const WALL: &str = "\
o wall
v 0 0 0
v 2 0 0
v 2 2 0
v 0 2 0
f 10 11 12
f 10 12 13
";

    #[test]
    fn builds_triangles_and_bounds_from_a_group() {
        let groups = load_groups_from_str(WALL);
        let collider = Collider::from_group(&groups[0]).expect("collider");
        assert_eq!(collider.name, "wall");
        assert_eq!(collider.triangles.len(), 2);
        assert_eq!(collider.aabb.min, vec3(0.0, 0.0, 0.0));
        assert_eq!(collider.aabb.max, vec3(2.0, 2.0, 0.0));
        assert_eq!(
            collider.triangles[0],
            Triangle([vec3(0.0, 0.0, 0.0), vec3(2.0, 0.0, 0.0), vec3(2.0, 2.0, 0.0)])
        );
    }

    #[test]
    fn group_without_vertices_is_an_error() {
        let group = MeshGroup {
            name: "ghost".to_string(),
            lines: vec!["o ghost".to_string()],
            face_indices: Vec::new(),
        };
        assert!(matches!(
            Collider::from_group(&group),
            Err(ColliderError::NoVertices(_))
        ));
    }

    #[test]
    fn face_index_beyond_local_vertices_is_an_error() {
        let group = MeshGroup {
            name: "wall".to_string(),
            lines: vec!["o wall".to_string(), "v 0 0 0".to_string()],
            face_indices: vec![1, 2, 3],
        };
        let err = Collider::from_group(&group).expect_err("out of range");
        assert!(matches!(err, ColliderError::FaceIndexOutOfRange { .. }));
    }

    #[test]
    fn narrow_hits_filters_by_triangle_bounds() {
        let groups = load_groups_from_str(WALL);
        let collider = Collider::from_group(&groups[0]).expect("collider");
        let near_origin = Aabb::centered(vec3(0.5, 0.25, 0.0), Vec3::splat(0.1));
        assert_eq!(collider.narrow_hits(&near_origin).count(), 2);
        let far = Aabb::centered(vec3(10.0, 10.0, 10.0), Vec3::splat(0.1));
        assert_eq!(collider.narrow_hits(&far).count(), 0);
    }
}
