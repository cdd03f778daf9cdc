//! The set of static walls an agent moves against.

use asset::mesh::MeshGroup;
use corelib::aabb::Aabb;

use crate::collider::Collider;

/// Static collision world: every wall of the maze, queried by AABB overlap.
#[derive(Debug, Default)]
pub struct CollisionWorld {
    colliders: Vec<Collider>,
}

impl CollisionWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build one collider per group, skipping groups that fail with a
    /// warning. Load failures degrade the world, they never abort it.
    pub fn from_groups(groups: &[MeshGroup]) -> Self {
        let mut world = Self::new();
        for group in groups {
            match Collider::from_group(group) {
                Ok(collider) => {
                    log::debug!(
                        "Wall '{}': {} triangles",
                        collider.name,
                        collider.triangles.len()
                    );
                    world.insert(collider);
                }
                Err(err) => log::warn!("Skipping group: {err}"),
            }
        }
        world
    }

    pub fn insert(&mut self, collider: Collider) {
        self.colliders.push(collider);
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    /// Every wall whose bounds overlap the probe.
    pub fn hits(&self, probe: &Aabb) -> Vec<&Collider> {
        self.colliders
            .iter()
            .filter(|collider| collider.aabb.intersects(probe))
            .collect()
    }

    /// True if the probe overlaps any wall at all.
    pub fn collides(&self, probe: &Aabb) -> bool {
        self.colliders
            .iter()
            .any(|collider| collider.aabb.intersects(probe))
    }
}
