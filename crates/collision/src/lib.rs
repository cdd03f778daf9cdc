//! Collision layer for the maze demo: per-wall colliders built from the
//! grouped loader's output, and AABB overlap queries for a moving agent.

pub mod collider;
pub mod world;

pub use collider::{Collider, ColliderError};
pub use world::CollisionWorld;
