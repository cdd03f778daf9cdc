//! Core geometry types: math re-exports, AABB, triangles, collision shapes.

pub use glam::{Vec3, vec3};

pub mod aabb;
pub mod shape;
pub mod triangle;
