//! OBJ mesh loaders for the maze demo.
//! Flat loader: single object -> interleaved vertex buffer + index list.
//! Grouped loader: `o`-delimited sub-meshes with group-local face indices.

pub mod groups;
pub mod line;
pub mod mesh;
pub mod model;
