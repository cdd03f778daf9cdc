//! CPU-side mesh data produced by the loaders.

/// Floats per interleaved record: 3 position + 2 texcoord + 3 normal.
pub const VERTEX_STRIDE: usize = 8;

/// Interleaved vertex data plus the indices to draw it with.
///
/// With the duplicate-expanded ("sorted") construction the indices are the
/// trivial `[0, 1, ..]` sequence for non-indexed draws; with the
/// deduplicated construction they reference one record per declared
/// position for indexed draws.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlatModel {
    pub indices: Vec<u32>,
    pub buffer: Vec<f32>,
}

impl FlatModel {
    pub fn new(indices: Vec<u32>, buffer: Vec<f32>) -> Self {
        Self { indices, buffer }
    }

    /// Number of 8-float records in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VERTEX_STRIDE
    }

    /// Returns `true` if both buffers are non-empty.
    pub fn is_valid(&self) -> bool {
        !self.indices.is_empty() && !self.buffer.is_empty()
    }
}

/// A named sub-mesh delimited by `o` directives.
///
/// `lines` keeps the group's data in textual form so consumers can re-parse
/// it without the rest of the file; `face_indices` are group-local and
/// 1-based after renormalization (the smallest referenced vertex is 1).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshGroup {
    pub name: String,
    pub lines: Vec<String>,
    pub face_indices: Vec<i64>,
}

impl MeshGroup {
    pub fn face_count(&self) -> usize {
        self.face_indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_model_validity() {
        let model = FlatModel::new(vec![0], vec![0.0; VERTEX_STRIDE]);
        assert!(model.is_valid());
        assert_eq!(model.vertex_count(), 1);
        assert!(!FlatModel::default().is_valid());
    }

    #[test]
    fn group_face_count_is_triples() {
        let group = MeshGroup {
            name: "wall".to_string(),
            lines: Vec::new(),
            face_indices: vec![1, 2, 3, 2, 3, 4],
        };
        assert_eq!(group.face_count(), 2);
    }
}
