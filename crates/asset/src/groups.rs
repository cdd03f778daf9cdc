//! Grouped OBJ loader: splits a multi-object file on `o` markers.
//!
//! Each group keeps its data as raw text lines so downstream consumers
//! (the collision layer) can re-parse a wall without the rest of the file.
//! Face indices are renormalized per group: the smallest referenced vertex
//! becomes 1, decoupling the group from the file's global numbering.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use crate::line::{ObjLine, parse_line};
use crate::mesh::MeshGroup;

/// Load all mesh groups from a file path.
///
/// An unopenable file is reported and yields an empty vector; the caller
/// never sees an error value from this entry point.
pub fn load_groups(path: impl AsRef<Path>) -> Vec<MeshGroup> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            log::error!("Failed to open OBJ file {}: {err}", path.display());
            return Vec::new();
        }
    };
    load_groups_from_reader(BufReader::new(file))
}

/// Convenience helper to parse an OBJ string literal.
pub fn load_groups_from_str(contents: &str) -> Vec<MeshGroup> {
    load_groups_from_reader(io::Cursor::new(contents))
}

/// Load all mesh groups from a [`BufRead`] implementation.
///
/// Single forward pass. A group opens at an `o` line and closes at the next
/// `o` line or end of input; lines before the first `o` have no group to
/// live in and are dropped.
pub fn load_groups_from_reader<R: BufRead>(reader: R) -> Vec<MeshGroup> {
    let mut groups: Vec<MeshGroup> = Vec::new();
    let mut current = MeshGroup::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::error!("Read error at line {}: {err}", line_no + 1);
                break;
            }
        };
        match parse_line(&line) {
            ObjLine::Group(name) => {
                if !current.name.is_empty() {
                    groups.push(std::mem::take(&mut current));
                }
                current.lines.push(format!("o {name}"));
                current.name = name;
            }
            // No current group yet: orphan data lines are a no-op.
            _ if current.name.is_empty() => {}
            ObjLine::Vertex([x, y, z]) => current.lines.push(format!("v {x} {y} {z}")),
            ObjLine::Face(corners) => {
                if corners.len() == 3 {
                    // Only the leading index of each corner matters here;
                    // raw `f` lines are synthesized by the post-pass.
                    current
                        .face_indices
                        .extend(corners.iter().map(|corner| corner.position as i64));
                } else {
                    log::warn!(
                        "Group '{}': face with {} usable corners, triangles only; skipping face",
                        current.name,
                        corners.len()
                    );
                }
            }
            ObjLine::Smoothing(group) => current.lines.push(format!("s {group}")),
            ObjLine::TexCoord(_) | ObjLine::Normal(_) | ObjLine::Unknown => {}
        }
    }
    if !current.name.is_empty() {
        groups.push(current);
    }

    for group in &mut groups {
        renormalize_faces(group);
    }
    groups
}

/// Shift a group's face indices so the smallest becomes 1, then append the
/// synthesized `f a b c` lines so the raw lines are self-contained.
///
/// The minimum is recomputed over the whole list here rather than tracked
/// during the pass, which keeps out-of-order face lines correct.
fn renormalize_faces(group: &mut MeshGroup) {
    let Some(min) = group.face_indices.iter().copied().min() else {
        return;
    };
    for index in &mut group.face_indices {
        *index = *index - min + 1;
    }
    for tri in group.face_indices.chunks_exact(3) {
        group.lines.push(format!("f {} {} {}", tri[0], tri[1], tri[2]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_WALLS: &str = "\
o wallA
v 0 0 0
v 1 0 0
v 0 1 0
f 10 11 12
o wallB
v 0 0 2
v 1 0 2
v 0 1 2
f 20 21 22
";

    #[test]
    fn one_group_per_o_directive_in_file_order() {
        let groups = load_groups_from_str(TWO_WALLS);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "wallA");
        assert_eq!(groups[1].name, "wallB");
    }

    #[test]
    fn face_indices_renormalize_to_start_at_one() {
        let groups = load_groups_from_str(TWO_WALLS);
        assert_eq!(groups[0].face_indices, vec![1, 2, 3]);
        assert_eq!(groups[1].face_indices, vec![1, 2, 3]);
        for group in &groups {
            assert_eq!(group.face_indices.iter().min(), Some(&1));
        }
    }

    #[test]
    fn raw_lines_carry_header_vertices_and_synthesized_faces() {
        let groups = load_groups_from_str(TWO_WALLS);
        let lines = &groups[0].lines;
        assert_eq!(lines[0], "o wallA");
        assert_eq!(lines[1], "v 0 0 0");
        assert_eq!(lines[2], "v 1 0 0");
        assert_eq!(lines[3], "v 0 1 0");
        assert_eq!(lines[4], "f 1 2 3");
    }

    #[test]
    fn out_of_order_faces_use_the_true_minimum() {
        let src = "\
o wall
v 0 0 0
v 1 0 0
v 0 1 0
f 31 32 33
f 30 32 31
";
        let groups = load_groups_from_str(src);
        assert_eq!(groups[0].face_indices, vec![2, 3, 4, 1, 3, 2]);
        assert_eq!(groups[0].lines.last().unwrap(), "f 1 3 2");
    }

    #[test]
    fn smoothing_lines_are_carried_through() {
        let src = "\
o wall
v 0 0 0
s 1
f 1 2 3
";
        let groups = load_groups_from_str(src);
        assert!(groups[0].lines.contains(&"s 1".to_string()));
    }

    #[test]
    fn orphan_lines_before_first_group_are_dropped() {
        let src = "\
v 9 9 9
f 1 2 3
s 1
o wall
v 0 0 0
f 4 5 6
";
        let groups = load_groups_from_str(src);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].lines, vec!["o wall", "v 0 0 0", "f 1 2 3"]);
        assert_eq!(groups[0].face_indices, vec![1, 2, 3]);
    }

    #[test]
    fn vertex_lines_round_trip_full_precision() {
        let src = "o wall\nv 0.12890625 -2.5 3.25\n";
        let groups = load_groups_from_str(src);
        assert_eq!(groups[0].lines[1], "v 0.12890625 -2.5 3.25");
    }

    #[test]
    fn face_only_corner_components_are_ignored() {
        let src = "\
o wall
v 0 0 0
f 4/1/1 5/2/1 6/3/1
";
        let groups = load_groups_from_str(src);
        assert_eq!(groups[0].face_indices, vec![1, 2, 3]);
    }

    #[test]
    fn missing_file_reports_and_returns_empty() {
        assert!(load_groups("/definitely/not/here.obj").is_empty());
    }

    #[test]
    fn group_without_faces_keeps_its_vertices() {
        let src = "o empty\nv 1 2 3\n";
        let groups = load_groups_from_str(src);
        assert_eq!(groups.len(), 1);
        assert!(groups[0].face_indices.is_empty());
        assert_eq!(groups[0].lines, vec!["o empty", "v 1 2 3"]);
    }
}
