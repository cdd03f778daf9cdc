//! Flat OBJ loader: parses a single-object file into an interleaved
//! position/texcoord/normal buffer plus an index list.
//!
//! Two construction policies, picked by the `sorted` flag:
//! - `sorted = true`: one record per face corner in face order, paired with
//!   the implicit `[0, 1, ..]` index list (non-indexed drawing).
//! - `sorted = false`: one record per declared position in declaration
//!   order, paired with the faces' position indices (indexed drawing).
//!   The texcoord/normal of a record come from the FIRST face corner that
//!   references its position; later corners reusing the position with a
//!   different texcoord/normal are dropped, so UV seams keep only their
//!   first attribute set. Documented policy, not a bug.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result};

use crate::line::{FaceCorner, ObjLine, parse_line};
use crate::mesh::{FlatModel, VERTEX_STRIDE};

/// Texcoord emitted for corners that reference none.
const DEFAULT_TEXCOORD: [f32; 2] = [0.0, 0.0];
/// Normal emitted for corners that reference none.
const DEFAULT_NORMAL: [f32; 3] = [0.0, 0.0, 1.0];

/// Load an OBJ model from a file path. Unreadable paths are a hard error.
pub fn load_model(path: impl AsRef<Path>, sorted: bool) -> Result<FlatModel> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open OBJ file: {}", path.as_ref().display()))?;
    load_model_from_reader(BufReader::new(file), sorted)
}

/// Convenience helper to parse an OBJ string literal.
pub fn load_model_from_str(contents: &str, sorted: bool) -> Result<FlatModel> {
    load_model_from_reader(io::Cursor::new(contents), sorted)
}

/// Load an OBJ model from a [`BufRead`] implementation.
///
/// All state lives in this call; the returned buffers are freshly owned by
/// the caller and nothing leaks into subsequent loads.
pub fn load_model_from_reader<R: BufRead>(reader: R, sorted: bool) -> Result<FlatModel> {
    let mut positions: Vec<f32> = Vec::new();
    let mut texcoords: Vec<f32> = Vec::new();
    let mut normals: Vec<f32> = Vec::new();
    let mut faces: Vec<[FaceCorner; 3]> = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", line_no + 1))?;
        match parse_line(&line) {
            ObjLine::Vertex(xyz) => positions.extend_from_slice(&xyz),
            ObjLine::TexCoord(uv) => texcoords.extend_from_slice(&uv),
            ObjLine::Normal(n) => normals.extend_from_slice(&n),
            ObjLine::Face(corners) => match <[FaceCorner; 3]>::try_from(corners.as_slice()) {
                Ok(tri) => faces.push(tri),
                Err(_) => log::warn!(
                    "Line {}: face with {} usable corners, triangles only; skipping face",
                    line_no + 1,
                    corners.len()
                ),
            },
            // `o` and `s` carry no meaning for the flat loader.
            ObjLine::Group(_) | ObjLine::Smoothing(_) | ObjLine::Unknown => {}
        }
    }

    let model = if sorted {
        build_sorted(&faces, &positions, &texcoords, &normals)
    } else {
        build_unsorted(&faces, &positions, &texcoords, &normals)
    };
    Ok(model)
}

/// Duplicate-expanded buffer: 24 floats per kept face, indices `[0, 1, ..]`.
fn build_sorted(
    faces: &[[FaceCorner; 3]],
    positions: &[f32],
    texcoords: &[f32],
    normals: &[f32],
) -> FlatModel {
    let mut buffer = Vec::with_capacity(faces.len() * 3 * VERTEX_STRIDE);
    for (face_no, face) in faces.iter().enumerate() {
        let mut records = [[0.0f32; VERTEX_STRIDE]; 3];
        let mut in_range = true;
        for (record, corner) in records.iter_mut().zip(face) {
            match interleave(corner, positions, texcoords, normals) {
                Some(floats) => *record = floats,
                None => {
                    in_range = false;
                    break;
                }
            }
        }
        if !in_range {
            log::warn!("Face {}: index out of range, skipping face", face_no + 1);
            continue;
        }
        for record in &records {
            buffer.extend_from_slice(record);
        }
    }

    let indices = (0..(buffer.len() / VERTEX_STRIDE) as u32).collect();
    FlatModel::new(indices, buffer)
}

/// Deduplicated buffer: one record per declared position, indices are the
/// kept faces' position indices in face order.
fn build_unsorted(
    faces: &[[FaceCorner; 3]],
    positions: &[f32],
    texcoords: &[f32],
    normals: &[f32],
) -> FlatModel {
    let vertex_count = positions.len() / 3;

    // Keep only fully in-range faces so the index list never references a
    // record the buffer cannot serve.
    let mut kept: Vec<&[FaceCorner; 3]> = Vec::with_capacity(faces.len());
    for (face_no, face) in faces.iter().enumerate() {
        let in_range = face
            .iter()
            .all(|corner| interleave(corner, positions, texcoords, normals).is_some());
        if in_range {
            kept.push(face);
        } else {
            log::warn!("Face {}: index out of range, skipping face", face_no + 1);
        }
    }

    let mut buffer = Vec::with_capacity(vertex_count * VERTEX_STRIDE);
    for vi in 0..vertex_count {
        let first = kept
            .iter()
            .flat_map(|face| face.iter())
            .find(|corner| corner.position == vi);
        match first {
            Some(corner) => {
                // interleave() re-reads the position from the pool, so the
                // record lands on the right coordinates either way.
                let record = interleave(corner, positions, texcoords, normals)
                    .unwrap_or([0.0; VERTEX_STRIDE]);
                buffer.extend_from_slice(&record);
            }
            None => {
                // Position never referenced by a face: neutral attributes.
                buffer.extend_from_slice(&positions[vi * 3..vi * 3 + 3]);
                buffer.extend_from_slice(&DEFAULT_TEXCOORD);
                buffer.extend_from_slice(&DEFAULT_NORMAL);
            }
        }
    }

    let indices = kept
        .iter()
        .flat_map(|face| face.iter())
        .map(|corner| corner.position as u32)
        .collect();
    FlatModel::new(indices, buffer)
}

/// Build one 8-float record for a corner. `None` when any referenced index
/// falls outside its pool. Missing texcoord/normal references use the
/// neutral defaults.
fn interleave(
    corner: &FaceCorner,
    positions: &[f32],
    texcoords: &[f32],
    normals: &[f32],
) -> Option<[f32; VERTEX_STRIDE]> {
    let mut out = [0.0f32; VERTEX_STRIDE];
    let pi = corner.position * 3;
    out[..3].copy_from_slice(positions.get(pi..pi + 3)?);
    match corner.texcoord {
        Some(ti) => out[3..5].copy_from_slice(texcoords.get(ti * 2..ti * 2 + 2)?),
        None => out[3..5].copy_from_slice(&DEFAULT_TEXCOORD),
    }
    match corner.normal {
        Some(ni) => out[5..8].copy_from_slice(normals.get(ni * 3..ni * 3 + 3)?),
        None => out[5..8].copy_from_slice(&DEFAULT_NORMAL),
    }
    Some(out)
}
