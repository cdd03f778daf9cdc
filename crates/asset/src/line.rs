//! Line-level tokenizer for the OBJ dialect used by the maze assets.
//!
//! Both loaders dispatch on the [`ObjLine`] produced here instead of
//! comparing tag strings. Directives outside `v`/`vt`/`vn`/`f`/`o`/`s`
//! (comments, `mtllib`, `usemtl`, `g`, ...) map to [`ObjLine::Unknown`].

use std::str::SplitWhitespace;

/// One face corner. Indices are 0-based: the 1-based convention of the file
/// is converted exactly once, here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceCorner {
    pub position: usize,
    pub texcoord: Option<usize>,
    pub normal: Option<usize>,
}

/// Parse result for a single OBJ line.
#[derive(Clone, Debug, PartialEq)]
pub enum ObjLine {
    Vertex([f32; 3]),
    TexCoord([f32; 2]),
    Normal([f32; 3]),
    /// Corners as they appeared; the count is validated by the loaders.
    Face(Vec<FaceCorner>),
    Group(String),
    Smoothing(i64),
    Unknown,
}

/// Tokenize one line. Never fails: a malformed `v`/`vt`/`vn`/`o`/`s`
/// payload degrades to [`ObjLine::Unknown`], a malformed face corner is
/// dropped from its face. Both are reported with a warning.
pub fn parse_line(line: &str) -> ObjLine {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return ObjLine::Unknown;
    }

    let mut parts = trimmed.split_whitespace();
    let Some(tag) = parts.next() else {
        return ObjLine::Unknown;
    };

    match tag {
        "v" => match parse_floats::<3>(parts) {
            Some(xyz) => ObjLine::Vertex(xyz),
            None => malformed(trimmed),
        },
        "vt" => match parse_floats::<2>(parts) {
            Some(uv) => ObjLine::TexCoord(uv),
            None => malformed(trimmed),
        },
        "vn" => match parse_floats::<3>(parts) {
            Some(n) => ObjLine::Normal(n),
            None => malformed(trimmed),
        },
        "f" => {
            let mut corners = Vec::new();
            for field in parts {
                match parse_corner(field) {
                    Some(corner) => corners.push(corner),
                    None => {
                        log::warn!("Malformed face corner '{field}' in '{trimmed}', skipping it");
                    }
                }
            }
            ObjLine::Face(corners)
        }
        "o" => match parts.next() {
            Some(name) => ObjLine::Group(name.to_string()),
            None => malformed(trimmed),
        },
        "s" => match parts.next().and_then(|tok| tok.parse::<i64>().ok()) {
            Some(group) => ObjLine::Smoothing(group),
            None => malformed(trimmed),
        },
        _ => ObjLine::Unknown,
    }
}

fn malformed(line: &str) -> ObjLine {
    log::warn!("Malformed OBJ line '{line}', ignoring it");
    ObjLine::Unknown
}

fn parse_floats<const N: usize>(mut parts: SplitWhitespace) -> Option<[f32; N]> {
    let mut out = [0.0f32; N];
    for slot in &mut out {
        *slot = parts.next()?.parse().ok()?;
    }
    Some(out)
}

/// Parse `pos[/tex[/norm]]`. Empty sub-tokens (`1//3`) yield `None`;
/// anything non-numeric, zero or negative invalidates the whole corner
/// (negative-relative indices are not part of the dialect).
fn parse_corner(field: &str) -> Option<FaceCorner> {
    let mut split = field.splitn(3, '/');
    let position = parse_index(split.next()?)?;
    let texcoord = match split.next() {
        None | Some("") => None,
        Some(token) => Some(parse_index(token)?),
    };
    let normal = match split.next() {
        None | Some("") => None,
        Some(token) => Some(parse_index(token)?),
    };
    Some(FaceCorner {
        position,
        texcoord,
        normal,
    })
}

fn parse_index(token: &str) -> Option<usize> {
    let raw: i64 = token.parse().ok()?;
    if raw < 1 {
        return None;
    }
    Some(raw as usize - 1)
}
