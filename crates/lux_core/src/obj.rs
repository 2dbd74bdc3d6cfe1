//! Wavefront OBJ parser for the subset used by mesh objects.
//!
//! # Supported Syntax
//!
//! - `v x y z` - vertex position
//! - `vn x y z` - vertex normal
//! - `f a//an b//bn c//cn` - triangle of position/normal index pairs (1-based)
//!
//! Any other line is ignored, as are `v`/`vn`/`f` lines that cannot be read.
//! A face that refers to a position or normal not yet declared is an error.

use std::fmt;
use std::path::Path;

use lux_math::Vec3;
use thiserror::Error;

use crate::mesh::{Mesh, MeshFace, MeshVertex};

/// Which index list a face corner refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Position,
    Normal,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::Position => f.write_str("vertex"),
            IndexKind::Normal => f.write_str("normal"),
        }
    }
}

/// Errors that can occur while loading an OBJ file.
#[derive(Error, Debug)]
pub enum ObjError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {kind} index {index} out of range (1..={count})")]
    IndexOutOfRange {
        line: usize,
        kind: IndexKind,
        index: usize,
        count: usize,
    },
}

/// Result type for OBJ operations.
pub type ObjResult<T> = Result<T, ObjError>;

/// Read and parse an OBJ file from disk.
pub fn load_obj<P: AsRef<Path>>(path: P, scale: f64, offset: Vec3) -> ObjResult<Mesh> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let mesh = parse_obj(&content, scale, offset)?;
    log::info!("Loaded {} faces from {}", mesh.face_count(), path.display());
    Ok(mesh)
}

/// Parse OBJ text into a mesh, applying `raw * scale + offset` to positions.
pub fn parse_obj(content: &str, scale: f64, offset: Vec3) -> ObjResult<Mesh> {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut normals: Vec<Vec3> = Vec::new();
    let mut mesh = Mesh::default();

    for (i, raw) in content.lines().enumerate() {
        let line = i + 1;
        let mut tokens = raw.split_whitespace();
        let Some(tag) = tokens.next() else {
            continue;
        };

        match tag {
            "v" => match parse_vec3(tokens) {
                Some(v) => positions.push(v),
                None => log::warn!("line {line}: skipping malformed vertex"),
            },
            "vn" => match parse_vec3(tokens) {
                Some(n) => normals.push(n),
                None => log::warn!("line {line}: skipping malformed normal"),
            },
            "f" => {
                let corners: Vec<&str> = tokens.collect();
                if corners.len() < 3 {
                    log::warn!("line {line}: skipping face with {} corners", corners.len());
                    continue;
                }
                if corners.len() > 3 {
                    log::warn!(
                        "line {line}: face has {} corners, only the first three are used",
                        corners.len()
                    );
                }

                let mut parsed = [(0usize, 0usize); 3];
                let mut malformed = false;
                for (slot, corner) in parsed.iter_mut().zip(&corners) {
                    match parse_corner(corner) {
                        Some(pair) => *slot = pair,
                        None => {
                            malformed = true;
                            break;
                        }
                    }
                }
                if malformed {
                    log::warn!("line {line}: skipping face with malformed corner");
                    continue;
                }

                let mut vertices = [MeshVertex {
                    position: Vec3::ZERO,
                    normal: Vec3::ZERO,
                }; 3];
                for (vertex, (vi, ni)) in vertices.iter_mut().zip(parsed) {
                    let position = lookup(&positions, vi, IndexKind::Position, line)?;
                    let normal = lookup(&normals, ni, IndexKind::Normal, line)?;
                    *vertex = MeshVertex::transformed(position, normal, scale, offset);
                }
                mesh.push(MeshFace::new(vertices[0], vertices[1], vertices[2]));
            }
            _ => {
                if !tag.starts_with('#') {
                    log::debug!("line {line}: ignoring '{tag}'");
                }
            }
        }
    }

    Ok(mesh)
}

fn parse_vec3<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Option<Vec3> {
    let x = tokens.next()?.parse().ok()?;
    let y = tokens.next()?.parse().ok()?;
    let z = tokens.next()?.parse().ok()?;
    Some(Vec3::new(x, y, z))
}

/// Parse an `a//an` corner into its raw 1-based indices.
fn parse_corner(corner: &str) -> Option<(usize, usize)> {
    let (v, n) = corner.split_once("//")?;
    Some((v.parse().ok()?, n.parse().ok()?))
}

fn lookup(list: &[Vec3], index: usize, kind: IndexKind, line: usize) -> ObjResult<Vec3> {
    index
        .checked_sub(1)
        .and_then(|i| list.get(i))
        .copied()
        .ok_or(ObjError::IndexOutOfRange {
            line,
            kind,
            index,
            count: list.len(),
        })
}
