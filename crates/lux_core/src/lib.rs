//! Lux Core - renderer-agnostic scene data.
//!
//! This crate provides:
//!
//! - **Mesh geometry**: `Mesh`, `MeshFace`, `MeshVertex`
//! - **OBJ support**: a parser for the `v` / `vn` / `f a//an` subset
//! - **Scene descriptions**: serde types for JSON scene files
//!
//! # Example
//!
//! ```ignore
//! use lux_core::obj::load_obj;
//! use lux_math::Vec3;
//!
//! let mesh = load_obj("bunny.obj", 1.0, Vec3::new(0.0, 0.0, 3.0))?;
//! println!("Loaded {} faces", mesh.face_count());
//! ```

pub mod mesh;
pub mod obj;
pub mod scene;

// Re-export commonly used types
pub use mesh::{Mesh, MeshFace, MeshVertex};
pub use obj::{load_obj, parse_obj, ObjError, ObjResult};
pub use scene::{
    EntityDescription, LightDescription, MaterialDescription, OptionsDescription,
    SceneDescription, SceneError, SceneResult,
};
