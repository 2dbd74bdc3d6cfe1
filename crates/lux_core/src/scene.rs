//! Serializable scene descriptions.
//!
//! A scene file is a JSON document with render options, a table of named
//! materials, an ordered list of entities and an ordered list of point
//! lights. Order is preserved all the way into the renderer, so ties between
//! equally distant surfaces resolve the same way on every run.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Entity {index} refers to unknown material '{name}'")]
    UnknownMaterial { index: usize, name: String },
}

/// Result type for scene description operations.
pub type SceneResult<T> = Result<T, SceneError>;

fn default_width() -> u32 {
    400
}

fn default_height() -> u32 {
    400
}

fn default_aa() -> u32 {
    1
}

fn default_fov() -> f64 {
    60.0
}

fn default_max_depth() -> u32 {
    10
}

fn default_scale() -> f64 {
    1.0
}

/// Render options block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptionsDescription {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Samples per pixel edge; each pixel gets `aa_multiplier²` rays
    #[serde(default = "default_aa")]
    pub aa_multiplier: u32,
    /// Field of view in degrees
    #[serde(default = "default_fov")]
    pub fov: f64,
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
}

impl Default for OptionsDescription {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            aa_multiplier: default_aa(),
            fov: default_fov(),
            max_depth: default_max_depth(),
        }
    }
}

/// A surface material.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialDescription {
    Diffuse {
        color: [f64; 3],
    },
    Reflective {
        color: [f64; 3],
    },
    Refractive {
        color: [f64; 3],
        refractive_index: f64,
    },
}

/// A renderable entity. `material` names an entry of the material table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntityDescription {
    Sphere {
        center: [f64; 3],
        radius: f64,
        material: String,
    },
    Plane {
        center: [f64; 3],
        normal: [f64; 3],
        material: String,
    },
    Triangle {
        v0: [f64; 3],
        v1: [f64; 3],
        v2: [f64; 3],
        material: String,
    },
    ObjModel {
        /// OBJ path, relative to the scene file
        path: String,
        #[serde(default)]
        offset: [f64; 3],
        #[serde(default = "default_scale")]
        scale: f64,
        material: String,
    },
}

impl EntityDescription {
    pub fn material(&self) -> &str {
        match self {
            EntityDescription::Sphere { material, .. }
            | EntityDescription::Plane { material, .. }
            | EntityDescription::Triangle { material, .. }
            | EntityDescription::ObjModel { material, .. } => material,
        }
    }
}

/// A point light.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightDescription {
    pub position: [f64; 3],
    pub color: [f64; 3],
}

/// A complete scene file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub options: OptionsDescription,
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialDescription>,
    #[serde(default)]
    pub entities: Vec<EntityDescription>,
    #[serde(default)]
    pub lights: Vec<LightDescription>,
}

impl SceneDescription {
    /// Parse a description from JSON text and check material references.
    pub fn from_json(content: &str) -> SceneResult<Self> {
        let description: SceneDescription = serde_json::from_str(content)?;
        description.validate()?;
        Ok(description)
    }

    /// Read a description from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> SceneResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let description = Self::from_json(&content)?;
        log::info!(
            "Read scene {}: {} entities, {} lights",
            path.display(),
            description.entities.len(),
            description.lights.len()
        );
        Ok(description)
    }

    /// Ensure every entity names a material from the table.
    pub fn validate(&self) -> SceneResult<()> {
        for (index, entity) in self.entities.iter().enumerate() {
            if !self.materials.contains_key(entity.material()) {
                return Err(SceneError::UnknownMaterial {
                    index,
                    name: entity.material().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Look up an entity's material.
    pub fn material_for(&self, entity: &EntityDescription) -> Option<&MaterialDescription> {
        self.materials.get(entity.material())
    }
}
