//! Turn a scene description into a renderable [`Scene`].

use std::path::{Path, PathBuf};

use lux_core::{
    load_obj, EntityDescription, LightDescription, MaterialDescription, ObjError,
    OptionsDescription, SceneDescription, SceneError,
};
use lux_math::{Color, Vec3};
use thiserror::Error;

use crate::{
    Entity, Material, MeshObject, Plane, PointLight, RenderConfig, Scene, Sphere, Triangle,
    MAX_AA_MULTIPLIER,
};

/// Errors that can occur while building a scene.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error("Failed to load OBJ model {path}: {source}")]
    Obj {
        path: PathBuf,
        #[source]
        source: ObjError,
    },

    #[error("Anti-aliasing multiplier {value} is above the maximum of {max}")]
    AaMultiplier { value: u32, max: u32 },
}

/// Result type for scene building.
pub type BuildResult<T> = Result<T, BuildError>;

impl From<&OptionsDescription> for RenderConfig {
    fn from(options: &OptionsDescription) -> Self {
        RenderConfig::default()
            .with_resolution(options.width, options.height)
            .with_aa(options.aa_multiplier)
            .with_fov(options.fov)
            .with_max_depth(options.max_depth)
    }
}

impl From<&MaterialDescription> for Material {
    fn from(description: &MaterialDescription) -> Self {
        match *description {
            MaterialDescription::Diffuse { color } => Material::diffuse(Color::from(color)),
            MaterialDescription::Reflective { color } => Material::reflective(Color::from(color)),
            MaterialDescription::Refractive {
                color,
                refractive_index,
            } => Material::refractive(Color::from(color), refractive_index),
        }
    }
}

impl From<&LightDescription> for PointLight {
    fn from(light: &LightDescription) -> Self {
        PointLight::new(Vec3::from(light.position), Color::from(light.color))
    }
}

/// Reject render options the renderer cannot honor.
pub fn validate_config(config: &RenderConfig) -> BuildResult<()> {
    if config.aa_multiplier > MAX_AA_MULTIPLIER {
        return Err(BuildError::AaMultiplier {
            value: config.aa_multiplier,
            max: MAX_AA_MULTIPLIER,
        });
    }
    Ok(())
}

/// Build a scene. Relative OBJ paths are resolved against `base_dir`.
///
/// Entities and lights keep the order of the description.
pub fn build_scene(description: &SceneDescription, base_dir: &Path) -> BuildResult<Scene> {
    description.validate()?;

    let config = RenderConfig::from(&description.options);
    validate_config(&config)?;
    let mut scene = Scene::new(config);

    for (index, entity) in description.entities.iter().enumerate() {
        let material = description
            .material_for(entity)
            .map(Material::from)
            .ok_or_else(|| SceneError::UnknownMaterial {
                index,
                name: entity.material().to_string(),
            })?;
        scene.add_entity(build_entity(entity, material, base_dir)?);
    }

    for light in &description.lights {
        scene.add_point_light(PointLight::from(light));
    }

    log::debug!(
        "Built scene with {} entities and {} lights",
        scene.entities().len(),
        scene.lights().len()
    );

    Ok(scene)
}

fn build_entity(entity: &EntityDescription, material: Material, base_dir: &Path) -> BuildResult<Entity> {
    let entity: Entity = match entity {
        EntityDescription::Sphere { center, radius, .. } => {
            Sphere::new(Vec3::from(*center), *radius, material).into()
        }
        EntityDescription::Plane { center, normal, .. } => {
            Plane::new(Vec3::from(*center), Vec3::from(*normal), material).into()
        }
        EntityDescription::Triangle { v0, v1, v2, .. } => {
            Triangle::new(Vec3::from(*v0), Vec3::from(*v1), Vec3::from(*v2), material).into()
        }
        EntityDescription::ObjModel {
            path,
            offset,
            scale,
            ..
        } => {
            let path = base_dir.join(path);
            let mesh = load_obj(&path, *scale, Vec3::from(*offset))
                .map_err(|source| BuildError::Obj { path, source })?;
            MeshObject::new(&mesh, material).into()
        }
    };
    Ok(entity)
}

/// Read a scene file and build it. OBJ paths are relative to the file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> BuildResult<Scene> {
    let path = path.as_ref();
    let description = SceneDescription::load(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    build_scene(&description, base_dir)
}
