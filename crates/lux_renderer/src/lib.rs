//! Lux Renderer - recursive CPU ray tracing.
//!
//! A Whitted-style ray tracer: diffuse surfaces lit by point lights with
//! hard shadows, perfect mirrors, and dielectrics that blend reflection
//! and refraction by Fresnel reflectance.
//!
//! # Example
//!
//! ```ignore
//! use lux_renderer::{Color, Material, PointLight, RenderConfig, Scene, Sphere, Vec3};
//!
//! let mut scene = Scene::new(RenderConfig::default().with_resolution(320, 240));
//! scene.add_entity(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, Material::diffuse(Color::WHITE)));
//! scene.add_point_light(PointLight::new(Vec3::new(0.0, 5.0, 0.0), Color::WHITE));
//!
//! scene.render().save("sphere.png")?;
//! ```

mod bucket;
mod builder;
mod camera;
mod entity;
mod hittable;
mod light;
mod material;
mod mesh_object;
pub mod optics;
mod plane;
mod renderer;
mod scene;
mod sphere;
mod triangle;

pub use bucket::{
    generate_buckets, render_bucket, render_parallel, render_parallel_with_bucket_size, Bucket,
    BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use builder::{build_scene, load_scene, validate_config, BuildError, BuildResult};
pub use camera::Camera;
pub use entity::Entity;
pub use hittable::{closer, HitRecord, Hittable};
pub use light::PointLight;
pub use material::Material;
pub use mesh_object::MeshObject;
pub use plane::Plane;
pub use renderer::{color_to_rgba, ImageBuffer, PixelSink, RenderConfig, MAX_AA_MULTIPLIER};
pub use scene::Scene;
pub use sphere::Sphere;
pub use triangle::{Triangle, DEFAULT_CONTAINMENT_TOLERANCE};

/// Re-export the math types used throughout the public API
pub use lux_math::{Aabb, Color, Interval, Ray, Vec3};
