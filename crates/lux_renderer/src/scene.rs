//! Scene orchestration and recursive shading.
//!
//! Shading is keyed on the material of the nearest hit:
//! - `Diffuse`: Lambertian term per point light, with hard shadows
//! - `Reflective`: a single mirror bounce
//! - `Refractive`: reflection and transmission blended by Fresnel reflectance
//!
//! Every secondary ray consumes one level of depth. Once the depth reaches
//! `RenderConfig::max_depth` the branch returns black.

use std::time::Instant;

use crate::{
    hittable::{closer, HitRecord, Hittable},
    optics, Camera, Entity, ImageBuffer, Material, PixelSink, PointLight, Ray, RenderConfig,
};
use lux_math::Color;

/// Entities, lights and render options.
///
/// Entities and lights are kept in insertion order. When two entities are
/// hit at exactly the same distance the one added first wins.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    config: RenderConfig,
    entities: Vec<Entity>,
    lights: Vec<PointLight>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            entities: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Add an entity to the scene.
    pub fn add_entity(&mut self, entity: impl Into<Entity>) {
        self.entities.push(entity.into());
    }

    /// Add a point light to the scene.
    pub fn add_point_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut RenderConfig {
        &mut self.config
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Camera for an image of the given size using this scene's options.
    pub fn camera(&self, width: u32, height: u32) -> Camera {
        Camera::new(width, height, self.config.fov_degrees, self.config.aa_multiplier)
    }

    /// Nearest hit over all entities, if any.
    pub fn closest_hit(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        self.entities
            .iter()
            .filter_map(|e| e.intersect(ray))
            .fold(None, closer)
    }

    /// Color seen along `ray` at recursion level `depth`.
    pub fn trace(&self, ray: &Ray, depth: u32) -> Color {
        let Some(hit) = self.closest_hit(ray) else {
            return Color::BLACK;
        };

        match *hit.material {
            Material::None => Color::BLACK,
            Material::Diffuse { color } => self.shade_diffuse(&hit, color),
            Material::Reflective { .. } => self.reflection(&hit, depth),
            Material::Refractive {
                refractive_index, ..
            } => self.fresnel_blend(&hit, depth, refractive_index),
        }
    }

    /// Sum of the Lambertian terms of every light, clamped after each light.
    ///
    /// Each light's term is clamped to [0, 1] before it is added, and that
    /// clamp must stay per light. No term is negative, so clamping the running
    /// sum after each light equals a single clamp at the end.
    fn shade_diffuse(&self, hit: &HitRecord<'_>, base: Color) -> Color {
        let mut output = Color::BLACK;
        for light in &self.lights {
            let light_color = self.shadowed_light(hit, light);
            let to_light = (light.position - hit.position).normalize();
            let cos = hit.normal.dot(to_light).max(0.0);

            let contribution = (base * light_color * cos).clamp();
            output = (output + contribution).clamp();
        }
        output
    }

    /// The light's color, or black if anything sits between the hit and it.
    fn shadowed_light(&self, hit: &HitRecord<'_>, light: &PointLight) -> Color {
        let offset = light.position - hit.position;
        let distance = offset.length();
        let to_light = offset / distance;
        let ray = Ray::offset(hit.position, to_light, self.config.ray_offset);

        let blocked = self
            .entities
            .iter()
            .filter_map(|e| e.intersect(&ray))
            .any(|h| h.t < distance);

        if blocked {
            Color::BLACK
        } else {
            light.color
        }
    }

    fn reflection(&self, hit: &HitRecord<'_>, depth: u32) -> Color {
        let depth = depth + 1;
        if depth >= self.config.max_depth {
            return Color::BLACK;
        }

        let direction = optics::reflect(hit.incident, hit.normal);
        let ray = Ray::offset(hit.position, direction, self.config.ray_offset);
        self.trace(&ray, depth)
    }

    fn refraction(&self, hit: &HitRecord<'_>, depth: u32, refractive_index: f64) -> Color {
        let depth = depth + 1;
        if depth >= self.config.max_depth {
            return Color::BLACK;
        }

        // Zero under total internal reflection; such a ray hits nothing
        let direction = optics::refract(hit.incident, hit.normal, refractive_index);
        let ray = Ray::offset(hit.position, direction, self.config.ray_offset);
        self.trace(&ray, depth)
    }

    fn fresnel_blend(&self, hit: &HitRecord<'_>, depth: u32, refractive_index: f64) -> Color {
        let depth = depth + 1;
        if depth >= self.config.max_depth {
            return Color::BLACK;
        }

        let kr = optics::fresnel(hit.incident, hit.normal, refractive_index);
        let refracted = if kr < 1.0 {
            self.refraction(hit, depth, refractive_index)
        } else {
            Color::BLACK
        };
        let reflected = self.reflection(hit, depth);

        reflected * kr + refracted * (1.0 - kr)
    }

    /// Mean color of the anti-aliasing samples of pixel (x, y).
    pub fn render_pixel(&self, camera: &Camera, x: u32, y: u32) -> Color {
        let mut sum = Color::BLACK;
        for ray in camera.sample_rays(x, y) {
            sum += self.trace(&ray, 0);
        }
        sum / camera.samples_per_pixel() as f64
    }

    /// Render into `sink`, one pixel at a time in raster order.
    pub fn render_to(&self, sink: &mut dyn PixelSink) {
        let (width, height) = sink.dimensions();
        let camera = self.camera(width, height);
        let start = Instant::now();

        for y in 0..height {
            for x in 0..width {
                let color = self.render_pixel(&camera, x, y);
                sink.set_pixel(x, y, color);
            }
        }

        log::info!(
            "Rendered {}x{} @ {} spp in {:?}",
            width,
            height,
            camera.samples_per_pixel(),
            start.elapsed()
        );
    }

    /// Render at the configured resolution on the calling thread.
    pub fn render(&self) -> ImageBuffer {
        let mut image = ImageBuffer::new(self.config.width, self.config.height);
        self.render_to(&mut image);
        image
    }
}
