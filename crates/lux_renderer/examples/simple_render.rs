//! Simple ray tracer example.
//!
//! Renders a glass sphere, a mirror sphere and a diffuse floor, then saves
//! the result as PNG.

use lux_renderer::{
    render_parallel, Color, Material, Plane, PointLight, RenderConfig, Scene, Sphere, Triangle,
    Vec3,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Lux Ray Tracer - Simple Example");
    println!("===============================");

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!("Scene built in {:?}", start.elapsed());

    let config = scene.config();
    println!(
        "Rendering {}x{} @ {} spp...",
        config.width,
        config.height,
        scene.camera(config.width, config.height).samples_per_pixel()
    );

    let start = std::time::Instant::now();
    let image = render_parallel(&scene);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.png";
    image.save(filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let config = RenderConfig::default()
        .with_resolution(640, 480)
        .with_aa(2);
    let mut scene = Scene::new(config);

    // Floor
    scene.add_entity(Plane::new(
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::Y,
        Material::diffuse(Color::new(0.8, 0.8, 0.8)),
    ));

    // Back wall
    scene.add_entity(Plane::new(
        Vec3::new(0.0, 0.0, 12.0),
        -Vec3::Z,
        Material::diffuse(Color::new(0.4, 0.5, 0.9)),
    ));

    scene.add_entity(Sphere::new(
        Vec3::new(-1.2, 0.0, 5.0),
        1.0,
        Material::refractive(Color::WHITE, 1.5),
    ));

    scene.add_entity(Sphere::new(
        Vec3::new(1.3, 0.0, 6.5),
        1.0,
        Material::reflective(Color::WHITE),
    ));

    scene.add_entity(Triangle::new(
        Vec3::new(-3.0, -1.0, 9.0),
        Vec3::new(-1.0, -1.0, 10.0),
        Vec3::new(-2.0, 1.5, 9.5),
        Material::diffuse(Color::new(0.9, 0.3, 0.2)),
    ));

    scene.add_point_light(PointLight::new(Vec3::new(0.0, 6.0, 0.0), Color::splat(0.8)));
    scene.add_point_light(PointLight::new(Vec3::new(-4.0, 3.0, 2.0), Color::splat(0.4)));

    println!("Created {} entities", scene.entities().len());
    scene
}
