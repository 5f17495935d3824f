//! Simple ray tracer example.
//!
//! Renders the stock scene with a few extra spheres and saves a PNG.

use lum_renderer::{
    render_buckets, save_png, Camera, Color, Light, Plane, RenderConfig, Scene, Sphere, Vec3,
    DEFAULT_BUCKET_SIZE,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Lumen Ray Tracer - Simple Example");
    println!("=================================");

    // Build the scene
    let start = std::time::Instant::now();
    let scene = build_scene()?;
    println!("Scene built in {:?}", start.elapsed());

    let camera = Camera::default();
    let config = RenderConfig::default()
        .with_resolution(1200, 800)
        .with_lighting(100.0, 40.0)
        .with_background(Color::new(0.05, 0.05, 0.1));

    println!("Rendering {}x{}...", config.width, config.height);

    let start = std::time::Instant::now();
    let image = render_buckets(&scene, &camera, &config, DEFAULT_BUCKET_SIZE)?;
    println!("Rendered in {:?}", start.elapsed());

    let filename = "simple_render.png";
    save_png(&image, filename)?;
    println!("Saved to {}", filename);

    Ok(())
}

fn build_scene() -> Result<Scene, lum_renderer::ConstructionError> {
    let mut scene = Scene::new();

    // Ground
    scene.add(Plane::new(
        Vec3::new(0.0, -2.0, 0.0),
        Vec3::Y,
        20.0,
        20.0,
        Color::new(0.5, 0.5, 0.5),
    )?);

    // Three main spheres
    scene.add(Sphere::new(Vec3::new(0.0, -0.5, 0.0), 1.5, Color::new(1.0, 0.0, 0.0))?);
    scene.add(Sphere::new(Vec3::new(-3.0, 0.0, -3.0), 2.0, Color::new(0.0, 1.0, 0.0))?);
    scene.add(Sphere::new(Vec3::new(3.0, -1.0, -1.0), 1.0, Color::new(0.0, 0.0, 1.0))?);

    // A row of small spheres along the front edge
    for i in 0..7 {
        let x = i as f32 - 3.0;
        let tint = i as f32 / 6.0;
        scene.add(Sphere::new(
            Vec3::new(x, -1.7, 2.5),
            0.3,
            Color::new(tint, 0.8, 1.0 - tint),
        )?);
    }

    scene.add_light(Light::new(Vec3::new(5.0, 10.0, 5.0), 100.0)?);
    scene.add_light(Light::new(Vec3::new(-6.0, 4.0, 8.0), 100.0)?);

    println!("Created {} objects", scene.primitives().len());
    Ok(scene)
}
