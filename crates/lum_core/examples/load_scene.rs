//! Example: Load and inspect a scene file.
//!
//! Run with: cargo run --example load_scene -- scenes/default.json

use std::env;

use lum_core::{load_scene, PrimitiveDescription};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: load_scene <path-to-scene-json>");
        println!("\nExample:");
        println!("  cargo run --example load_scene -- scenes/default.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            let camera = &scene.camera;
            println!("\n=== Camera ===");
            println!(
                "  Eye ({:.2}, {:.2}, {:.2}), view plane ({:.2}, {:.2}) to ({:.2}, {:.2}) \
                 at z={:.2}",
                camera.position[0],
                camera.position[1],
                camera.position[2],
                camera.view_min[0],
                camera.view_min[1],
                camera.view_max[0],
                camera.view_max[1],
                camera.view_z
            );

            println!("\n--- Primitives ---");
            for (i, primitive) in scene.primitives.iter().enumerate() {
                match primitive {
                    PrimitiveDescription::Sphere { center, radius, .. } => println!(
                        "  [{}] Sphere r={:.2} at ({:.2}, {:.2}, {:.2})",
                        i, radius, center[0], center[1], center[2]
                    ),
                    PrimitiveDescription::Plane {
                        position,
                        width,
                        height,
                        texture,
                        ..
                    } => println!(
                        "  [{}] Plane {:.2}x{:.2} at ({:.2}, {:.2}, {:.2}){}",
                        i,
                        width,
                        height,
                        position[0],
                        position[1],
                        position[2],
                        texture
                            .as_deref()
                            .map(|t| format!(" textured with {}", t))
                            .unwrap_or_default()
                    ),
                }
            }

            println!("\n--- Lights ---");
            for (i, light) in scene.lights.iter().enumerate() {
                println!(
                    "  [{}] Point light at ({:.2}, {:.2}, {:.2})",
                    i, light.position[0], light.position[1], light.position[2]
                );
            }
        }
        Err(e) => {
            eprintln!("Error loading scene file: {}", e);
        }
    }
}
