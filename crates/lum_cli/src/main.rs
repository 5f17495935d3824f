use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use lum_core::{load_scene, SceneDescription, TextureCache};
use lum_renderer::{
    render, render_buckets, save_png, Camera, Color, ImageBuffer, RenderConfig, Scene,
};

mod cli;

use cli::Args;

/// Render settings from the command line plus the scene's background.
fn render_config(args: &Args, description: &SceneDescription) -> RenderConfig {
    RenderConfig {
        width: args.width,
        height: args.height,
        ambient: args.ambient,
        light_intensity: args.intensity,
        specular_power: args.power,
        background: Color::from_array(description.background),
        ..RenderConfig::default()
    }
}

fn load_description(path: Option<&Path>) -> Result<SceneDescription> {
    match path {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display())),
        None => {
            log::info!("No scene file given, using the built-in scene");
            Ok(SceneDescription::builtin())
        }
    }
}

fn render_description(args: &Args, description: &SceneDescription) -> Result<ImageBuffer> {
    // Texture paths in a scene file are relative to that file
    let base_dir = args
        .scene
        .as_deref()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(PathBuf::new);
    let mut textures = TextureCache::with_base_dir(base_dir);
    textures
        .load_scene_textures(description)
        .context("Failed to load scene textures")?;

    let scene = Scene::from_description(description, &textures).context("Invalid scene")?;
    let camera = Camera::from_description(&description.camera).context("Invalid camera")?;
    let config = render_config(args, description);

    let image = if args.sequential {
        render(&scene, &camera, &config)
    } else {
        render_buckets(&scene, &camera, &config, args.bucket_size)
    }
    .context("Render failed")?;

    Ok(image)
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting Lumen");

    let description = load_description(args.scene.as_deref())?;
    if args.print_scene {
        println!("{}", serde_json::to_string_pretty(&description)?);
        return Ok(());
    }

    let image = render_description(&args, &description)?;
    save_png(&image, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lum_core::PrimitiveDescription;

    #[test]
    fn test_render_config_from_args() {
        let args = Args::parse_from(["lumen", "-i", "50", "-p", "10", "--width", "64"]);
        let mut description = SceneDescription::builtin();
        description.background = [0.1, 0.2, 0.3];

        let config = render_config(&args, &description);
        assert_eq!(config.width, 64);
        assert_eq!(config.light_intensity, 50.0);
        assert_eq!(config.specular_power, 10.0);
        assert_eq!(config.background, Color::new(0.1, 0.2, 0.3));
        assert_eq!(config.specular_color, Color::ONE);
    }

    #[test]
    fn test_render_builtin_scene() {
        let args = Args::parse_from(["lumen", "--width", "30", "--height", "20"]);
        let image = render_description(&args, &SceneDescription::builtin()).unwrap();
        assert_eq!((image.width, image.height), (30, 20));
        // The ground plane and spheres cover part of the frame
        assert!(image.pixels.iter().any(|&p| p != Color::ZERO));
    }

    #[test]
    fn test_bad_settings_are_errors() {
        let args = Args::parse_from(["lumen", "--width", "0"]);
        assert!(render_description(&args, &SceneDescription::builtin()).is_err());

        assert!(load_description(Some(Path::new("/nonexistent/scene.json"))).is_err());
    }

    #[test]
    fn test_missing_texture_is_an_error() {
        let mut description = SceneDescription::builtin();
        if let PrimitiveDescription::Plane { texture, .. } = &mut description.primitives[0] {
            *texture = Some("missing.png".to_string());
        }
        let args = Args::parse_from(["lumen", "--width", "8", "--height", "8"]);
        assert!(render_description(&args, &description).is_err());
    }
}
