//! Scene description types for Lumen.
//!
//! These mirror the JSON scene file one-to-one. Vectors are plain
//! `[x, y, z]` arrays so the file format does not depend on the math
//! crate's serialization. Validation happens when the renderer builds
//! geometry from a description, not here.

use serde::{Deserialize, Serialize};

/// A complete scene: camera, background, geometry and lights.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Render camera
    #[serde(default)]
    pub camera: CameraDescription,

    /// Color written to pixels whose primary ray hits nothing
    #[serde(default)]
    pub background: [f32; 3],

    /// Geometry, in file order (order breaks exact distance ties)
    #[serde(default)]
    pub primitives: Vec<PrimitiveDescription>,

    /// Point lights
    #[serde(default)]
    pub lights: Vec<LightDescription>,
}

/// Camera position plus the view plane it shoots rays through.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDescription {
    /// Eye position
    pub position: [f32; 3],

    /// Lower-left corner of the view plane (x, y)
    pub view_min: [f32; 2],

    /// Upper-right corner of the view plane (x, y)
    pub view_max: [f32; 2],

    /// Depth of the view plane along Z
    pub view_z: f32,
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 10.0],
            view_min: [-3.0, -2.0],
            view_max: [3.0, 2.0],
            view_z: 5.0,
        }
    }
}

/// A single piece of geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PrimitiveDescription {
    Sphere {
        center: [f32; 3],
        radius: f32,
        color: [f32; 3],
    },
    /// Bounded rectangle; `width` spans X and `height` spans Z.
    Plane {
        position: [f32; 3],
        #[serde(default = "default_plane_normal")]
        normal: [f32; 3],
        width: f32,
        height: f32,
        color: [f32; 3],
        /// Image file mapped onto the plane when it faces straight up
        #[serde(default, skip_serializing_if = "Option::is_none")]
        texture: Option<String>,
    },
}

impl PrimitiveDescription {
    /// Texture path referenced by this primitive, if any.
    pub fn texture_path(&self) -> Option<&str> {
        match self {
            PrimitiveDescription::Plane { texture, .. } => texture.as_deref(),
            PrimitiveDescription::Sphere { .. } => None,
        }
    }
}

fn default_plane_normal() -> [f32; 3] {
    [0.0, 1.0, 0.0]
}

/// A point light.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightDescription {
    pub position: [f32; 3],
    #[serde(default = "default_light_intensity")]
    pub intensity: f32,
}

fn default_light_intensity() -> f32 {
    100.0
}

impl SceneDescription {
    /// The stock scene: a ground plane, three spheres and one light.
    pub fn builtin() -> Self {
        Self {
            camera: CameraDescription::default(),
            background: [0.0, 0.0, 0.0],
            primitives: vec![
                PrimitiveDescription::Plane {
                    position: [0.0, -2.0, 0.0],
                    normal: default_plane_normal(),
                    width: 20.0,
                    height: 20.0,
                    color: [0.5, 0.5, 0.5],
                    texture: None,
                },
                PrimitiveDescription::Sphere {
                    center: [0.0, -0.5, 0.0],
                    radius: 1.5,
                    color: [1.0, 0.0, 0.0],
                },
                PrimitiveDescription::Sphere {
                    center: [-3.0, 0.0, -3.0],
                    radius: 2.0,
                    color: [0.0, 1.0, 0.0],
                },
                PrimitiveDescription::Sphere {
                    center: [3.0, -1.0, -1.0],
                    radius: 1.0,
                    color: [0.0, 0.0, 1.0],
                },
            ],
            lights: vec![LightDescription {
                position: [5.0, 10.0, 5.0],
                intensity: default_light_intensity(),
            }],
        }
    }

    /// Iterate over every texture path referenced by the scene.
    pub fn texture_paths(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| p.texture_path())
    }
}
