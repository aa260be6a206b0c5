//! Scene configuration: layout table, camera, and light defaults.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::layout::{temple_blocks, BlockSpec, RingGridSpec};
use super::node::{Material, ShadowParams};

/// Perspective camera defaults handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    pub position: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(-80.0, 220.0, 15.0),
            fov_degrees: 75.0,
            near: 0.1,
            far: 5000.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroundConfig {
    pub width: f32,
    pub depth: f32,
    pub material: Material,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            width: 200.0,
            depth: 300.0,
            material: Material::double_sided(0x999999),
        }
    }
}

/// The sloped ramp up to the altar.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RampConfig {
    pub position: Vec3,
    pub size: Vec3,
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(-38.0, 0.0, 38.0),
            size: Vec3::new(32.0, 18.0, 16.0),
        }
    }
}

/// Upright plane standing in for the hall gate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GateConfig {
    pub width: f32,
    pub height: f32,
    pub position: Vec3,
    pub material: Material,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            width: 20.0,
            height: 40.0,
            position: Vec3::new(0.0, 26.0, 0.1),
            material: Material::double_sided(0x999999),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RingsConfig {
    pub grid: RingGridSpec,
    pub color: u32,
}

impl Default for RingsConfig {
    fn default() -> Self {
        Self {
            grid: RingGridSpec::default(),
            color: 0x0000ff,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HemisphereConfig {
    pub sky_color: u32,
    pub ground_color: u32,
    pub intensity: f32,
}

impl Default for HemisphereConfig {
    fn default() -> Self {
        Self {
            sky_color: 0x87ceeb,
            ground_color: 0x999999,
            intensity: 0.9,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SunLightConfig {
    pub color: u32,
    pub intensity: f32,
    /// Position before the first recomputation lands.
    pub initial_position: Vec3,
    pub shadow: ShadowParams,
}

impl Default for SunLightConfig {
    fn default() -> Self {
        Self {
            color: 0xffffff,
            intensity: 2.5,
            initial_position: Vec3::new(50.0, 80.0, 30.0),
            shadow: ShadowParams::default(),
        }
    }
}

/// Configuration for the temple scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Background colour, 0xRRGGBB.
    pub sky_color: u32,
    pub camera: CameraConfig,
    pub ground: GroundConfig,
    /// Colour shared by every block.
    pub building_color: u32,
    pub blocks: Vec<BlockSpec>,
    pub ramp: RampConfig,
    pub gate: GateConfig,
    pub rings: RingsConfig,
    pub hemisphere: HemisphereConfig,
    pub sun: SunLightConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            sky_color: 0x87ceeb,
            camera: CameraConfig::default(),
            ground: GroundConfig::default(),
            building_color: 0xcccccc,
            blocks: temple_blocks(),
            ramp: RampConfig::default(),
            gate: GateConfig::default(),
            rings: RingsConfig::default(),
            hemisphere: HemisphereConfig::default(),
            sun: SunLightConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene_config() {
        let config = SceneConfig::default();
        assert_eq!(config.blocks.len(), 26);
        assert_eq!(config.sky_color, 0x87ceeb);
        assert_eq!(config.camera.position, Vec3::new(-80.0, 220.0, 15.0));
        assert_eq!(config.sun.shadow.map_size, 2048);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "building_color": 16711680, "blocks": [] }"#;
        let config: SceneConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.building_color, 0xff0000);
        assert!(config.blocks.is_empty());
        assert_eq!(config.ramp, RampConfig::default());
        assert_eq!(config.hemisphere.intensity, 0.9);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = SceneConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SceneConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
