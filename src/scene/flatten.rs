//! Flattened scene graph output for the renderer.
//!
//! `FlatScene` is the result of walking the scene graph: one entry per
//! mesh or light, with world transforms already resolved.

use glam::{Mat4, Vec3};

use super::node::{Light, Material, SceneNodeId, Shape};

/// One mesh.
#[derive(Clone, Debug)]
pub struct FlatDrawEntry {
    /// Node this entry came from.
    pub node: SceneNodeId,
    pub shape: Shape,
    pub material: Material,
    /// Local-to-world transform.
    pub world: Mat4,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

/// One light.
#[derive(Clone, Debug)]
pub struct FlatLightEntry {
    pub node: SceneNodeId,
    pub light: Light,
    /// World-space position of the light node.
    pub world_position: Vec3,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, Default)]
pub struct FlatScene {
    pub draws: Vec<FlatDrawEntry>,
    pub lights: Vec<FlatLightEntry>,
}

impl FlatScene {
    /// Number of meshes that cast shadows.
    pub fn shadow_caster_count(&self) -> usize {
        self.draws.iter().filter(|d| d.cast_shadow).count()
    }
}
