//! Scene graph node types
//!
//! Core types for the CPU-side scene graph: node IDs, transforms, content variants, and nodes.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Unique identifier for a scene graph node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SceneNodeId(pub u64);

/// Local transform relative to the parent node.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

impl LocalTransform {
    /// Identity transform (no translation, rotation, or scaling).
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a translation-only transform.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Convert to a 4x4 matrix.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.rotation,
            self.position,
        )
    }
}

/// Surface appearance of a mesh.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// 0xRRGGBB
    pub color: u32,
    pub double_sided: bool,
}

impl Material {
    pub const fn solid(color: u32) -> Self {
        Self {
            color,
            double_sided: false,
        }
    }

    pub const fn double_sided(color: u32) -> Self {
        Self {
            color,
            double_sided: true,
        }
    }
}

/// Geometry of a mesh, in the node's local space.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Rectangle in the local XY plane, centred on the origin.
    Plane { width: f32, height: f32 },
    /// Box centred on the origin.
    Block { size: Vec3 },
    /// Box whose eight corners were moved; see [`super::layout::ramp_vertices`].
    Wedge { vertices: [Vec3; 8] },
    /// Open line strip.
    Polyline { points: Vec<Vec3> },
}

/// Shadow map parameters of a directional light.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShadowParams {
    /// Shadow map resolution (square).
    pub map_size: u32,
    pub near: f32,
    pub far: f32,
    /// Half-extent of the orthographic shadow camera.
    pub extent: f32,
}

impl Default for ShadowParams {
    fn default() -> Self {
        Self {
            map_size: 2048,
            near: 0.5,
            far: 500.0,
            extent: 300.0,
        }
    }
}

/// Directional light aimed from the node position at `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: u32,
    pub intensity: f32,
    /// World-space look-at point.
    pub target: Vec3,
    pub cast_shadow: bool,
    pub shadow: ShadowParams,
}

/// Kinds of light the scene carries.
#[derive(Clone, Debug, PartialEq)]
pub enum Light {
    /// Sky/ground gradient ambient light.
    Hemisphere {
        sky_color: u32,
        ground_color: u32,
        intensity: f32,
    },
    Directional(DirectionalLight),
}

/// What a scene node contains.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeContent {
    /// A grouping node with no geometry of its own.
    Group,

    /// Renderable geometry.
    Mesh {
        shape: Shape,
        material: Material,
    },

    /// A light source.
    Light(Light),
}

/// A single node in the scene graph.
#[derive(Clone, Debug)]
pub struct SceneNode {
    pub id: SceneNodeId,
    pub name: String,
    pub parent: Option<SceneNodeId>,
    pub children: Vec<SceneNodeId>,
    pub local_transform: LocalTransform,
    /// Cached world transform (recomputed during propagation).
    pub world_transform: Mat4,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub content: NodeContent,
}

impl SceneNode {
    /// Create a new scene node.
    pub fn new(id: SceneNodeId, name: impl Into<String>, content: NodeContent) -> Self {
        Self {
            id,
            name: name.into(),
            parent: None,
            children: Vec::new(),
            local_transform: LocalTransform::identity(),
            world_transform: Mat4::IDENTITY,
            cast_shadow: false,
            receive_shadow: false,
            content,
        }
    }

    /// The directional light this node holds, if any.
    pub fn directional_light(&self) -> Option<&DirectionalLight> {
        match &self.content {
            NodeContent::Light(Light::Directional(light)) => Some(light),
            _ => None,
        }
    }

    pub fn directional_light_mut(&mut self) -> Option<&mut DirectionalLight> {
        match &mut self.content {
            NodeContent::Light(Light::Directional(light)) => Some(light),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_node_id_equality() {
        let a = SceneNodeId(1);
        let b = SceneNodeId(1);
        let c = SceneNodeId(2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_local_transform_identity() {
        let t = LocalTransform::identity();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.to_mat4(), Mat4::IDENTITY);
    }

    #[test]
    fn test_local_transform_from_position() {
        let pos = Vec3::new(10.0, 5.0, -3.0);
        let t = LocalTransform::from_position(pos);
        assert_eq!(t.position, pos);
        let m = t.to_mat4();
        let (_, _, translation) = m.to_scale_rotation_translation();
        assert!((translation - pos).length() < 1e-5);
    }

    #[test]
    fn test_scene_node_new() {
        let node = SceneNode::new(SceneNodeId(0), "root", NodeContent::Group);
        assert_eq!(node.id, SceneNodeId(0));
        assert_eq!(node.name, "root");
        assert!(node.parent.is_none());
        assert!(node.children.is_empty());
        assert!(!node.cast_shadow);
        assert!(node.directional_light().is_none());
    }

    #[test]
    fn test_directional_light_accessors() {
        let mut node = SceneNode::new(
            SceneNodeId(3),
            "sun",
            NodeContent::Light(Light::Directional(DirectionalLight {
                color: 0xffffff,
                intensity: 2.5,
                target: Vec3::ZERO,
                cast_shadow: true,
                shadow: ShadowParams::default(),
            })),
        );
        assert_eq!(node.directional_light().unwrap().intensity, 2.5);
        node.directional_light_mut().unwrap().intensity = 0.0;
        assert_eq!(node.directional_light().unwrap().intensity, 0.0);
    }

    #[test]
    fn test_material_constructors() {
        assert!(!Material::solid(0xcccccc).double_sided);
        assert!(Material::double_sided(0x999999).double_sided);
    }
}
