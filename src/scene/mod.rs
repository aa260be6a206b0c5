//! Temple scene: static layout, scene graph, and the live sun light.

pub mod config;
pub mod flatten;
pub mod graph;
pub mod layout;
pub mod manager;
pub mod node;

pub use config::{CameraConfig, SceneConfig};
pub use flatten::{FlatDrawEntry, FlatLightEntry, FlatScene};
pub use graph::SceneGraph;
pub use layout::{ramp_vertices, ring_grid_points, temple_blocks, BlockSpec, RingGridSpec};
pub use manager::{SceneInfo, TempleScene};
pub use node::{
    DirectionalLight, Light, LocalTransform, Material, NodeContent, SceneNode, SceneNodeId,
    ShadowParams, Shape,
};
