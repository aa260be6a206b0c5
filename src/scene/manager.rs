//! Temple scene: builds the scene graph from configuration and owns the sun light.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::config::{CameraConfig, SceneConfig};
use super::flatten::FlatScene;
use super::graph::SceneGraph;
use super::layout::{ramp_vertices, ring_grid_points};
use super::node::{
    DirectionalLight, Light, LocalTransform, Material, NodeContent, SceneNodeId, Shape,
};
use crate::sun::{LightSink, LightState};

/// Summary of the built scene.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneInfo {
    pub node_count: usize,
    pub mesh_count: usize,
    pub light_count: usize,
    pub shadow_casters: usize,
    pub sky_color: u32,
    pub camera: CameraConfig,
}

/// The temple scene graph plus handles to its live nodes.
pub struct TempleScene {
    config: SceneConfig,
    scene_graph: SceneGraph,
    sun_node: SceneNodeId,
}

impl TempleScene {
    /// Build every node described by `config`.
    pub fn new(config: SceneConfig) -> Self {
        let mut scene_graph = SceneGraph::new();
        let root = scene_graph.root();

        // Ground, laid flat
        let ground = scene_graph.add_child(
            root,
            "ground",
            NodeContent::Mesh {
                shape: Shape::Plane {
                    width: config.ground.width,
                    height: config.ground.depth,
                },
                material: config.ground.material,
            },
        );
        scene_graph.set_transform(
            ground,
            LocalTransform {
                rotation: Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2),
                ..Default::default()
            },
        );
        scene_graph.set_shadows(ground, false, true);

        // Buildings
        let buildings = scene_graph.add_child(root, "buildings", NodeContent::Group);
        let building_material = Material::solid(config.building_color);
        for (i, block) in config.blocks.iter().enumerate() {
            let id = scene_graph.add_child(
                buildings,
                format!("block_{i}"),
                NodeContent::Mesh {
                    shape: Shape::Block { size: block.size() },
                    material: building_material,
                },
            );
            scene_graph.set_transform(id, LocalTransform::from_position(block.center()));
            scene_graph.set_shadows(id, true, true);
        }

        let ramp = scene_graph.add_child(
            buildings,
            "ramp",
            NodeContent::Mesh {
                shape: Shape::Wedge {
                    vertices: ramp_vertices(config.ramp.size),
                },
                material: building_material,
            },
        );
        scene_graph.set_transform(ramp, LocalTransform::from_position(config.ramp.position));
        scene_graph.set_shadows(ramp, true, true);

        let gate = scene_graph.add_child(
            root,
            "gate",
            NodeContent::Mesh {
                shape: Shape::Plane {
                    width: config.gate.width,
                    height: config.gate.height,
                },
                material: config.gate.material,
            },
        );
        scene_graph.set_transform(gate, LocalTransform::from_position(config.gate.position));

        // Ring points are already in world space
        scene_graph.add_child(
            root,
            "rings",
            NodeContent::Mesh {
                shape: Shape::Polyline {
                    points: ring_grid_points(&config.rings.grid),
                },
                material: Material::solid(config.rings.color),
            },
        );

        // Lights
        scene_graph.add_child(
            root,
            "ambient",
            NodeContent::Light(Light::Hemisphere {
                sky_color: config.hemisphere.sky_color,
                ground_color: config.hemisphere.ground_color,
                intensity: config.hemisphere.intensity,
            }),
        );

        let sun_node = scene_graph.add_child(
            root,
            "sun",
            NodeContent::Light(Light::Directional(DirectionalLight {
                color: config.sun.color,
                intensity: config.sun.intensity,
                target: Vec3::ZERO,
                cast_shadow: true,
                shadow: config.sun.shadow,
            })),
        );
        scene_graph.set_transform(
            sun_node,
            LocalTransform::from_position(config.sun.initial_position),
        );

        log::info!(
            "Temple scene built: {} nodes, {} blocks",
            scene_graph.node_count(),
            config.blocks.len()
        );

        Self {
            config,
            scene_graph,
            sun_node,
        }
    }

    /// Flatten the scene graph into draw and light lists.
    pub fn flatten(&mut self) -> FlatScene {
        self.scene_graph.flatten()
    }

    pub fn info(&mut self) -> SceneInfo {
        let node_count = self.scene_graph.node_count();
        let flat = self.flatten();
        SceneInfo {
            node_count,
            mesh_count: flat.draws.len(),
            light_count: flat.lights.len(),
            shadow_casters: flat.shadow_caster_count(),
            sky_color: self.config.sky_color,
            camera: self.config.camera,
        }
    }

    /// The sun's directional light.
    pub fn sun_light(&self) -> Option<&DirectionalLight> {
        self.scene_graph
            .get(self.sun_node)
            .and_then(|n| n.directional_light())
    }

    /// Local position of the sun node.
    pub fn sun_position(&self) -> Option<Vec3> {
        self.scene_graph
            .get(self.sun_node)
            .map(|n| n.local_transform.position)
    }

}

impl Default for TempleScene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl LightSink for TempleScene {
    fn apply_light(&mut self, light: &LightState, on_intensity: f32) {
        let Some(node) = self.scene_graph.get_mut(self.sun_node) else {
            log::warn!("Sun node missing, light update dropped");
            return;
        };
        node.local_transform.position = light.position.as_vec3();
        if let Some(sun) = node.directional_light_mut() {
            sun.intensity = light.intensity(on_intensity);
            sun.target = LightState::TARGET.as_vec3();
        }
    }
}
