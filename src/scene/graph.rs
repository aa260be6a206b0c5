//! Scene graph: CPU-side hierarchy of nodes.
//!
//! The scene graph organizes meshes and lights with parent/child relationships.
//! Each frame, `flatten()` walks the tree and produces flat draw and light
//! lists that a renderer can consume directly.

use std::collections::HashMap;

use glam::Mat4;

use super::flatten::{FlatDrawEntry, FlatLightEntry, FlatScene};
use super::node::{LocalTransform, NodeContent, SceneNode, SceneNodeId};

/// CPU-side scene graph.
pub struct SceneGraph {
    nodes: HashMap<SceneNodeId, SceneNode>,
    root: SceneNodeId,
    next_id: u64,
}

impl SceneGraph {
    /// Create a new scene graph with a root Group node.
    pub fn new() -> Self {
        let root_id = SceneNodeId(0);
        let root_node = SceneNode::new(root_id, "root", NodeContent::Group);

        let mut nodes = HashMap::new();
        nodes.insert(root_id, root_node);

        Self {
            nodes,
            root: root_id,
            next_id: 1,
        }
    }

    /// Get the root node ID.
    pub fn root(&self) -> SceneNodeId {
        self.root
    }

    /// Allocate a fresh node ID.
    fn alloc_id(&mut self) -> SceneNodeId {
        let id = SceneNodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a child node under `parent`. Returns the new node's ID.
    pub fn add_child(
        &mut self,
        parent: SceneNodeId,
        name: impl Into<String>,
        content: NodeContent,
    ) -> SceneNodeId {
        let id = self.alloc_id();
        let mut node = SceneNode::new(id, name, content);
        node.parent = Some(parent);

        self.nodes.insert(id, node);

        // Register as child of parent
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.push(id);
        }

        id
    }

    /// Set the local transform of a node.
    pub fn set_transform(&mut self, id: SceneNodeId, transform: LocalTransform) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.local_transform = transform;
        }
    }

    /// Set whether a node casts and receives shadows.
    pub fn set_shadows(&mut self, id: SceneNodeId, cast: bool, receive: bool) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.cast_shadow = cast;
            node.receive_shadow = receive;
        }
    }

    /// Get an immutable reference to a node.
    pub fn get(&self, id: SceneNodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    /// Get a mutable reference to a node.
    pub fn get_mut(&mut self, id: SceneNodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(&id)
    }

    /// Total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Walk the tree, propagate transforms, and collect all meshes and lights.
    pub fn flatten(&mut self) -> FlatScene {
        self.propagate_transforms(self.root, Mat4::IDENTITY);

        let mut out = FlatScene::default();
        self.collect(self.root, &mut out);
        out
    }

    /// Recursively propagate world transforms.
    fn propagate_transforms(&mut self, node_id: SceneNodeId, parent_world: Mat4) {
        let (local_mat, children) = {
            let node = match self.nodes.get(&node_id) {
                Some(n) => n,
                None => return,
            };
            (node.local_transform.to_mat4(), node.children.clone())
        };

        let world = parent_world * local_mat;

        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.world_transform = world;
        }

        for child_id in children {
            self.propagate_transforms(child_id, world);
        }
    }

    /// Recursively collect draw and light entries in depth-first order.
    fn collect(&self, node_id: SceneNodeId, out: &mut FlatScene) {
        let node = match self.nodes.get(&node_id) {
            Some(n) => n,
            None => return,
        };

        match &node.content {
            NodeContent::Group => {}
            NodeContent::Mesh { shape, material } => {
                out.draws.push(FlatDrawEntry {
                    node: node.id,
                    shape: shape.clone(),
                    material: *material,
                    world: node.world_transform,
                    cast_shadow: node.cast_shadow,
                    receive_shadow: node.receive_shadow,
                });
            }
            NodeContent::Light(light) => {
                out.lights.push(FlatLightEntry {
                    node: node.id,
                    light: light.clone(),
                    world_position: node.world_transform.transform_point3(glam::Vec3::ZERO),
                });
            }
        }

        for &child_id in &node.children {
            self.collect(child_id, out);
        }
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}
