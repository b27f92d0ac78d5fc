use glam::{Affine3A, Quat, Vec3};

use crate::domain::error::SceneError;
use crate::systems::pins::Pin;

use super::node::{Node, NodeId};

/// Arena-backed transform hierarchy.
///
/// All structural mutation goes through `add_child`, which rejects cycles,
/// so every world-transform walk below terminates.
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn create_node(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::default());
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Parent `child` under `parent`. A child that already has a parent is
    /// detached from it first. Fails with `SceneError::Cycle` if `child`
    /// is `parent` or one of its ancestors.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        if parent == child || self.is_ancestor(child, parent) {
            return Err(SceneError::Cycle);
        }
        if let Some(old) = self.nodes[child.index()].parent {
            self.nodes[old.index()].children.retain(|&c| c != child);
        }
        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
        Ok(())
    }

    /// True if `ancestor` appears on `node`'s parent chain (excluding
    /// `node` itself).
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.nodes[node.index()].parent;
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes[id.index()].parent;
        }
        false
    }

    /// Topmost ancestor of `node` (the node itself when unparented).
    pub fn root_of(&self, node: NodeId) -> NodeId {
        let mut current = node;
        while let Some(parent) = self.nodes[current.index()].parent {
            current = parent;
        }
        current
    }

    pub fn set_translation(&mut self, node: NodeId, translation: Vec3) {
        self.nodes[node.index()].translation = translation;
    }

    pub fn set_rotation(&mut self, node: NodeId, rotation: Quat) {
        self.nodes[node.index()].rotation = rotation;
    }

    pub fn set_scale(&mut self, node: NodeId, scale: Vec3) {
        self.nodes[node.index()].scale = scale;
    }

    pub fn local_transform(&self, node: NodeId) -> Affine3A {
        let n = &self.nodes[node.index()];
        Affine3A::from_scale_rotation_translation(n.scale, n.rotation, n.translation)
    }

    /// World transform: the composition of the ancestor chain with the
    /// node's own local transform.
    pub fn world_transform(&self, node: NodeId) -> Affine3A {
        let local = self.local_transform(node);
        match self.nodes[node.index()].parent {
            Some(parent) => self.world_transform(parent) * local,
            None => local,
        }
    }

    pub fn world_position(&self, node: NodeId) -> Vec3 {
        Vec3::from(self.world_transform(node).translation)
    }

    /// `node`'s origin expressed in `reference`'s local space. This is
    /// what places a joint pin on one body at another body's location.
    pub fn position_relative_to(&self, node: NodeId, reference: NodeId) -> Vec3 {
        let origin = self.world_position(node);
        self.world_transform(reference)
            .inverse()
            .transform_point3(origin)
    }

    /// Set (or overwrite) the named pin on a node and return a copy of it.
    pub fn set_pin(
        &mut self,
        node: NodeId,
        name: &str,
        position: Vec3,
        orientation: Quat,
    ) -> Pin {
        let pin = Pin {
            node,
            name: name.to_string(),
            position,
            orientation,
        };
        self.nodes[node.index()]
            .pins
            .insert(name.to_string(), pin.clone());
        pin
    }

    /// Nearest node carrying simulation-root state, starting the search at
    /// `node` itself and walking up the parent chain.
    pub fn nearest_simulation_state(&self, node: NodeId) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(id) = current {
            if self.nodes[id.index()].simulation.is_some() {
                return Some(id);
            }
            current = self.nodes[id.index()].parent;
        }
        None
    }

    /// Ids of every node holding simulation-root state.
    pub fn simulation_roots(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.simulation.is_some())
            .map(|(i, _)| NodeId(i as u32))
            .collect()
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}
