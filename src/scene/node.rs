use std::collections::HashMap;

use glam::{Quat, Vec3};

use crate::simulation::root::SimulationRootState;
use crate::systems::body::{BodyDescriptor, Shape};
use crate::systems::pins::Pin;

/// Handle into the scene arena. Only `SceneGraph::create_node` mints these,
/// and nodes are never removed, so a handle stays valid for the scene's life.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

/// A single record in the scene arena.
///
/// Parent/children are stored as ids, never owning references; the arena
/// is the sole owner, so reference cycles cannot form. Besides the local
/// transform, a node carries exactly the four component slots the engine
/// needs: a physics body, a collision shape, simulation-root state, and
/// named pins.
pub struct Node {
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,

    // Local transform
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,

    // Component slots
    pub body: Option<BodyDescriptor>,
    pub collision: Option<Shape>,
    pub simulation: Option<SimulationRootState>,
    pub pins: HashMap<String, Pin>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            body: None,
            collision: None,
            simulation: None,
            pins: HashMap::new(),
        }
    }
}
