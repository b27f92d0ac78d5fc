use glam::Vec3;

use crate::scene::{NodeId, SceneGraph};

/// Geometric primitive, used identically for collision and visualization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
    Box { size: Vec3 },
}

/// Surface response of a body. Frictions conceptually live in [0, 1];
/// restitution may exceed 1 for over-elastic contacts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsMaterial {
    pub static_friction: f32,
    pub dynamic_friction: f32,
    pub restitution: f32,
}

impl PhysicsMaterial {
    pub fn generate(static_friction: f32, dynamic_friction: f32, restitution: f32) -> Self {
        Self {
            static_friction,
            dynamic_friction,
            restitution,
        }
    }
}

/// How the solver treats a body: immovable, externally driven, or simulated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyMode {
    Static,
    Kinematic,
    Dynamic,
}

/// Physics-body description attached to a node.
///
/// Mass is recorded even for static bodies, which ignore it during
/// simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyDescriptor {
    pub shape: Shape,
    pub mass: f32,
    pub material: PhysicsMaterial,
    pub mode: BodyMode,
    pub linear_damping: f32,
}

/// Attach a body descriptor to a node, replacing any existing one.
pub fn attach_body(graph: &mut SceneGraph, node: NodeId, body: BodyDescriptor) {
    graph.node_mut(node).body = Some(body);
}

/// Attach a collision shape to a node, independent of its body slot.
pub fn attach_collision(graph: &mut SceneGraph, node: NodeId, shape: Shape) {
    graph.node_mut(node).collision = Some(shape);
}
