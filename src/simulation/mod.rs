//! Scene core - pendulum constraint-scene assembly and host-facing state
//!
//! Refactored for SOLID principles:
//! - Single Responsibility: the core only orchestrates; assembly lives in
//!   assemble/, solver-root state in root/, components in systems/
//! - Open/Closed: new scene layouts can be added without modifying this file
//!
//! The core produces a fully registered constraint graph and initial
//! transforms. The fixed-timestep solver consuming them belongs to the
//! surrounding host, not to this crate.

use glam::Vec3;

use crate::domain::error::SceneError;
use crate::domain::settings::PendulumSettings;
use crate::scene::{NodeId, SceneGraph};
use crate::systems::impulse::{self, ImpulseAction};

#[path = "assemble/assemble.rs"]
mod assemble;
#[path = "root/root.rs"]
pub mod root;
mod facade;

pub use facade::World;

/// Node handles for one assembled pendulum.
#[derive(Clone, Copy, Debug)]
pub struct PendulumHandles {
    pub pendulum: NodeId,
    pub ball: NodeId,
    pub string: NodeId,
    pub attachment: NodeId,
}

/// The assembled scene plus the run's settings and the impulse queue.
///
/// Everything here is written during the synchronous assembly pass and
/// read-only for the host afterwards, except the impulse queue, which the
/// host input layer appends to and the host solver drains.
pub struct SceneCore {
    pub(crate) graph: SceneGraph,
    pub(crate) settings: PendulumSettings,
    pub(crate) root: Option<NodeId>,
    pub(crate) group: Option<NodeId>,
    pub(crate) pendulums: Vec<PendulumHandles>,
    pub(crate) pending_actions: Vec<ImpulseAction>,
}

impl SceneCore {
    pub fn new() -> Self {
        Self {
            graph: SceneGraph::new(),
            settings: PendulumSettings::default(),
            root: None,
            group: None,
            pendulums: Vec::new(),
            pending_actions: Vec::new(),
        }
    }

    /// Build (or rebuild) the scene from `settings`. On error the
    /// previously built scene, if any, is left untouched.
    pub fn build_scene(&mut self, settings: PendulumSettings) -> Result<NodeId, SceneError> {
        assemble::build_scene(self, settings)
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn settings(&self) -> &PendulumSettings {
        &self.settings
    }

    /// The simulation root, once a scene has been built.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The shared pendulum group under the simulation root.
    pub fn group(&self) -> Option<NodeId> {
        self.group
    }

    pub fn pendulum_count(&self) -> usize {
        self.pendulums.len()
    }

    pub fn pendulum(&self, index: usize) -> Option<&PendulumHandles> {
        self.pendulums.get(index)
    }

    /// Joints registered on the simulation root.
    pub fn joint_count(&self) -> usize {
        self.root
            .and_then(|root| self.graph.node(root).simulation.as_ref())
            .map_or(0, |state| state.joints.len())
    }

    pub fn ball_world_position(&self, index: usize) -> Option<Vec3> {
        self.pendulums
            .get(index)
            .map(|p| self.graph.world_position(p.ball))
    }

    /// Queue the settings-derived impulse on the indexed pendulum's ball.
    pub fn apply_impulse(&mut self, index: usize) -> Result<(), SceneError> {
        let ball = self
            .pendulums
            .get(index)
            .ok_or(SceneError::UnknownPendulum(index))?
            .ball;
        let power = self.settings.impulse_power();
        self.apply_impulse_to(ball, power)
    }

    /// Queue an arbitrary impulse on a node. Fails loudly when the node
    /// is not a dynamic body with collision; the queue is left unchanged.
    pub fn apply_impulse_to(
        &mut self,
        node: NodeId,
        linear_impulse: Vec3,
    ) -> Result<(), SceneError> {
        let action = impulse::make_impulse_action(&self.graph, node, linear_impulse)?;
        self.pending_actions.push(action);
        Ok(())
    }

    /// Impulses queued since the last drain, in arrival order.
    pub fn pending_impulses(&self) -> &[ImpulseAction] {
        &self.pending_actions
    }

    /// Hand the queued impulses to the host solver and clear the queue.
    pub fn drain_pending_impulses(&mut self) -> Vec<ImpulseAction> {
        std::mem::take(&mut self.pending_actions)
    }
}

impl Default for SceneCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
