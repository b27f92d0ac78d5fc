use glam::Vec3;

use crate::domain::error::SceneError;
use crate::scene::{NodeId, SceneGraph};
use crate::systems::pins::RevoluteJoint;

/// Lower bound of the supported simulation-speed band.
pub const MIN_SIMULATION_SPEED: f32 = 0.5;
/// Upper bound of the supported simulation-speed band. Values outside
/// the band destabilize the constraint solver or visibly distort geometry.
pub const MAX_SIMULATION_SPEED: f32 = 1.5;

/// Solver iteration counts used when a node is promoted to simulation
/// root without explicit configuration.
pub const DEFAULT_SOLVER_ITERATIONS: u32 = 25;

/// Global solver configuration plus the set of joints registered under
/// this node. The joint set only grows during assembly and is read-only
/// for the host's solver afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationRootState {
    pub position_iterations: u32,
    pub velocity_iterations: u32,
    pub joints: Vec<RevoluteJoint>,
}

impl Default for SimulationRootState {
    fn default() -> Self {
        Self {
            position_iterations: DEFAULT_SOLVER_ITERATIONS,
            velocity_iterations: DEFAULT_SOLVER_ITERATIONS,
            joints: Vec::new(),
        }
    }
}

/// Set solver iteration counts on a node, creating empty simulation-root
/// state if the node has none. Higher counts buy constraint accuracy at
/// proportional cost.
pub fn configure_solver(
    graph: &mut SceneGraph,
    node: NodeId,
    position_iterations: u32,
    velocity_iterations: u32,
) -> Result<(), SceneError> {
    if position_iterations == 0 || velocity_iterations == 0 {
        return Err(SceneError::InvalidSolverIterations);
    }
    let state = graph
        .node_mut(node)
        .simulation
        .get_or_insert_with(SimulationRootState::default);
    state.position_iterations = position_iterations;
    state.velocity_iterations = velocity_iterations;
    Ok(())
}

/// Apply the paired speed scales: `factor` on the simulation root and
/// `1/factor` on its child subtree. The two cancel along the transform
/// chain, leaving rendered geometry unchanged while the solver integrates
/// in the root's scaled space. Both scales are set together or not at all.
pub fn set_simulation_scale(
    graph: &mut SceneGraph,
    root: NodeId,
    group: NodeId,
    factor: f32,
) -> Result<(), SceneError> {
    if !(MIN_SIMULATION_SPEED..=MAX_SIMULATION_SPEED).contains(&factor) {
        return Err(SceneError::InvalidSpeedFactor(factor));
    }
    graph.set_scale(root, Vec3::splat(factor));
    graph.set_scale(group, Vec3::splat(1.0 / factor));
    Ok(())
}

/// Register a joint with the simulation.
///
/// Searches from pin0's node upward for the nearest node carrying
/// simulation-root state. If the whole chain has none, pin0's node itself
/// is promoted with an empty state before the joint is added. Pins living
/// in two disconnected hierarchies can never share a root and are a fatal
/// configuration error.
///
/// Returns the node the joint was registered under.
pub fn add_to_simulation(
    graph: &mut SceneGraph,
    joint: RevoluteJoint,
) -> Result<NodeId, SceneError> {
    if graph.root_of(joint.pin0.node) != graph.root_of(joint.pin1.node) {
        return Err(SceneError::UnregistrableJoint);
    }

    let registrar = graph
        .nearest_simulation_state(joint.pin0.node)
        .unwrap_or(joint.pin0.node);

    graph
        .node_mut(registrar)
        .simulation
        .get_or_insert_with(SimulationRootState::default)
        .joints
        .push(joint);

    Ok(registrar)
}
