use glam::Vec3;

use crate::domain::error::SceneError;
use crate::domain::settings::PendulumSettings;
use crate::scene::{NodeId, SceneGraph};
use crate::systems::body::{self, BodyDescriptor, BodyMode, PhysicsMaterial, Shape};
use crate::systems::pins;

use super::root;
use super::{PendulumHandles, SceneCore};

/// Solver iterations for the pendulum scene. Revolute chains need more
/// refinement passes than loose contact piles.
const SOLVER_ITERATIONS: u32 = 25;

/// Build the whole pendulum scene and commit it to the core.
///
/// Assembly happens in a scratch graph; the core is only touched once
/// everything registered cleanly, so a failed build leaves no partial
/// scene behind.
pub(super) fn build_scene(
    core: &mut SceneCore,
    settings: PendulumSettings,
) -> Result<NodeId, SceneError> {
    settings.validate()?;
    if !(root::MIN_SIMULATION_SPEED..=root::MAX_SIMULATION_SPEED).contains(&settings.pendulum_speed)
    {
        return Err(SceneError::InvalidSpeedFactor(settings.pendulum_speed));
    }

    let mut graph = SceneGraph::new();
    let mut pendulums = Vec::with_capacity(settings.pendulum_count as usize);

    let simulation_root = graph.create_node();
    let pendulum_group = graph.create_node();
    graph.add_child(simulation_root, pendulum_group)?;

    // The root owns the global solver state; every joint below lands here.
    root::configure_solver(
        &mut graph,
        simulation_root,
        SOLVER_ITERATIONS,
        SOLVER_ITERATIONS,
    )?;

    let first_pendulum_x = -((settings.pendulum_count - 1) as f32) / 2.0;
    for pendulum in 0..settings.pendulum_count {
        let handles = create_pendulum(&mut graph, pendulum_group, &settings)?;

        // Side by side along x, centered at zero.
        let offset_x = (first_pendulum_x + pendulum as f32)
            * settings.attachment_size[0]
            * settings.ball_radius;
        graph.node_mut(handles.pendulum).translation.x = offset_x;

        pendulums.push(handles);
    }

    // Hang the assembly so the resting balls sit near the visual origin.
    graph.node_mut(simulation_root).translation.y = settings.string_length / 2.0;

    // Simulation speed dial: forward scale on the root, inverse on the
    // group, applied as a pair.
    root::set_simulation_scale(
        &mut graph,
        simulation_root,
        pendulum_group,
        settings.pendulum_speed,
    )?;

    core.graph = graph;
    core.root = Some(simulation_root);
    core.group = Some(pendulum_group);
    core.pendulums = pendulums;
    core.settings = settings;
    core.pending_actions.clear();

    Ok(simulation_root)
}

/// Create one pendulum (ball + visual string + attachment), attach its
/// physics, parent it into `group`, and hinge ball to attachment.
///
/// The pendulum must hang in the hierarchy before the joint is built:
/// registration walks the ancestor chain and has to reach the simulation
/// root.
pub(super) fn create_pendulum(
    graph: &mut SceneGraph,
    group: NodeId,
    settings: &PendulumSettings,
) -> Result<PendulumHandles, SceneError> {
    let pendulum = graph.create_node();

    let ball = graph.create_node();
    graph.add_child(pendulum, ball)?;
    graph.node_mut(ball).translation = Vec3::new(0.0, -settings.string_length, 0.0);

    // The string is cosmetic: a bare node the host may render, excluded
    // from physics. It spans from the ball back up to the attachment.
    let string = graph.create_node();
    graph.add_child(ball, string)?;
    graph.node_mut(string).translation = Vec3::new(0.0, settings.string_length / 2.0, 0.0);

    let attachment = graph.create_node();
    graph.add_child(pendulum, attachment)?;

    attach_ball_physics(graph, ball, settings);
    attach_attachment_physics(graph, attachment, settings);

    graph.add_child(group, pendulum)?;

    let joint = pins::build_hinge(graph, ball, attachment);
    root::add_to_simulation(graph, joint)?;

    Ok(PendulumHandles {
        pendulum,
        ball,
        string,
        attachment,
    })
}

/// Dynamic ball: frictionless, fully elastic, zero damping so the swing
/// persists distinguishably across many periods.
fn attach_ball_physics(graph: &mut SceneGraph, ball: NodeId, settings: &PendulumSettings) {
    let collision_shape = Shape::Sphere {
        radius: settings.ball_radius,
    };

    body::attach_body(
        graph,
        ball,
        BodyDescriptor {
            shape: collision_shape,
            mass: settings.ball_mass,
            material: PhysicsMaterial::generate(0.0, 0.0, 1.0),
            mode: BodyMode::Dynamic,
            linear_damping: 0.0,
        },
    );
    body::attach_collision(graph, ball, collision_shape);
}

/// Static ceiling box. Mass is recorded but ignored by the solver.
fn attach_attachment_physics(
    graph: &mut SceneGraph,
    attachment: NodeId,
    settings: &PendulumSettings,
) {
    let attachment_shape = Shape::Box {
        size: settings.attachment_extents(),
    };

    body::attach_body(
        graph,
        attachment,
        BodyDescriptor {
            shape: attachment_shape,
            mass: 1.0,
            material: PhysicsMaterial::generate(0.0, 0.0, 1.0),
            mode: BodyMode::Static,
            linear_damping: 0.0,
        },
    );
    body::attach_collision(graph, attachment, attachment_shape);
}
