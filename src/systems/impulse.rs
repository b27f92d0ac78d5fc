use glam::Vec3;

use crate::domain::error::SceneError;
use crate::scene::{NodeId, SceneGraph};
use crate::systems::body::BodyMode;

/// One-shot momentum change on a dynamic body, consumed by the host's
/// solver at its next step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpulseAction {
    pub target: NodeId,
    pub linear_impulse: Vec3,
}

/// Validate and create an impulse action for `target`.
///
/// The target must carry a dynamic body and a collision shape; impulses
/// on static or kinematic bodies have no physical meaning here.
pub fn make_impulse_action(
    graph: &SceneGraph,
    target: NodeId,
    linear_impulse: Vec3,
) -> Result<ImpulseAction, SceneError> {
    let node = graph.node(target);
    let dynamic = matches!(node.body.as_ref().map(|b| b.mode), Some(BodyMode::Dynamic));
    if !dynamic || node.collision.is_none() {
        return Err(SceneError::InvalidBodyForImpulse);
    }
    Ok(ImpulseAction {
        target,
        linear_impulse,
    })
}
