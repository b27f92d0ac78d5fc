use glam::{Quat, Vec3};

use crate::scene::{NodeId, SceneGraph};

/// Named local-space anchor on a node, used as a joint endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct Pin {
    pub node: NodeId,
    pub name: String,
    pub position: Vec3,
    pub orientation: Quat,
}

/// A constraint between two pins permitting one rotational degree of
/// freedom around the hinge axis encoded in the pins' shared orientation,
/// and zero relative translation.
#[derive(Clone, Debug, PartialEq)]
pub struct RevoluteJoint {
    pub pin0: Pin,
    pub pin1: Pin,
}

impl RevoluteJoint {
    pub fn new(pin0: Pin, pin1: Pin) -> Self {
        Self { pin0, pin1 }
    }
}

/// Canonical hinge orientation: rotate the primary collision axis (x)
/// onto the hinge axis (z). Both pins of a joint must share it so the
/// constraint's free axis agrees between the two reference frames.
pub fn hinge_orientation() -> Quat {
    Quat::from_rotation_arc(Vec3::X, Vec3::Z)
}

/// Pin a ball to an attachment at the attachment's center and build the
/// revolute joint between them.
///
/// The attachment's pin sits at its own local zero, because the hinge
/// point is the attachment's center. The ball's pin is placed at the
/// attachment's origin expressed in ball space, i.e. a full string length
/// away from the ball's own center, so the ball swings around that remote
/// point instead of spinning in place. Keep this relative-transform
/// direction as is.
pub fn build_hinge(graph: &mut SceneGraph, ball: NodeId, attachment: NodeId) -> RevoluteJoint {
    let orientation = hinge_orientation();

    let attachment_pin = graph.set_pin(attachment, "attachment_hinge", Vec3::ZERO, orientation);

    let relative_joint_location = graph.position_relative_to(attachment, ball);
    let ball_pin = graph.set_pin(ball, "ball_hinge", relative_joint_location, orientation);

    RevoluteJoint::new(attachment_pin, ball_pin)
}
