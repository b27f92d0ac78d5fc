use thiserror::Error;

/// Errors surfaced by scene assembly and impulse scheduling.
///
/// Assembly-time errors abort the whole `build_scene` call; a half-built
/// constraint graph is never handed to the host. Impulse errors are local
/// to the single call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Adding the child would make it its own ancestor.
    #[error("hierarchy cycle: child is an ancestor of the requested parent")]
    Cycle,

    /// The two pins of a joint do not live in the same hierarchy, so no
    /// simulation root can ever see both of them.
    #[error("joint pins do not share a hierarchy; joint cannot be registered")]
    UnregistrableJoint,

    /// Impulses only make sense on dynamic bodies that also carry a
    /// collision shape.
    #[error("impulse target must be a dynamic body with a collision shape")]
    InvalidBodyForImpulse,

    /// Simulation speed outside the supported band. Policy is reject,
    /// not clamp: an unpaired forward/inverse scale must never slip through.
    #[error("simulation speed {0} outside supported range 0.5..=1.5")]
    InvalidSpeedFactor(f32),

    /// Solver iteration counts must both be positive.
    #[error("solver iteration counts must be positive")]
    InvalidSolverIterations,

    /// Settings failed validation or did not parse.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// No pendulum was built at the requested index.
    #[error("no pendulum at index {0}")]
    UnknownPendulum(usize),
}
