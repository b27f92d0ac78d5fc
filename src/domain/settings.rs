use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::domain::error::SceneError;

/// The settings for a pendulum setup, including the number of pendulums
/// to create and the size of each component.
///
/// Host-supplied, usually as a JSON document over the wasm boundary.
/// Lengths are in meters, masses in kilograms.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PendulumSettings {
    /// The radius of the ball in the pendulum. Also the spacing unit
    /// for laying pendulums out side by side.
    pub ball_radius: f32,
    /// The mass of the ball in the pendulum.
    pub ball_mass: f32,
    /// The length of the pendulum string. Drives layout and the visual
    /// string; the joint itself enforces zero separation at the pin.
    pub string_length: f32,
    /// The radius of the visual pendulum string (no physics).
    pub string_radius: f32,
    /// The size of the pendulum attachment box, scaled by `ball_radius`.
    pub attachment_size: [f32; 3],
    /// The number of pendulums to create.
    pub pendulum_count: u32,
    /// The speed of the simulation, implemented by scaling the node
    /// that owns the simulation state. Supported range is 0.5..=1.5.
    pub pendulum_speed: f32,
}

impl Default for PendulumSettings {
    fn default() -> Self {
        Self {
            ball_radius: 0.04,
            ball_mass: 2.0,
            string_length: 0.3,
            string_radius: 0.001,
            attachment_size: [2.0, 0.5, 2.0],
            pendulum_count: 1,
            pendulum_speed: 0.5,
        }
    }
}

impl PendulumSettings {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| SceneError::InvalidSettings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// The impulse power to apply to a ball, derived from the simulation
    /// speed: a slowed-down simulation needs a larger raw impulse to show
    /// comparable displacement, hence the quartic compensation. Pushes
    /// along negative x.
    pub fn impulse_power(&self) -> Vec3 {
        Vec3::new(-2.0 / self.pendulum_speed.powi(4), 0.0, 0.0)
    }

    /// Attachment box extents in world units.
    pub fn attachment_extents(&self) -> Vec3 {
        Vec3::from(self.attachment_size) * self.ball_radius
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if !(self.ball_radius > 0.0) {
            return Err(SceneError::InvalidSettings("ballRadius must be > 0".into()));
        }
        if !(self.ball_mass > 0.0) {
            return Err(SceneError::InvalidSettings("ballMass must be > 0".into()));
        }
        if !(self.string_length > 0.0) {
            return Err(SceneError::InvalidSettings(
                "stringLength must be > 0".into(),
            ));
        }
        if !(self.string_radius > 0.0) {
            return Err(SceneError::InvalidSettings(
                "stringRadius must be > 0".into(),
            ));
        }
        if self.attachment_size.iter().any(|&e| !(e > 0.0)) {
            return Err(SceneError::InvalidSettings(
                "attachmentSize extents must be > 0".into(),
            ));
        }
        if self.pendulum_count < 1 {
            return Err(SceneError::InvalidSettings(
                "pendulumCount must be >= 1".into(),
            ));
        }
        // The speed band itself is checked where the scale pair is applied.
        if !self.pendulum_speed.is_finite() || self.pendulum_speed <= 0.0 {
            return Err(SceneError::InvalidSpeedFactor(self.pendulum_speed));
        }
        Ok(())
    }
}
