use wasm_bindgen::prelude::*;

use crate::domain::settings::PendulumSettings;

use super::SceneCore;

/// WASM-facing wrapper around the scene core.
///
/// The host builds the scene once, renders from the read-only getters
/// each frame, and calls `apply_impulse` from its input handling. Queued
/// impulses are exposed for the host's solver to drain each step.
#[wasm_bindgen]
pub struct World {
    core: SceneCore,
}

#[wasm_bindgen]
impl World {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: SceneCore::new(),
        }
    }

    /// Build the scene from a JSON settings document.
    pub fn build_scene(&mut self, settings_json: String) -> Result<(), JsValue> {
        let settings = PendulumSettings::from_json(&settings_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.core
            .build_scene(settings)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Build the scene with the reference settings.
    pub fn build_scene_default(&mut self) -> Result<(), JsValue> {
        self.core
            .build_scene(PendulumSettings::default())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn pendulum_count(&self) -> usize {
        self.core.pendulum_count()
    }

    #[wasm_bindgen(getter)]
    pub fn joint_count(&self) -> usize {
        self.core.joint_count()
    }

    #[wasm_bindgen(getter)]
    pub fn node_count(&self) -> usize {
        self.core.graph().node_count()
    }

    /// Raw id of the simulation root node, if a scene is built.
    pub fn root_node(&self) -> Option<u32> {
        self.core.root().map(|id| id.raw())
    }

    // === RENDER API ===

    /// World-space ball positions as a flat [x0, y0, z0, x1, ...] array.
    pub fn ball_positions(&self) -> js_sys::Float32Array {
        let mut flat = Vec::with_capacity(self.core.pendulum_count() * 3);
        for i in 0..self.core.pendulum_count() {
            if let Some(pos) = self.core.ball_world_position(i) {
                flat.extend_from_slice(&pos.to_array());
            }
        }
        js_sys::Float32Array::from(flat.as_slice())
    }

    pub fn ball_x(&self, index: usize) -> Option<f32> {
        self.core.ball_world_position(index).map(|p| p.x)
    }

    pub fn ball_y(&self, index: usize) -> Option<f32> {
        self.core.ball_world_position(index).map(|p| p.y)
    }

    pub fn ball_z(&self, index: usize) -> Option<f32> {
        self.core.ball_world_position(index).map(|p| p.z)
    }

    pub fn ball_radius(&self) -> f32 {
        self.core.settings().ball_radius
    }

    pub fn string_length(&self) -> f32 {
        self.core.settings().string_length
    }

    pub fn string_radius(&self) -> f32 {
        self.core.settings().string_radius
    }

    pub fn simulation_speed(&self) -> f32 {
        self.core.settings().pendulum_speed
    }

    // === INPUT API ===

    /// Queue the settings-derived impulse on the indexed pendulum's ball
    /// (host tap/click handling calls this).
    pub fn apply_impulse(&mut self, pendulum_index: usize) -> Result<(), JsValue> {
        self.core
            .apply_impulse(pendulum_index)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    // === SOLVER HANDOFF API ===

    pub fn pending_impulse_count(&self) -> usize {
        self.core.pending_impulses().len()
    }

    /// Raw node id targeted by the queued impulse at `index`.
    pub fn pending_impulse_node(&self, index: usize) -> Option<u32> {
        self.core
            .pending_impulses()
            .get(index)
            .map(|a| a.target.raw())
    }

    pub fn pending_impulse_x(&self, index: usize) -> Option<f32> {
        self.core
            .pending_impulses()
            .get(index)
            .map(|a| a.linear_impulse.x)
    }

    pub fn pending_impulse_y(&self, index: usize) -> Option<f32> {
        self.core
            .pending_impulses()
            .get(index)
            .map(|a| a.linear_impulse.y)
    }

    pub fn pending_impulse_z(&self, index: usize) -> Option<f32> {
        self.core
            .pending_impulses()
            .get(index)
            .map(|a| a.linear_impulse.z)
    }

    /// Clear the queue once the host solver has consumed it.
    pub fn clear_pending_impulses(&mut self) {
        self.core.drain_pending_impulses();
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
