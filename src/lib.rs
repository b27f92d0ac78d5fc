//! Pendula Engine - Rigid-body pendulum constraint scenes in WASM
//!
//! Architecture (SOLID):
//! - scene/      - Transform hierarchy (arena of nodes)
//! - domain/     - Settings and errors
//! - systems/    - Bodies, pins/joints, impulses
//! - simulation/ - Scene core, assembly, solver-root state, WASM facade
//!
//! The crate assembles a fully registered constraint graph (nodes, bodies,
//! pins, revolute joints, one simulation root) and hands it to the host.
//! Rendering, anchoring, and the fixed-timestep solver loop live on the
//! host side of the wasm boundary.

pub mod domain;
pub mod scene;
pub mod simulation;
pub mod systems;

pub use domain::error::SceneError;
pub use domain::settings::PendulumSettings;
pub use scene::{Node, NodeId, SceneGraph};
pub use simulation::{PendulumHandles, SceneCore, World};
pub use systems::body::{BodyDescriptor, BodyMode, PhysicsMaterial, Shape};
pub use systems::impulse::ImpulseAction;
pub use systems::pins::{Pin, RevoluteJoint};

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Pendula WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
