//! Joystick-driven first-person locomotion and look rotation for a tracked
//! entity, fused with head tracking.
//!
//! Two per-frame systems cooperate: the rotation arbiter decides whether
//! joystick look input currently owns the entity's contested rotation
//! attribute, and the locomotion integrator turns directional input into a
//! damped, head-relative displacement. [`JoystickLocomotion`] runs them in
//! that order once per frame.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::struct_excessive_bools,
    clippy::float_cmp,
    clippy::must_use_candidate,
    clippy::similar_names
)]

pub mod config;
pub mod scene;
pub mod systems;
pub mod telemetry;

pub use config::{Axis, LocomotionConfig};
pub use scene::{EntityPose, FixedPose, PoseTracker, ScenePose};
pub use systems::locomotion::MotionState;
pub use systems::rotation_arbiter::RotationArbiter;

use gamepad_core::DeviceSnapshot;

/// The per-entity behavior: config plus both systems' state, constructed once
/// when attached to an entity.
#[derive(Debug, Clone, Default)]
pub struct JoystickLocomotion {
    cfg: LocomotionConfig,
    arbiter: RotationArbiter,
    motion: MotionState,
}

impl JoystickLocomotion {
    #[must_use]
    pub fn new(cfg: LocomotionConfig) -> Self {
        Self {
            cfg,
            arbiter: RotationArbiter::new(),
            motion: MotionState::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &LocomotionConfig {
        &self.cfg
    }

    #[must_use]
    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    #[must_use]
    pub fn arbiter(&self) -> &RotationArbiter {
        &self.arbiter
    }

    /// Run one frame: look rotation first, then movement, so the displacement
    /// is computed against the rotation applied this frame. `t_ms` is the
    /// host frame time, `dt_ms` the elapsed delta; both in milliseconds.
    pub fn tick(
        &mut self,
        t_ms: f64,
        dt_ms: f32,
        devices: &[DeviceSnapshot],
        tracker: &mut dyn PoseTracker,
        entity: &mut dyn EntityPose,
    ) -> anyhow::Result<()> {
        self.arbiter
            .update(&self.cfg, t_ms, dt_ms, devices, entity)?;
        self.motion
            .update(&self.cfg, dt_ms, devices, tracker, entity)?;
        Ok(())
    }
}
