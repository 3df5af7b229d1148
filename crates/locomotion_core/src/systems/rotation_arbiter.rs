//! Look-rotation ownership arbitration.
//!
//! The entity's rotation attribute is shared with external writers (head
//! tracking, scripted controllers). Rather than locking, the arbiter infers
//! ownership from the values themselves: a rotation that matches neither the
//! last observed value nor the arbiter's own last write means an external
//! writer is active, and joystick rotation yields until that writer has been
//! quiet for the debounce window.

use gamepad_core::{apply_deadzone, classify, joystick, DeviceSnapshot};
use glam::Vec3;
use tracing::debug;

use crate::config::LocomotionConfig;
use crate::scene::EntityPose;

/// Squared-distance threshold (degrees²) below which two rotation values are
/// considered the same.
pub const ROTATION_EPS: f32 = 1e-4;
/// Quiet period required before reclaiming a contested rotation (ms).
pub const DEBOUNCE_MS: f64 = 500.0;

const MAX_PITCH_RAD: f32 = std::f32::consts::FRAC_PI_2;

/// Per-entity rotation ownership state. Mutated only by `update`.
#[derive(Debug, Clone, Copy)]
pub struct RotationArbiter {
    prev_observed: Vec3,
    prev_applied: Vec3,
    t_last_external: f64,
    t_last_local: f64,
    look_active: bool,
    yaw: f32,
    pitch: f32,
}

impl Default for RotationArbiter {
    fn default() -> Self {
        Self {
            prev_observed: Vec3::ZERO,
            prev_applied: Vec3::ZERO,
            // "Long ago": a fresh arbiter is neither debounced nor deferring
            // to an external writer.
            t_last_external: f64::NEG_INFINITY,
            t_last_local: f64::NEG_INFINITY,
            look_active: false,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl RotationArbiter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Timestamp of the most recent detected external rotation write (ms).
    #[must_use]
    pub fn last_external_activity_ms(&self) -> f64 {
        self.t_last_external
    }

    /// Timestamp of the arbiter's own most recent rotation write (ms).
    #[must_use]
    pub fn last_local_activity_ms(&self) -> f64 {
        self.t_last_local
    }

    /// Decide whether joystick look input owns the rotation attribute this
    /// frame, and apply it if so. `t_ms` is the host frame time.
    pub fn update(
        &mut self,
        cfg: &LocomotionConfig,
        t_ms: f64,
        dt_ms: f32,
        devices: &[DeviceSnapshot],
        entity: &mut dyn EntityPose,
    ) -> anyhow::Result<()> {
        if dt_ms <= 0.0 || !cfg.look_enabled {
            return Ok(());
        }
        let Some(cls) = classify(devices) else {
            return Ok(());
        };

        let current = entity.rotation_deg().unwrap_or(self.prev_observed);

        // A rotation matching neither the last observation nor our own last
        // write means another component moved the entity this frame.
        if current.distance_squared(self.prev_observed) > ROTATION_EPS
            && current.distance_squared(self.prev_applied) > ROTATION_EPS
        {
            self.prev_observed = current;
            self.t_last_external = t_ms;
            debug!(?current, "external rotation writer active; yielding");
            return Ok(());
        }
        self.prev_observed = current;

        if t_ms - self.t_last_external < DEBOUNCE_MS {
            return Ok(());
        }

        let mut look = apply_deadzone(joystick(devices, cls, 1)?);
        if cfg.invert_axis_y {
            look.y = -look.y;
        }

        // External writer was active more recently than us and the stick is
        // idle: do not snap the rotation back just because it went quiet.
        if self.t_last_external > self.t_last_local && look.length_squared() == 0.0 {
            return Ok(());
        }

        let mut sensitivity = cfg.sensitivity;
        if cls.kind.is_vr_wand() {
            // Wand sticks apply as single impulses on activity edges, scaled
            // up to compensate.
            let was_active = self.look_active;
            let is_active = look.length_squared() > 0.0;
            self.look_active = is_active;
            if was_active == is_active {
                return Ok(());
            }
            sensitivity *= 10.0;
        }

        let look = look * sensitivity;
        self.yaw -= look.x;
        self.pitch = (self.pitch - look.y).clamp(-MAX_PITCH_RAD, MAX_PITCH_RAD);

        let applied = Vec3::new(self.pitch.to_degrees(), self.yaw.to_degrees(), 0.0);
        entity.set_rotation_deg(applied);
        self.prev_applied = applied;
        self.t_last_local = t_ms;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ScenePose;
    use gamepad_core::DeviceSnapshot;

    fn pad(axes: &[f32]) -> Vec<DeviceSnapshot> {
        vec![DeviceSnapshot {
            id: "Xbox 360 Controller".to_string(),
            axes: axes.to_vec(),
            ..Default::default()
        }]
    }

    #[test]
    fn external_write_is_not_clobbered() {
        let cfg = LocomotionConfig::default();
        let mut arb = RotationArbiter::new();
        let mut pose = ScenePose::new(Vec3::ZERO, Vec3::new(0.0, 50.0, 0.0));
        arb.update(&cfg, 1000.0, 16.0, &pad(&[0.0, 0.0, 1.0, 0.0]), &mut pose)
            .unwrap();
        assert_eq!(pose.rotation.unwrap(), Vec3::new(0.0, 50.0, 0.0));
        assert_eq!(arb.last_external_activity_ms(), 1000.0);
    }

    #[test]
    fn look_applies_when_uncontested() {
        let cfg = LocomotionConfig::default();
        let mut arb = RotationArbiter::new();
        let mut pose = ScenePose::new(Vec3::ZERO, Vec3::ZERO);
        arb.update(&cfg, 1000.0, 16.0, &pad(&[0.0, 0.0, 1.0, 0.0]), &mut pose)
            .unwrap();
        let rot = pose.rotation.unwrap();
        assert!((rot.y - (-cfg.sensitivity).to_degrees()).abs() < 1e-4);
        assert_eq!(rot.z, 0.0);
    }

    #[test]
    fn zero_dt_changes_nothing() {
        let cfg = LocomotionConfig::default();
        let mut arb = RotationArbiter::new();
        let mut pose = ScenePose::new(Vec3::ZERO, Vec3::ZERO);
        arb.update(&cfg, 1000.0, 0.0, &pad(&[0.0, 0.0, 1.0, 0.0]), &mut pose)
            .unwrap();
        assert_eq!(pose.rotation.unwrap(), Vec3::ZERO);
        assert!(arb.last_local_activity_ms().is_infinite());
    }
}
