//! Damped locomotion: directional input accumulates into a decaying velocity,
//! which is rotated by the entity's facing plus the live HMD orientation so
//! forward always matches where the user is looking.

use gamepad_core::{classify, joystick, DeviceSnapshot, DEADZONE};
use glam::{EulerRot, Quat, Vec3};
use tracing::warn;

use crate::config::LocomotionConfig;
use crate::scene::{EntityPose, PoseTracker};

/// Frame deltas above this are treated as a pause/resume, not motion (ms).
pub const MAX_FRAME_MS: f32 = 200.0;

/// Per-entity damped velocity. Decay applies only to the two configured
/// movement axes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionState {
    pub velocity: Vec3,
}

impl MotionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Integrate one frame: damp, accumulate input, rotate the displacement
    /// into world space, and apply it to the entity.
    pub fn update(
        &mut self,
        cfg: &LocomotionConfig,
        dt_ms: f32,
        devices: &[DeviceSnapshot],
        tracker: &mut dyn PoseTracker,
        entity: &mut dyn EntityPose,
    ) -> anyhow::Result<()> {
        if dt_ms <= 0.0 {
            return Ok(());
        }
        // A huge delta means the host paused or dropped frames; integrating
        // it would spike the displacement.
        if dt_ms > MAX_FRAME_MS {
            cfg.roll_axis.set(&mut self.velocity, 0.0);
            cfg.pitch_axis.set(&mut self.velocity, 0.0);
            return Ok(());
        }
        let dt = dt_ms / 1000.0;

        for axis in [cfg.roll_axis, cfg.pitch_axis] {
            let v = axis.get(self.velocity);
            axis.set(&mut self.velocity, v - v * cfg.easing * dt);
        }

        if let Some(cls) = classify(devices) {
            let stick = joystick(devices, cls, 0)?;
            let dpad = devices
                .get(cls.primary)
                .map_or(glam::Vec2::ZERO, DeviceSnapshot::dpad_vector);
            // Each axis falls back to the analog stick independently.
            let input_x = if dpad.x == 0.0 { stick.x } else { dpad.x };
            let input_y = if dpad.y == 0.0 { stick.y } else { dpad.y };
            if input_x.abs() > DEADZONE {
                let v = cfg.pitch_axis.get(self.velocity);
                cfg.pitch_axis
                    .set(&mut self.velocity, v + input_x * cfg.acceleration * dt);
            }
            if input_y.abs() > DEADZONE {
                let v = cfg.roll_axis.get(self.velocity);
                cfg.roll_axis
                    .set(&mut self.velocity, v + input_y * cfg.acceleration * dt);
            }
        }

        let displacement = self.movement_vector(cfg, dt, tracker, entity);
        if displacement == Vec3::ZERO {
            return Ok(());
        }
        let position = entity.position();
        entity.translate(displacement);
        entity.set_position(position + displacement);
        Ok(())
    }

    /// Rotate the raw `velocity * dt` displacement by the entity rotation and
    /// then the HMD orientation (pitch zeroed on both unless flying). Falls
    /// back to the unrotated displacement when neither source is available.
    fn movement_vector(
        &self,
        cfg: &LocomotionConfig,
        dt: f32,
        tracker: &mut dyn PoseTracker,
        entity: &dyn EntityPose,
    ) -> Vec3 {
        let local = self.velocity * dt;

        tracker.update();
        let hmd = tracker.orientation();
        let rotation = entity.rotation_deg();
        if hmd.is_none() && rotation.is_none() {
            warn!("no pose tracking and no rotation attribute; applying unrotated displacement");
            return local;
        }

        let mut direction = local;
        if let Some(r) = rotation {
            let pitch = if cfg.fly_enabled { r.x.to_radians() } else { 0.0 };
            direction = Quat::from_euler(EulerRot::YXZ, r.y.to_radians(), pitch, 0.0) * direction;
        }
        if let Some(q) = hmd {
            let (yaw, pitch, _roll) = q.to_euler(EulerRot::YXZ);
            let pitch = if cfg.fly_enabled { pitch } else { 0.0 };
            direction = Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0) * direction;
        }
        direction
    }
}
