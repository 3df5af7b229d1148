//! Static configuration for the locomotion behavior.
//!
//! Populated once at construction (typically deserialized from the host's
//! config document); per-field serde defaults let partial documents work.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One of the three vector components, used to pick which velocity axes carry
/// strafe and forward/back movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[must_use]
    pub fn get(self, v: Vec3) -> f32 {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
            Self::Z => v.z,
        }
    }

    pub fn set(self, v: &mut Vec3, value: f32) {
        match self {
            Self::X => v.x = value,
            Self::Y => v.y = value,
            Self::Z => v.z = value,
        }
    }
}

/// Recognized options and their defaults. `pitch_axis` carries strafe
/// velocity and `roll_axis` carries forward/back velocity; `yaw_axis` is kept
/// for completeness of the axis remapping surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocomotionConfig {
    #[serde(default = "default_true")]
    pub look_enabled: bool,
    #[serde(default)]
    pub fly_enabled: bool,
    #[serde(default)]
    pub invert_axis_y: bool,

    /// Velocity decay rate (1/s).
    #[serde(default = "default_easing")]
    pub easing: f32,
    /// Stick-deflection acceleration (units/s^2).
    #[serde(default = "default_acceleration")]
    pub acceleration: f32,
    /// Look-rotation radians per unit of stick deflection.
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f32,

    #[serde(default = "default_pitch_axis")]
    pub pitch_axis: Axis,
    #[serde(default = "default_yaw_axis")]
    pub yaw_axis: Axis,
    #[serde(default = "default_roll_axis")]
    pub roll_axis: Axis,

    /// Reserved diagnostic flag; not consulted by the systems.
    #[serde(default)]
    pub debug: bool,
}

fn default_true() -> bool {
    true
}
fn default_easing() -> f32 {
    20.0
}
fn default_acceleration() -> f32 {
    65.0
}
fn default_sensitivity() -> f32 {
    0.075
}
fn default_pitch_axis() -> Axis {
    Axis::X
}
fn default_yaw_axis() -> Axis {
    Axis::Y
}
fn default_roll_axis() -> Axis {
    Axis::Z
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            look_enabled: true,
            fly_enabled: false,
            invert_axis_y: false,
            easing: 20.0,
            acceleration: 65.0,
            sensitivity: 0.075,
            pitch_axis: Axis::X,
            yaw_axis: Axis::Y,
            roll_axis: Axis::Z,
            debug: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_accessors_round_trip() {
        let mut v = Vec3::ZERO;
        Axis::Z.set(&mut v, 4.5);
        assert_eq!(Axis::Z.get(v), 4.5);
        assert_eq!(Axis::X.get(v), 0.0);
    }

    #[test]
    fn defaults_match_recognized_options() {
        let cfg = LocomotionConfig::default();
        assert!(cfg.look_enabled);
        assert!(!cfg.fly_enabled);
        assert_eq!(cfg.easing, 20.0);
        assert_eq!(cfg.acceleration, 65.0);
        assert_eq!(cfg.sensitivity, 0.075);
        assert_eq!(cfg.pitch_axis, Axis::X);
        assert_eq!(cfg.roll_axis, Axis::Z);
    }
}
