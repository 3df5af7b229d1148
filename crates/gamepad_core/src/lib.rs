//! Per-frame gamepad device snapshots plus the shared classification and
//! axis-mapping logic consumed by the locomotion systems.
//!
//! Hosts re-fetch snapshots from their platform input layer every frame;
//! nothing here caches device state across frames.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::struct_excessive_bools,
    clippy::float_cmp,
    clippy::must_use_candidate
)]

use glam::Vec2;

pub mod classify;
pub mod joystick;

pub use classify::{classify, Classification, ControllerKind};
pub use joystick::{apply_deadzone, joystick, DEADZONE};

/// Digital d-pad state for one device. Buttons the platform does not report
/// read as not-pressed.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DpadState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// One connected controller, captured for a single frame.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct DeviceSnapshot {
    /// Platform identifier string (used for VR-wand classification).
    pub id: String,
    /// Analog axes, each in [-1, 1]. Devices may expose any count.
    pub axes: Vec<f32>,
    pub dpad: DpadState,
}

impl DeviceSnapshot {
    /// Axis value at `index`, or 0 when the device exposes fewer axes.
    pub fn axis(&self, index: usize) -> f32 {
        self.axes.get(index).copied().unwrap_or(0.0)
    }

    /// D-pad as a vector: right(+1)/left(-1) on x, down(+1)/up(-1) on y.
    pub fn dpad_vector(&self) -> Vec2 {
        let x = f32::from(self.dpad.right) - f32::from(self.dpad.left);
        let y = f32::from(self.dpad.down) - f32::from(self.dpad.up);
        Vec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_axes_read_as_zero() {
        let dev = DeviceSnapshot {
            axes: vec![0.5],
            ..Default::default()
        };
        assert_eq!(dev.axis(0), 0.5);
        assert_eq!(dev.axis(3), 0.0);
    }

    #[test]
    fn dpad_vector_signs() {
        let mut dev = DeviceSnapshot::default();
        assert_eq!(dev.dpad_vector(), Vec2::ZERO);
        dev.dpad.right = true;
        dev.dpad.up = true;
        assert_eq!(dev.dpad_vector(), Vec2::new(1.0, -1.0));
        dev.dpad.left = true; // opposing presses cancel
        assert_eq!(dev.dpad_vector().x, 0.0);
    }
}
