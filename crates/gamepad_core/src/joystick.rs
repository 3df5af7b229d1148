//! Joystick slot → axis mapping for the supported controller layouts.

use anyhow::Result;
use glam::Vec2;

use crate::{Classification, ControllerKind, DeviceSnapshot};

/// Minimum analog magnitude treated as deliberate input.
pub const DEADZONE: f32 = 0.2;

/// Zero each component whose magnitude is within the deadzone.
#[must_use]
pub fn apply_deadzone(mut v: Vec2) -> Vec2 {
    if v.x.abs() <= DEADZONE {
        v.x = 0.0;
    }
    if v.y.abs() <= DEADZONE {
        v.y = 0.0;
    }
    v
}

/// Read joystick `slot` for the classified controller.
///
/// Slot 0 (movement) is always the primary device's first two axes. Slot 1
/// (look) is axes 2-3 on a generic gamepad; on dual-wand VR layouts it is
/// axis 0 of the *next* device index with the vertical component forced to
/// zero. An absent device reads as a zero vector. Any other slot is a
/// programming error and fails fatally.
pub fn joystick(devices: &[DeviceSnapshot], cls: Classification, slot: u8) -> Result<Vec2> {
    let primary = devices.get(cls.primary);
    match slot {
        0 => Ok(primary.map_or(Vec2::ZERO, |d| Vec2::new(d.axis(0), d.axis(1)))),
        1 => match cls.kind {
            ControllerKind::Gamepad => {
                Ok(primary.map_or(Vec2::ZERO, |d| Vec2::new(d.axis(2), d.axis(3))))
            }
            ControllerKind::OculusTouch | ControllerKind::ViveWand => Ok(devices
                .get(cls.primary + 1)
                .map_or(Vec2::ZERO, |d| Vec2::new(d.axis(0), 0.0))),
        },
        other => anyhow::bail!("unexpected joystick slot {other}: only 0 (move) and 1 (look) exist"),
    }
}
