//! Controller classification from device identifier prefixes.
//!
//! Recomputed every frame from the snapshot list; classification carries no
//! state of its own.

use crate::DeviceSnapshot;

/// Identifier prefix reported by Oculus Touch controllers.
pub const OCULUS_TOUCH_PREFIX: &str = "Oculus Touch";
/// Identifier prefix reported by Vive wands (`SteamVR`/`OpenVR`).
pub const OPENVR_PREFIX: &str = "OpenVR Gamepad";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerKind {
    #[default]
    Gamepad,
    OculusTouch,
    ViveWand,
}

impl ControllerKind {
    /// True for dual-wand VR layouts, where look input is edge-triggered and
    /// the second stick lives on the next device index.
    pub fn is_vr_wand(self) -> bool {
        !matches!(self, Self::Gamepad)
    }
}

/// Classification result: controller family plus the primary device index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub kind: ControllerKind,
    pub primary: usize,
}

/// Scan devices in ascending index order. The first VR identifier-prefix
/// match wins; otherwise the last enumerated device is a generic gamepad.
/// Empty list means no input this frame.
pub fn classify(devices: &[DeviceSnapshot]) -> Option<Classification> {
    let mut fallback = None;
    for (i, dev) in devices.iter().enumerate() {
        if dev.id.starts_with(OCULUS_TOUCH_PREFIX) {
            return Some(Classification {
                kind: ControllerKind::OculusTouch,
                primary: i,
            });
        }
        if dev.id.starts_with(OPENVR_PREFIX) {
            return Some(Classification {
                kind: ControllerKind::ViveWand,
                primary: i,
            });
        }
        fallback = Some(i);
    }
    fallback.map(|primary| Classification {
        kind: ControllerKind::Gamepad,
        primary,
    })
}
