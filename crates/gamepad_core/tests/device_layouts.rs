use gamepad_core::{classify, joystick, ControllerKind, DeviceSnapshot};
use glam::Vec2;

fn dev(id: &str, axes: &[f32]) -> DeviceSnapshot {
    DeviceSnapshot {
        id: id.to_string(),
        axes: axes.to_vec(),
        ..Default::default()
    }
}

#[test]
fn oculus_pair_maps_move_and_look_across_devices() {
    let devices = vec![
        dev("Oculus Touch (Left)", &[0.3, -0.4]),
        dev("Oculus Touch (Right)", &[0.8, 0.9]),
    ];
    let cls = classify(&devices).unwrap();
    assert_eq!(cls.kind, ControllerKind::OculusTouch);
    assert_eq!(cls.primary, 0);

    // Movement: primary device's first two axes.
    assert_eq!(joystick(&devices, cls, 0).unwrap(), Vec2::new(0.3, -0.4));
    // Look: next device's axis 0, vertical forced flat.
    assert_eq!(joystick(&devices, cls, 1).unwrap(), Vec2::new(0.8, 0.0));
}

#[test]
fn vive_prefix_classifies_as_wand() {
    let devices = vec![
        dev("Xbox 360 Controller", &[0.0; 4]),
        dev("OpenVR Gamepad", &[0.1, 0.2]),
    ];
    let cls = classify(&devices).unwrap();
    assert_eq!(cls.kind, ControllerKind::ViveWand);
    assert_eq!(cls.primary, 1);
}

#[test]
fn generic_pad_with_two_axes_reads_zero_look() {
    // A pad exposing only a movement stick: look axes are simply absent.
    let devices = vec![dev("SNES-style pad", &[0.5, 0.5])];
    let cls = classify(&devices).unwrap();
    assert_eq!(cls.kind, ControllerKind::Gamepad);
    assert_eq!(joystick(&devices, cls, 1).unwrap(), Vec2::ZERO);
}

#[test]
fn unknown_slot_reports_contract_violation() {
    let devices = vec![dev("Xbox 360 Controller", &[0.0; 4])];
    let cls = classify(&devices).unwrap();
    let err = joystick(&devices, cls, 3).unwrap_err();
    assert!(err.to_string().contains("joystick slot 3"));
}
