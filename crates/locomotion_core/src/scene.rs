//! Collaborator seams: the entity pose attribute store and the HMD pose
//! tracker, plus simple in-memory implementations for tests and headless
//! hosts.

use glam::{Quat, Vec3};

/// Live HMD orientation source. `update` is called once per frame before the
/// orientation is read; `None` means the tracker is absent or degraded.
pub trait PoseTracker {
    fn update(&mut self);
    fn orientation(&self) -> Option<Quat>;
}

/// Constant-orientation tracker. `degraded()` models a missing/failed HMD.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPose {
    orientation: Option<Quat>,
}

impl FixedPose {
    #[must_use]
    pub fn new(orientation: Quat) -> Self {
        Self {
            orientation: Some(orientation),
        }
    }

    #[must_use]
    pub fn degraded() -> Self {
        Self { orientation: None }
    }

    pub fn set_orientation(&mut self, orientation: Option<Quat>) {
        self.orientation = orientation;
    }
}

impl PoseTracker for FixedPose {
    fn update(&mut self) {}

    fn orientation(&self) -> Option<Quat> {
        self.orientation
    }
}

/// Shared entity pose, owned by the host scene graph.
///
/// The rotation attribute is Euler degrees `(pitch x, yaw y, roll z)`; it is
/// the channel through which external writers (head tracking, scripted
/// controllers) contest look rotation. `translate` moves only the transform
/// translation and `set_position` writes only the position attribute; the
/// locomotion system calls both with the same displacement to keep them in
/// sync.
pub trait EntityPose {
    /// `None` when the entity has no rotation attribute yet.
    fn rotation_deg(&self) -> Option<Vec3>;
    fn set_rotation_deg(&mut self, rotation: Vec3);
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    /// Apply a world-space delta to the transform translation.
    fn translate(&mut self, delta: Vec3);
}

/// In-memory entity pose: a transform translation plus the two attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScenePose {
    pub translation: Vec3,
    pub position: Vec3,
    pub rotation: Option<Vec3>,
}

impl ScenePose {
    #[must_use]
    pub fn new(position: Vec3, rotation_deg: Vec3) -> Self {
        Self {
            translation: position,
            position,
            rotation: Some(rotation_deg),
        }
    }
}

impl EntityPose for ScenePose {
    fn rotation_deg(&self) -> Option<Vec3> {
        self.rotation
    }

    fn set_rotation_deg(&mut self, rotation: Vec3) {
        self.rotation = Some(rotation);
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn translate(&mut self, delta: Vec3) {
        self.translation += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_pose_keeps_attribute_and_transform_separate() {
        let mut pose = ScenePose::new(Vec3::ZERO, Vec3::ZERO);
        pose.translate(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(pose.translation.x, 1.0);
        assert_eq!(pose.position.x, 0.0);
        pose.set_position(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(pose.translation, pose.position);
    }

    #[test]
    fn degraded_tracker_reports_none() {
        let mut t = FixedPose::degraded();
        t.update();
        assert!(t.orientation().is_none());
    }
}
