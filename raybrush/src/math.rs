//! Math types for raybrush

pub use glam::{Quat, Vec3};

/// Canonical forward axis. Poses and rays face `-Z` at identity rotation.
pub const FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);

/// World-space position and orientation of the emitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation,
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * FORWARD
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Reorients the pose so that `forward()` points at `target`.
    pub fn look_at(&mut self, target: Vec3) {
        let forward = (target - self.position).normalize();
        self.rotation = Quat::from_rotation_arc(FORWARD, forward);
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_pose_faces_negative_z() {
        let pose = Pose::identity();
        assert_eq!(pose.forward(), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn look_at_points_forward_at_target() {
        let mut pose = Pose::from_position(Vec3::new(0.0, 0.0, 0.0));
        pose.look_at(Vec3::new(10.0, 0.0, 0.0));
        let forward = pose.forward();
        assert!((forward - Vec3::X).length() < 1e-5);
    }
}
