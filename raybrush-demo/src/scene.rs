//! Toy host scene: one analytic wall plane and a logging decal spawner.

use raybrush::math::{Quat, Vec3};
use raybrush::{DecalId, DecalSpawner, RayCaster, RayHit, SurfaceId};

/// Infinite wall plane at a fixed z, facing back toward +Z.
pub struct WallCaster {
    wall_z: f32,
    surface: SurfaceId,
}

impl WallCaster {
    pub fn new(wall_z: f32) -> Self {
        Self {
            wall_z,
            surface: SurfaceId(1),
        }
    }
}

impl RayCaster for WallCaster {
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        if direction.z.abs() < 1e-6 {
            return None;
        }

        let t = (self.wall_z - origin.z) / direction.z;
        if t <= 0.0 || t > max_distance {
            return None;
        }

        // Wall forward is +Z: half a turn about Y from the canonical -Z.
        let orientation = Quat::from_rotation_y(std::f32::consts::PI);
        Some(RayHit::new(origin + direction * t, t, orientation, self.surface))
    }
}

/// Spawner that just logs where decals land.
#[derive(Default)]
pub struct LoggingSpawner {
    spawned: u64,
}

impl DecalSpawner for LoggingSpawner {
    fn spawn_decal(&mut self, position: Vec3, rotation: Quat, parent: SurfaceId) -> DecalId {
        let id = DecalId(self.spawned);
        self.spawned += 1;
        log::debug!(
            "spawned {} at ({:.2}, {:.2}, {:.2}) on {} (rotation {:?})",
            id,
            position.x,
            position.y,
            position.z,
            parent,
            rotation
        );
        id
    }
}
