//! Decal spawning trait.
//!
//! Decals are fire-and-forget: the painter creates them through this trait
//! and never tracks or removes them afterwards.

use crate::math::{Quat, Vec3};
use crate::scene::SurfaceId;

/// Lightweight handle for a spawned decal, reported back to the caller in
/// the paint pass result.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DecalId(pub u64);

impl std::fmt::Display for DecalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DecalId({})", self.0)
    }
}

/// Trait for instantiating decal objects in the host scene.
///
/// Spawning and attachment are one operation: the decal is created at
/// `position` with `rotation` and parented to `parent` so it follows that
/// surface from then on. Spawning cannot fail; hosts that can run out of
/// decal capacity should recycle internally.
pub trait DecalSpawner {
    fn spawn_decal(&mut self, position: Vec3, rotation: Quat, parent: SurfaceId) -> DecalId;
}
