//! Raycast query trait for sampling the host scene.
//!
//! This module provides the interface through which the painter asks the
//! embedding application for ray intersections. Implement [`RayCaster`] over
//! whatever scene representation the host already has (a physics engine, a
//! BVH, analytic geometry).

use crate::math::{Quat, Vec3};

/// Lightweight, type-safe handle for a surface in the host scene.
///
/// Opaque to the painter; it is only carried from a [`RayHit`] into
/// [`DecalSpawner::spawn_decal`](crate::scene::DecalSpawner::spawn_decal) so
/// the host can parent the decal to the surface that was hit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

impl std::fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SurfaceId({})", self.0)
    }
}

/// Result of a ray intersection test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// World-space point where the ray met the surface
    pub point: Vec3,

    /// Distance from the ray origin to `point`
    pub distance: f32,

    /// World orientation of the hit surface's transform.
    ///
    /// Decals are aligned to this orientation's forward axis, not to the
    /// geometric normal.
    pub orientation: Quat,

    /// Handle of the surface that was hit
    pub surface: SurfaceId,
}

impl RayHit {
    pub fn new(point: Vec3, distance: f32, orientation: Quat, surface: SurfaceId) -> Self {
        Self {
            point,
            distance,
            orientation,
            surface,
        }
    }
}

/// Trait for providing nearest-hit ray queries to the painter.
///
/// # Notes
///
/// - If multiple surfaces are hit, return the **closest** hit
/// - Return `None` for a miss; a miss is a normal outcome, not an error
/// - `direction` is normalized; hits beyond `max_distance` must be ignored
pub trait RayCaster {
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit>;
}
