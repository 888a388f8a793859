//! Host-integration seams for the painter.
//!
//! The painter never talks to an engine directly. The embedding application
//! implements two small traits and hands them to [`RayPainter`]:
//!
//! 1. **[`RayCaster`]** - nearest-hit ray queries against the host's scene
//! 2. **[`DecalSpawner`]** - decal instantiation, parented to the hit surface
//!
//! # Workflow
//!
//! 1. Implement [`RayCaster`] over your physics/scene query system
//! 2. Implement [`DecalSpawner`] over your object spawning system
//! 3. Construct a [`RayPainter`] with both, arm it, and drive `tick()`
//!
//! [`RayPainter`]: crate::painter::RayPainter

pub mod ray_caster;
pub mod spawner;

pub use ray_caster::{RayCaster, RayHit, SurfaceId};
pub use spawner::{DecalId, DecalSpawner};
