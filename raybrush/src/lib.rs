//! # raybrush
//!
//! A small gameplay utility that casts rays from an emitter in concentric
//! angular layers, detects surface hits, and places decals at the hit
//! points, oriented to the hit surface.
//!
//! raybrush owns only the geometry: the ray pattern, the per-layer random
//! reorientation, and the hit-to-decal placement. Everything engine-shaped
//! (scene queries, object spawning, the frame loop) stays on the host side
//! behind small injected traits.
//!
//! ## Quick Start
//!
//! ```no_run
//! use raybrush::math::{Quat, Vec3};
//! use raybrush::{
//!     DecalId, DecalSpawner, RayCaster, RayEmitterDesc, RayHit, RayPainter, SurfaceId,
//!     UniformAngleSource,
//! };
//!
//! // Nearest-hit queries against the host scene
//! struct SceneCaster;
//!
//! impl RayCaster for SceneCaster {
//!     fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
//!         // Query your physics engine here
//!         None
//!     }
//! }
//!
//! // Decal instantiation in the host scene
//! struct SceneSpawner;
//!
//! impl DecalSpawner for SceneSpawner {
//!     fn spawn_decal(&mut self, position: Vec3, rotation: Quat, parent: SurfaceId) -> DecalId {
//!         // Instantiate a decal object and parent it to the surface
//!         DecalId(0)
//!     }
//! }
//!
//! let mut painter = RayPainter::new(
//!     RayEmitterDesc::default(),
//!     SceneCaster,
//!     SceneSpawner,
//!     UniformAngleSource::from_entropy(),
//! )?;
//!
//! // Arm a paint pass; the next tick runs it once and disarms
//! painter.set_painting(true);
//! if let Some(result) = painter.tick() {
//!     println!(
//!         "placed {} decals, {} layers missed",
//!         result.decals.len(),
//!         result.layers_missed
//!     );
//! }
//! # Ok::<(), raybrush::RayBrushError>(())
//! ```
//!
//! ## Key Components
//!
//! - **[`RayPainter`]**: the emitter component; owns the ray grid and mode state
//! - **[`RayEmitterDesc`]**: immutable configuration (rays per layer, layer
//!   count, cone angle, cast distance)
//! - **[`RayCaster`]** / **[`DecalSpawner`]**: traits the host implements to
//!   connect the painter to its scene
//! - **[`AngleSource`]** / **[`UniformAngleSource`]**: injectable randomness
//!   for the per-layer azimuthal offsets
//!
//! ## Architecture
//!
//! The painter is single-threaded and frame-driven: the host loop calls
//! [`RayPainter::tick`] once per frame. Arming a mode is single-shot; the
//! next tick runs one pass and drops back to idle. Scanning and painting
//! are mutually exclusive by construction ([`PainterMode`] is one enum, not
//! two flags), and ray markers are visible exactly while painting is armed.

pub mod config;
pub mod error;
pub mod math;
pub mod painter;
pub mod sampling;
pub mod scene;

pub use config::RayEmitterDesc;
pub use error::RayBrushError;
pub use painter::{PaintResult, PainterMode, Ray, RayPainter};
pub use sampling::{AngleSource, UniformAngleSource};
pub use scene::{DecalId, DecalSpawner, RayCaster, RayHit, SurfaceId};
