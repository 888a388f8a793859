//! The ray painter component.
//!
//! `RayPainter` owns a fixed grid of rays organized in concentric cone
//! layers. Arming the painting mode and driving one `tick()` reorients every
//! ray with a fresh random azimuthal offset per layer, casts each layer's
//! sample ray through the host's [`RayCaster`], and stamps a decal on every
//! surface hit via the host's [`DecalSpawner`].

use crate::config::RayEmitterDesc;
use crate::error::Result;
use crate::math::{FORWARD, Pose, Quat, Vec3};
use crate::sampling::{self, AngleSource};
use crate::scene::{DecalId, DecalSpawner, RayCaster};

/// One ray slot in the emitter grid.
///
/// Rays carry no world position of their own; they share the emitter's
/// origin and differ only by their local rotation off the emitter's forward
/// axis. The `active` flag mirrors the painting mode so hosts can render
/// ray markers while a paint is armed.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    local_rotation: Quat,
    active: bool,
}

impl Ray {
    fn new() -> Self {
        Self {
            local_rotation: Quat::IDENTITY,
            active: false,
        }
    }

    /// Rotation relative to the emitter's base orientation.
    pub fn local_rotation(&self) -> Quat {
        self.local_rotation
    }

    /// Whether the ray marker is currently visible.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// World-space direction of the ray under the given emitter pose.
    pub fn world_direction(&self, emitter: &Pose) -> Vec3 {
        (emitter.rotation * self.local_rotation) * FORWARD
    }
}

/// Painter activity state.
///
/// A single enum rather than two flags, so scanning and painting can never
/// be armed at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PainterMode {
    #[default]
    Idle,
    Scanning,
    Painting,
}

/// Outcome of one paint pass.
#[derive(Debug, Clone)]
pub struct PaintResult {
    /// Decals spawned this pass, one per layer whose sample ray hit
    pub decals: Vec<DecalId>,
    /// Number of layers whose sample ray found no surface
    pub layers_missed: usize,
}

/// Emitter component that paints decals onto raycast hits.
///
/// The grid is `num_layers` layers of `rays_per_layer` rays, allocated once
/// at construction and never resized. Slot 0 of each layer is the layer's
/// sample ray: all rays in a layer share one cone angle and one random
/// azimuthal offset, so a single representative direction per layer is
/// enough for the painting decision even though every ray is reoriented.
///
/// All host services are injected at construction, so tests can script hit
/// and miss sequences and seed the randomness.
pub struct RayPainter {
    desc: RayEmitterDesc,
    pose: Pose,
    layers: Vec<Vec<Ray>>,
    mode: PainterMode,
    caster: Box<dyn RayCaster>,
    spawner: Box<dyn DecalSpawner>,
    angles: Box<dyn AngleSource>,
}

impl RayPainter {
    /// Creates a painter with the given descriptor and host services.
    ///
    /// # Errors
    ///
    /// Returns [`RayBrushError::Configuration`](crate::error::RayBrushError)
    /// if the descriptor has zero counts or a degenerate angle or distance.
    pub fn new<C, S, A>(desc: RayEmitterDesc, caster: C, spawner: S, angles: A) -> Result<Self>
    where
        C: RayCaster + 'static,
        S: DecalSpawner + 'static,
        A: AngleSource + 'static,
    {
        desc.validate()?;

        let layers = (0..desc.num_layers)
            .map(|_| vec![Ray::new(); desc.rays_per_layer])
            .collect();

        Ok(Self {
            desc,
            pose: Pose::identity(),
            layers,
            mode: PainterMode::Idle,
            caster: Box::new(caster),
            spawner: Box::new(spawner),
            angles: Box::new(angles),
        })
    }

    pub fn desc(&self) -> &RayEmitterDesc {
        &self.desc
    }

    /// Current emitter pose. Sample rays originate at its position.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Moves and reorients the emitter.
    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    pub fn mode(&self) -> PainterMode {
        self.mode
    }

    pub fn is_scanning(&self) -> bool {
        self.mode == PainterMode::Scanning
    }

    pub fn is_painting(&self) -> bool {
        self.mode == PainterMode::Painting
    }

    /// All ray layers, innermost first. Slot 0 of each layer is the sample ray.
    pub fn layers(&self) -> &[Vec<Ray>] {
        &self.layers
    }

    pub fn ray(&self, layer: usize, slot: usize) -> Option<&Ray> {
        self.layers.get(layer)?.get(slot)
    }

    /// Switches the painter to `mode`, updating ray visibility atomically.
    ///
    /// Invariant: ray markers are active iff the mode is `Painting`.
    pub fn set_mode(&mut self, mode: PainterMode) {
        self.mode = mode;
        let active = mode == PainterMode::Painting;
        for ray in self.layers.iter_mut().flatten() {
            ray.active = active;
        }
    }

    /// Arms or clears the scanning mode.
    ///
    /// Arming forces painting off; clearing only drops back to idle and
    /// never arms painting.
    pub fn set_scanning(&mut self, scanning: bool) {
        if scanning {
            self.set_mode(PainterMode::Scanning);
        } else if self.mode == PainterMode::Scanning {
            self.set_mode(PainterMode::Idle);
        }
    }

    /// Arms or clears the painting mode.
    ///
    /// Arming forces scanning off and shows all ray markers; clearing hides
    /// them and never arms scanning.
    pub fn set_painting(&mut self, painting: bool) {
        if painting {
            self.set_mode(PainterMode::Painting);
        } else if self.mode == PainterMode::Painting {
            self.set_mode(PainterMode::Idle);
        }
    }

    /// Advances the painter by one host frame.
    ///
    /// A pass is single-shot: an armed mode runs once and the painter drops
    /// back to idle. Returns the paint pass outcome when one ran.
    pub fn tick(&mut self) -> Option<PaintResult> {
        match self.mode {
            PainterMode::Painting => {
                let result = self.paint();
                self.set_mode(PainterMode::Idle);
                Some(result)
            }
            PainterMode::Scanning => {
                self.scan();
                self.set_mode(PainterMode::Idle);
                None
            }
            PainterMode::Idle => None,
        }
    }

    fn paint(&mut self) -> PaintResult {
        self.orient_rays();
        self.place_decals()
    }

    // Reserved: scanning has no behavior yet beyond disarming itself.
    fn scan(&mut self) {
        log::trace!("Painter: scan pass requested, nothing to do");
    }

    /// Recomputes every ray's local rotation.
    ///
    /// Layer `i` tilts its rays off the forward axis by
    /// `max_angle_from_center * (i + 1) / num_layers`; rays within a layer
    /// are spaced evenly around the circle and the whole layer is rotated by
    /// one shared random offset per pass.
    fn orient_rays(&mut self) {
        for layer_index in 0..self.layers.len() {
            let tilt = self.desc.layer_angle(layer_index);
            let offset = self.angles.next_offset();
            for (slot, ray) in self.layers[layer_index].iter_mut().enumerate() {
                let azimuth = sampling::azimuth(slot, self.desc.rays_per_layer, offset);
                ray.local_rotation = sampling::tilt_rotation(tilt, azimuth);
            }
        }
    }

    /// Casts each layer's sample ray and stamps a decal on every hit.
    ///
    /// A miss skips the layer; it is a normal outcome, not an error.
    fn place_decals(&mut self) -> PaintResult {
        let mut decals = Vec::with_capacity(self.layers.len());
        let mut layers_missed = 0;

        for (layer_index, rays) in self.layers.iter().enumerate() {
            let sample = &rays[0];
            let origin = self.pose.position;
            let direction = sample.world_direction(&self.pose);

            let Some(hit) = self.caster.cast_ray(origin, direction, self.desc.max_distance)
            else {
                log::trace!("Painter: layer {} sample ray missed", layer_index);
                layers_missed += 1;
                continue;
            };

            let rotation = Quat::from_rotation_arc(FORWARD, hit.orientation * FORWARD);
            let decal = self.spawner.spawn_decal(hit.point, rotation, hit.surface);
            log::debug!(
                "Painter: layer {} placed {} at {:?} on {}",
                layer_index,
                decal,
                hit.point,
                hit.surface
            );
            decals.push(decal);
        }

        PaintResult {
            decals,
            layers_missed,
        }
    }
}
