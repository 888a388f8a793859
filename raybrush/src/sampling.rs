//! Ray pattern sampling: cone-layer tilt rotations and random azimuthal offsets.
//!
//! Each layer of rays shares one cone half-angle and one random azimuthal
//! offset per paint pass; individual rays are spaced evenly around the circle
//! and tilted off the emitter's forward axis by the layer angle.

use crate::math::Quat;
use glam::EulerRot;
use rand::{Rng, SeedableRng, rng};
use rand_chacha::ChaCha20Rng;
use std::f32::consts::TAU;

/// Source of random azimuthal offsets, one draw per layer per paint pass.
///
/// Injected into the painter so hosts can supply their own randomness and
/// tests can script or seed it.
pub trait AngleSource {
    /// Returns a uniform angle in `[0, 2π)` radians.
    fn next_offset(&mut self) -> f32;
}

/// Default [`AngleSource`] backed by a ChaCha20 PRNG.
pub struct UniformAngleSource {
    rng: ChaCha20Rng,
}

impl UniformAngleSource {
    /// Creates a source seeded from the thread-local entropy RNG.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha20Rng::from_rng(&mut rng()),
        }
    }

    /// Creates a deterministic source from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformAngleSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl AngleSource for UniformAngleSource {
    fn next_offset(&mut self) -> f32 {
        self.rng.random_range(0.0..TAU)
    }
}

/// Azimuth of ray `slot` within a layer of `rays_per_layer` rays, in radians.
///
/// Rays are spaced evenly by `2π / rays_per_layer`, then the whole layer is
/// rotated by the shared `offset`.
pub fn azimuth(slot: usize, rays_per_layer: usize, offset: f32) -> f32 {
    TAU * slot as f32 / rays_per_layer as f32 + offset
}

/// Local rotation tilting a ray off the forward axis.
///
/// The tilt is expressed as Euler angles `tilt * (sin azimuth, cos azimuth, 0)`
/// about the X and Y axes, composed in Y·X·Z order. Sweeping the azimuth
/// through a full turn traces a cone of half-angle `tilt` around the
/// emitter's forward axis.
pub fn tilt_rotation(tilt: f32, azimuth: f32) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        tilt * azimuth.cos(),
        tilt * azimuth.sin(),
        0.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::FORWARD;

    #[test]
    fn azimuths_are_evenly_spaced() {
        let rays = 6;
        let offset = 1.234;
        for slot in 1..rays {
            let step = azimuth(slot, rays, offset) - azimuth(slot - 1, rays, offset);
            assert!((step - TAU / rays as f32).abs() < 1e-5);
        }
    }

    #[test]
    fn azimuth_includes_shared_offset() {
        assert!((azimuth(0, 4, 0.5) - 0.5).abs() < 1e-6);
        assert!((azimuth(1, 4, 0.5) - (TAU / 4.0 + 0.5)).abs() < 1e-6);
    }

    #[test]
    fn zero_tilt_keeps_forward() {
        let rotation = tilt_rotation(0.0, 2.1);
        let direction = rotation * FORWARD;
        assert!((direction - FORWARD).length() < 1e-6);
    }

    #[test]
    fn pure_axis_tilts_deflect_by_tilt_angle() {
        let tilt = 0.3;
        // azimuth 0: tilt entirely about Y; azimuth π/2: entirely about X
        for azimuth in [0.0, std::f32::consts::FRAC_PI_2] {
            let direction = tilt_rotation(tilt, azimuth) * FORWARD;
            assert!((direction.angle_between(FORWARD) - tilt).abs() < 1e-5);
        }
    }

    #[test]
    fn tilted_ray_leans_toward_azimuth_direction() {
        // azimuth π/2 puts the whole tilt on the X axis; rotating forward
        // about X by a positive angle lifts the ray toward +Y.
        let direction = tilt_rotation(0.4, std::f32::consts::FRAC_PI_2) * FORWARD;
        assert!(direction.y > 0.0);
        assert!(direction.x.abs() < 1e-5);
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let mut a = UniformAngleSource::from_seed(42);
        let mut b = UniformAngleSource::from_seed(42);
        for _ in 0..16 {
            assert_eq!(a.next_offset(), b.next_offset());
        }
    }

    #[test]
    fn offsets_stay_in_range() {
        let mut source = UniformAngleSource::from_seed(7);
        for _ in 0..256 {
            let offset = source.next_offset();
            assert!((0.0..TAU).contains(&offset));
        }
    }

    #[test]
    fn entropy_sources_diverge() {
        let mut a = UniformAngleSource::from_entropy();
        let mut b = UniformAngleSource::from_entropy();
        let same = (0..8).all(|_| a.next_offset() == b.next_offset());
        assert!(!same);
    }

    #[test]
    fn forward_is_unit_length_after_tilt() {
        let direction = tilt_rotation(1.1, 0.8) * FORWARD;
        assert!((direction.length() - 1.0).abs() < 1e-5);
    }
}
