use crate::error::{RayBrushError, Result};

/// Configuration descriptor for a ray emitter
///
/// Fixed at construction; the painter never resizes its ray grid afterwards.
#[derive(Debug, Clone)]
pub struct RayEmitterDesc {
    /// Number of rays in each angular layer
    pub rays_per_layer: usize,
    /// Number of concentric layers
    pub num_layers: usize,
    /// Cone half-angle of the outermost layer, in radians.
    /// Inner layers interpolate linearly; the innermost layer sits at
    /// `max_angle_from_center / num_layers`, not at zero.
    pub max_angle_from_center: f32,
    /// Maximum raycast distance passed to the host's caster
    pub max_distance: f32,
}

impl Default for RayEmitterDesc {
    fn default() -> Self {
        Self {
            rays_per_layer: 8,
            num_layers: 3,
            max_angle_from_center: 0.35,
            max_distance: f32::INFINITY,
        }
    }
}

impl RayEmitterDesc {
    /// Checks the descriptor for degenerate values.
    ///
    /// A zero `max_angle_from_center` is allowed (all rays point straight
    /// along the emitter's forward axis); negative or non-finite angles,
    /// zero counts, and non-positive distances are rejected.
    pub fn validate(&self) -> Result<()> {
        if self.rays_per_layer == 0 {
            return Err(RayBrushError::Configuration(
                "rays_per_layer must be positive".into(),
            ));
        }
        if self.num_layers == 0 {
            return Err(RayBrushError::Configuration(
                "num_layers must be positive".into(),
            ));
        }
        if !self.max_angle_from_center.is_finite() || self.max_angle_from_center < 0.0 {
            return Err(RayBrushError::Configuration(format!(
                "max_angle_from_center must be finite and non-negative, got {}",
                self.max_angle_from_center
            )));
        }
        if !(self.max_distance > 0.0) {
            return Err(RayBrushError::Configuration(format!(
                "max_distance must be positive, got {}",
                self.max_distance
            )));
        }
        Ok(())
    }

    /// Cone half-angle of layer `layer`, in radians.
    pub fn layer_angle(&self, layer: usize) -> f32 {
        self.max_angle_from_center * (layer + 1) as f32 / self.num_layers as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_desc_is_valid() {
        assert!(RayEmitterDesc::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_rays_per_layer() {
        let desc = RayEmitterDesc {
            rays_per_layer: 0,
            ..Default::default()
        };
        assert!(desc.validate().is_err());
    }

    #[test]
    fn rejects_zero_layers() {
        let desc = RayEmitterDesc {
            num_layers: 0,
            ..Default::default()
        };
        assert!(desc.validate().is_err());
    }

    #[test]
    fn rejects_negative_and_nan_angles() {
        let negative = RayEmitterDesc {
            max_angle_from_center: -0.1,
            ..Default::default()
        };
        assert!(negative.validate().is_err());

        let nan = RayEmitterDesc {
            max_angle_from_center: f32::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn accepts_zero_angle() {
        let desc = RayEmitterDesc {
            max_angle_from_center: 0.0,
            ..Default::default()
        };
        assert!(desc.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_distance() {
        let desc = RayEmitterDesc {
            max_distance: 0.0,
            ..Default::default()
        };
        assert!(desc.validate().is_err());
    }

    #[test]
    fn layer_angles_interpolate_to_max() {
        let desc = RayEmitterDesc {
            num_layers: 4,
            max_angle_from_center: 0.8,
            ..Default::default()
        };
        assert!((desc.layer_angle(0) - 0.2).abs() < 1e-6);
        assert!((desc.layer_angle(1) - 0.4).abs() < 1e-6);
        assert!((desc.layer_angle(3) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn layer_angles_strictly_increase() {
        let desc = RayEmitterDesc {
            num_layers: 6,
            max_angle_from_center: 1.2,
            ..Default::default()
        };
        for layer in 1..desc.num_layers {
            assert!(desc.layer_angle(layer) > desc.layer_angle(layer - 1));
        }
    }
}
