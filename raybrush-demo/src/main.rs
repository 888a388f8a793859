mod scene;

use anyhow::Result;
use raybrush::math::{Pose, Vec3};
use raybrush::{RayEmitterDesc, RayPainter, UniformAngleSource};
use scene::{LoggingSpawner, WallCaster};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let desc = RayEmitterDesc {
        rays_per_layer: 12,
        num_layers: 4,
        max_angle_from_center: 0.5,
        max_distance: 100.0,
    };

    log::info!(
        "Emitter: {} layers x {} rays, outer cone angle {:.2} rad",
        desc.num_layers,
        desc.rays_per_layer,
        desc.max_angle_from_center
    );

    let mut painter = RayPainter::new(
        desc,
        WallCaster::new(-10.0),
        LoggingSpawner::default(),
        UniformAngleSource::from_entropy(),
    )?;
    painter.set_pose(Pose::from_position(Vec3::new(0.0, 1.5, 0.0)));

    // Host frame loop: re-arm a paint pass every few frames. Each pass is
    // single-shot; idle frames tick through without doing anything.
    for frame in 0..12 {
        if frame % 4 == 0 {
            painter.set_painting(true);
            log::info!("frame {}: paint armed", frame);
        }

        if let Some(result) = painter.tick() {
            log::info!(
                "frame {}: placed {} decals, {} layers missed",
                frame,
                result.decals.len(),
                result.layers_missed
            );
        }
    }

    log::info!("done");
    Ok(())
}
