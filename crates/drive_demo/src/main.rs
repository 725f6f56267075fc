//! Drive demo
//!
//! Headless host loop: steps the scripted physics, then updates the vehicle
//! coordinator once per frame and logs where the chase camera is.
//!
//! ```text
//! drive_demo [config.toml|config.ron] [frames]
//! ```

mod assets;
mod track;

use assets::VehicleModelLoader;
use track::TrackPhysics;
use vehicle_rig::foundation::logging;
use vehicle_rig::prelude::*;

const FIXED_DT: f32 = 1.0 / 60.0;
const DEFAULT_FRAMES: u32 = 600;
const MODEL_LOAD_FRAMES: u32 = 15;
const LOG_INTERVAL: u32 = 60;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match args.first() {
        Some(path) => RigConfig::load_from_file(path)?,
        None => RigConfig::default(),
    };
    let frames = args
        .get(1)
        .map(|arg| arg.parse::<u32>())
        .transpose()?
        .unwrap_or(DEFAULT_FRAMES);

    for param in CameraParams::tunables() {
        log::debug!(
            "{:>14} = {:>6.2}  [{}, {}] step {}",
            param.name,
            (param.get)(&config.camera),
            param.min,
            param.max,
            param.step
        );
    }

    let mut scene = SceneGraph::new();
    let camera = scene.create_node("main_camera", NodeKind::Camera);
    let mut physics = TrackPhysics::new(30.0, 12.0, 7);
    let mut loader = VehicleModelLoader::new(MODEL_LOAD_FRAMES);

    let mut vehicle =
        VehicleCoordinator::new(&mut scene, camera, VehicleMeshes::default(), config.camera)?;

    for frame in 0..frames {
        physics.step(FIXED_DT);

        if let Some(meshes) = loader.poll(&mut scene) {
            for (part, node) in meshes {
                vehicle.bind_mesh(part, node);
            }
        }

        // Pull the camera in closer halfway through, as a tuning panel would
        if frame == frames / 2 {
            vehicle.set_camera_param(&mut scene, "z", 2.5)?;
        }

        vehicle.update(&mut scene, physics.bodies());

        if frame % LOG_INTERVAL == 0 {
            let rig = vehicle.rig();
            log::info!(
                "frame {frame:>4} {:?}: camera {:?} view {:?} target {:?}",
                rig.state(),
                scene.position(camera).map(|p| [p.x, p.y, p.z]),
                [rig.view().x, rig.view().y, rig.view().z],
                [rig.look_at_target().x, rig.look_at_target().y, rig.look_at_target().z],
            );
        }
    }

    vehicle.dispose(&mut scene)?;
    log::info!("Finished {frames} frames, {} scene nodes remain", scene.len());
    Ok(())
}
