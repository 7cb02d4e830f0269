//! Simple path tracer example.
//!
//! Renders the hollow-glass scene at a small resolution and saves to PPM.

use lumen_renderer::{render, scene_rng, RenderConfig, RenderError, SceneKind};

fn main() -> Result<(), RenderError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let kind = SceneKind::Glass;
    let config = RenderConfig::default()
        .with_resolution(400, 200)
        .with_samples(50)
        .with_seed(42);

    let world = kind.build(&mut scene_rng(config.seed))?;
    log::info!("Created {} objects", world.len());

    let camera = kind.camera(config.aspect_ratio())?;
    let image = render(&camera, &world, &config)?;

    image.save("output.ppm")
}
