//! `softengine [MODEL] [CONFIG.ron]`
//!
//! Renders MODEL (Babylon JSON or OBJ, defaults to a cube) with the settings
//! in CONFIG. With the `window` feature the frames are shown in an SDL2
//! window; otherwise `frames` frames are rendered and the last one is
//! written to `output` as a PNG.

use std::env;
use std::error::Error;

use log::info;
use softengine::loader;
use softengine::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let model_path = args.next();
    let config = match args.next() {
        Some(path) => RenderConfig::from_file(path)?,
        None => RenderConfig::default(),
    };

    let meshes = match model_path {
        Some(path) => {
            let meshes = loader::load_file(&path)?;
            info!("loaded {} meshes from {}", meshes.len(), path);
            meshes
        }
        None => vec![Mesh::cube()],
    };

    run(&config, meshes)
}

#[cfg(not(feature = "window"))]
fn run(config: &RenderConfig, meshes: Vec<Mesh>) -> Result<(), Box<dyn Error>> {
    let mut ctx = RenderContext::from_config(config, ImageSurface::new(), meshes);
    for _ in 0..config.frames.max(1) {
        ctx.render_frame()?;
    }
    ctx.device.surface().save_png(&config.output)?;
    info!(
        "wrote frame {} to {}",
        ctx.device.frames_presented(),
        config.output.display()
    );
    Ok(())
}

#[cfg(feature = "window")]
fn run(config: &RenderConfig, meshes: Vec<Mesh>) -> Result<(), Box<dyn Error>> {
    let window = Window::new("softengine", config.width, config.height)?;
    let mut ctx = RenderContext::from_config(config, window, meshes);
    let mut limiter = FrameLimiter::new(ctx.device.surface());

    loop {
        if ctx.device.surface_mut().poll_events() == WindowEvent::Quit {
            break;
        }
        limiter.wait_and_get_delta(ctx.device.surface());
        ctx.render_frame()?;
    }
    info!("closed after {} frames", ctx.device.frames_presented());
    Ok(())
}
