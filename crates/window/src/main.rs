//! Desktop frontend: one window, keyboard polling and a frame-locked loop
//! around the core step.

mod canvas;
mod config;
mod input;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use macroquad::miniquad::conf::Platform;
use macroquad::prelude::{next_frame, prevent_quit, Conf};
use macroquad::Window;

use manlab_core::{apply_input, draw_world, step, Params, World};

use canvas::Screen;
use config::{GameConfig, WindowConfig};

#[derive(Parser, Debug)]
#[command(name = "manlab", version, about = "Minimal platformer")]
struct Cli {
    /// Path to a TOML config (defaults to $MANLAB_CONFIG or ./manlab.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn window_conf(w: &WindowConfig) -> Conf {
    Conf {
        window_title: w.title.clone(),
        window_width: w.width,
        window_height: w.height,
        window_resizable: false,
        platform: Platform {
            swap_interval: Some(if w.vsync { 1 } else { 0 }),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Poll input, draw the previous step's state, then advance. Physics is tied
/// to the presented frame rate.
async fn run(params: Params, mut world: World) {
    prevent_quit();
    let mut screen = Screen;

    loop {
        let frame = input::poll();
        if frame.dump_velocity {
            log::info!("vx: {:.2} vy: {:.2}", world.actor.vx, world.actor.vy);
        }
        if frame.quit {
            log::info!("quit requested");
            break;
        }

        apply_input(&params, &mut world.actor, frame.buttons);
        draw_world(&world, &mut screen);
        step(&params, &mut world);

        next_frame().await;
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?;
    let world = World::load(&config.layout).context("failed to build the level")?;

    log::info!(
        "starting: {} platforms, {}x{} window",
        world.platforms().len(),
        config.window.width,
        config.window.height
    );

    Window::from_config(window_conf(&config.window), run(config.params, world));
    Ok(())
}
