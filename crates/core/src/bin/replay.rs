use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use manlab_core::Replay;

/// Replays a recorded input file headlessly and prints a per-frame CSV trace.
#[derive(Parser, Debug)]
#[command(name = "replay", version, about)]
struct Cli {
    /// Replay JSON: { "params"?, "layout"?, "inputs": [bits, ...] }
    path: PathBuf,

    /// Only print the final trace fingerprint
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let raw = fs::read_to_string(&cli.path)
        .with_context(|| format!("failed to read {}", cli.path.display()))?;
    let replay = Replay::from_json(&raw)
        .with_context(|| format!("failed to parse {}", cli.path.display()))?;

    log::info!("replaying {} frames from {}", replay.inputs.len(), cli.path.display());

    if !cli.summary {
        println!("frame,buttons,x,y,vx,vy,landed,bonked,walled");
    }
    let trace = replay.run(|f| {
        if cli.summary {
            return;
        }
        println!(
            "{},{},{},{},{},{},{},{},{}",
            f.index,
            f.buttons.bits(),
            f.actor.x,
            f.actor.y,
            f.actor.vx,
            f.actor.vy,
            f.events.landed,
            f.events.bonked,
            f.events.walled
        );
    })?;

    println!(
        "# frames={} landed={} bonked={} walled={} hash={:#018x}",
        trace.frames, trace.landed, trace.bonked, trace.walled, trace.hash
    );
    Ok(())
}
