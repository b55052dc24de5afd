//! Command line entry point running the stair-slipping demo headlessly.

use std::path::PathBuf;

use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;
use log::info;
use stumble::{init_logging, Health, Layout, Player, SlipSchedule, StumblePlugin, WorldClock};

/// Headless stair-slipping demo
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON layout to load instead of the built-in staircase
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Number of world ticks to simulate
    #[arg(short, long, default_value_t = 20)]
    ticks: u64,
}

fn report(app: &mut App) {
    let world = app.world_mut();
    let tick = world.resource::<WorldClock>().tick();
    let slipping = world.resource::<SlipSchedule>().len();
    info!("stopped at tick {tick} with {slipping} players still slipping");
    let mut players = world.query::<(&Player, &Transform, &Health)>();
    for (player, transform, health) in players.iter(world) {
        info!(
            "{} at {} with {}/{} health",
            player.name, transform.translation, health.current, health.max
        );
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let layout = match &args.layout {
        Some(path) => Layout::from_path(path)
            .with_context(|| format!("loading layout {}", path.display()))?,
        None => Layout::demo_staircase(),
    };

    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(StumblePlugin);
    layout
        .install(app.world_mut())
        .context("installing layout")?;

    for _ in 0..args.ticks {
        app.update();
    }
    report(&mut app);
    Ok(())
}
