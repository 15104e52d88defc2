use anyhow::{Context, Result};
use clap::Parser;

use taxi_sim::simulation::{
    run_session, FrameClock, ScriptedInput, SessionConfig, SimWorld, TerminalRenderer,
};

#[derive(Parser)]
#[command(name = "taxi_sim")]
#[command(about = "Top-down taxi game with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Maximum number of frames to run in headless mode
    #[arg(long, default_value = "600")]
    ticks: u64,

    /// Seed for customer placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Headless drive script, e.g. "down*20,right*30"
    #[arg(long, default_value = "down*20,right*2,right*8,down*10,left*4")]
    script: String,

    /// Fewest customers to place
    #[arg(long, default_value = "1")]
    min_customers: usize,

    /// Most customers to place
    #[arg(long, default_value = "10")]
    max_customers: usize,

    /// Frame rate of the update loop
    #[arg(long, default_value = "60")]
    fps: u32,

    /// Run headless frames as fast as possible instead of at the frame rate
    #[arg(long)]
    unpaced: bool,

    /// Print the terminal map every N frames in headless mode (0 disables)
    #[arg(long, default_value = "30")]
    map_every: usize,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            fps: self.fps,
            customer_range: self.min_customers..=self.max_customers,
            ..SessionConfig::default()
        }
    }

    fn build_world(&self) -> Result<SimWorld> {
        let config = self.session_config();
        match self.seed {
            Some(seed) => SimWorld::new_with_seed(config, seed),
            None => SimWorld::new(config),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.ui {
        run_ui(&cli)
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        run_headless(&cli)
    }
}

/// Run the game in headless mode (no graphics), driving the taxi from a script
fn run_headless(cli: &Cli) -> Result<()> {
    println!("Running taxi session in headless mode...");
    println!("Script: {}", cli.script);
    println!();

    let mut input: ScriptedInput = cli.script.parse().context("Invalid drive script")?;
    let mut world = cli.build_world()?;

    println!("Initial state:");
    world.print_summary();
    println!();

    let mut renderer = TerminalRenderer::new(
        world.config.map_width,
        world.config.map_height,
        20,
        cli.map_every,
    );
    let mut clock = if cli.unpaced {
        FrameClock::unpaced()
    } else {
        FrameClock::new(world.config.fps)
    };

    run_session(&mut world, &mut input, &mut renderer, &mut clock, Some(cli.ticks))?;

    println!();
    println!("=== SESSION COMPLETE ===");
    world.print_summary();
    Ok(())
}

#[cfg(not(feature = "ui"))]
fn run_ui(_cli: &Cli) -> Result<()> {
    anyhow::bail!("UI feature is not enabled. Rebuild with --features ui")
}

#[cfg(feature = "ui")]
fn run_ui(cli: &Cli) -> Result<()> {
    run_with_ui(cli.build_world()?);
    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui(world: SimWorld) {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;

    println!("Starting Taxi UI...");
    println!();
    println!("Controls:");
    println!("  Arrows / W/A/S/D - Drive");
    println!("  Click            - Log map position");
    println!("  ESC              - Exit");
    println!();

    let (width, height) = (world.config.map_width as u32, world.config.map_height as u32);

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,taxi_sim=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "TAXI".into(),
                        resolution: (width, height).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(taxi_sim::ui::TaxiUIPlugin::new(world))
        .run();
}
