// main.rs - Conway's Game of Life desktop front end
//
// The simulation core lives in `life_core`; this binary paints it with egui,
// turns clicks into cell toggles and drives ticks from a tokio timer.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use eframe::egui;
use life_core::{LifeConfig, SimulationController};

mod app;
mod driver;
mod layout;
mod ui;

use app::LifeApp;

/// Conway's Game of Life
#[derive(Parser, Debug)]
#[command(name = "life", version, about)]
struct Cli {
    /// YAML configuration file (defaults to life.yaml or config.yaml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Grid columns
    #[arg(long)]
    cols: Option<usize>,

    /// Milliseconds between generations
    #[arg(short, long)]
    interval_ms: Option<u64>,

    /// Write the default configuration to this path and exit
    #[arg(long, value_name = "PATH")]
    init: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Some(path) = &cli.init {
        LifeConfig::default().save(path)?;
        log::info!("Default configuration written to {}", path.display());
        return Ok(());
    }

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(rows) = cli.rows {
        config.grid.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.grid.cols = cols;
    }
    if let Some(interval) = cli.interval_ms {
        config.simulation.tick_interval_ms = interval;
    }
    config.validate()?;

    log::info!("Grid size: {}x{}", config.grid.rows, config.grid.cols);
    log::info!("Tick interval: {} ms", config.simulation.tick_interval_ms);

    let controller = SimulationController::new(config.grid.rows, config.grid.cols)?;
    let runtime = tokio::runtime::Runtime::new()?;

    let pitch = config.display.cell_size + config.display.spacing;
    let width = (pitch * config.grid.cols as f32).max(640.0) + 40.0;
    let height = pitch * config.grid.rows as f32 + 220.0;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([width, height]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            let waker = Arc::new(move || ctx.request_repaint());
            Box::new(LifeApp::new(controller, config, runtime, waker))
        }),
    )
    .map_err(|e| format!("window error: {e}"))?;

    Ok(())
}

/// Load configuration from an explicit path, or from the usual locations,
/// or fall back to defaults.
fn load_config(explicit: Option<&Path>) -> life_core::Result<LifeConfig> {
    if let Some(path) = explicit {
        let config = LifeConfig::from_file(path)?;
        log::info!("Loaded config from: {}", path.display());
        return Ok(config);
    }

    for path in ["life.yaml", "config.yaml"] {
        match LifeConfig::from_file(path) {
            Ok(config) => {
                log::info!("Loaded config from: {}", path);
                return Ok(config);
            }
            Err(e) => log::debug!("Skipping {}: {}", path, e),
        }
    }

    log::info!("Using default configuration");
    Ok(LifeConfig::default())
}
