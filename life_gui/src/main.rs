// main.rs - Desktop front end for Conway's Game of Life

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;
use life::LifeConfig;
use tracing_subscriber::EnvFilter;

mod app;
mod ui;

use app::LifeApp;

/// Height reserved below the board for the control rows.
const CONTROLS_HEIGHT: f32 = 140.0;

/// Conway's Game of Life in a window.
#[derive(Parser)]
#[command(name = "life_gui", about = "Conway's Game of Life with a desktop UI")]
struct Args {
    #[command(flatten)]
    config: LifeConfig,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let app = LifeApp::new(args.config).context("failed to create the starting grid")?;
    let [board_w, board_h] = app.board_size();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_w.max(560.0) + 20.0, board_h + CONTROLS_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow!("window closed with an error: {e}"))
}
