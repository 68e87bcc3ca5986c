// config.rs - Command-line configuration shared by the shells

use std::time::Duration;

use clap::Args;

/// Pixel budget for the widest side of the board; the cell size is derived
/// from it and the grid width.
pub const CANVAS_PIXELS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct LifeConfig {
    /// Number of rows.
    #[arg(long, default_value_t = 30, value_parser = parse_dimension)]
    pub height: usize,

    /// Number of columns.
    #[arg(long, default_value_t = 30, value_parser = parse_dimension)]
    pub width: usize,

    /// Pause between generations during continuous play, in milliseconds.
    #[arg(long = "delay-ms", default_value_t = 10)]
    pub delay_ms: u64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            height: 30,
            width: 30,
            delay_ms: 10,
        }
    }
}

impl LifeConfig {
    /// Side length of one cell in pixels, never below 1.
    pub fn cell_size(&self) -> usize {
        CANVAS_PIXELS.checked_div(self.width).unwrap_or(1).max(1)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

fn parse_dimension(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
