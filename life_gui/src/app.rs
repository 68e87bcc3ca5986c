// app.rs - Desktop session state and commands

use std::time::{Duration, Instant};

use egui::Color32;
use life::patterns::PATTERNS;
use life::{GridError, LifeConfig, Session, StepOutcome};
use tracing::{info, warn};

/// Window-side state: the simulation session plus what only the UI cares
/// about (colors, pacing, the pattern picker).
pub struct LifeApp {
    pub session: Session,
    pub config: LifeConfig,
    pub last_update: Instant,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    pub status: Option<String>,
}

impl LifeApp {
    pub fn new(config: LifeConfig) -> Result<Self, GridError> {
        let session = Session::new(config.height, config.width)?;
        info!(height = config.height, width = config.width, "starting session");
        Ok(Self {
            session,
            config,
            last_update: Instant::now(),
            live_color: Color32::BLACK,
            dead_color: Color32::WHITE,
            selected_pattern: 0,
            status: None,
        })
    }

    pub fn cell_size(&self) -> f32 {
        self.config.cell_size() as f32
    }

    /// Board extent in pixels, `[width, height]`.
    pub fn board_size(&self) -> [f32; 2] {
        let (height, width) = self.session.grid().dimensions();
        [width as f32 * self.cell_size(), height as f32 * self.cell_size()]
    }

    pub fn delay(&self) -> Duration {
        self.config.delay()
    }

    pub fn next_generation(&mut self) {
        let outcome = self.session.step();
        self.report(outcome);
    }

    pub fn randomize(&mut self) {
        self.session.randomize();
        self.status = None;
    }

    pub fn clear(&mut self) {
        self.session.clear();
        self.status = None;
    }

    pub fn toggle_running(&mut self) {
        if self.session.toggle_running() {
            self.last_update = Instant::now();
            self.status = None;
        }
    }

    pub fn apply_selected_pattern(&mut self) {
        let Some(pattern) = PATTERNS.get(self.selected_pattern) else {
            return;
        };
        match self.session.apply_pattern(pattern) {
            Ok(()) => self.status = None,
            Err(e) => {
                warn!(error = %e, "pattern rejected");
                self.status = Some(e.to_string());
            }
        }
    }

    /// One step of continuous play once the delay has elapsed.
    pub fn poll(&mut self, now: Instant) {
        if self.session.is_running() && now.duration_since(self.last_update) >= self.delay() {
            if let Some(outcome) = self.session.tick() {
                self.report(outcome);
            }
            self.last_update = now;
        }
    }

    /// Toggles the cell under a click at `(x, y)` pixels from the board's
    /// top-left corner. Clicks off the board are ignored.
    pub fn click(&mut self, x: f32, y: f32) {
        let (row, col) = pixel_to_cell(x, y, self.config.cell_size());
        match self.session.grid().position(row, col) {
            Ok((row, col)) => {
                if let Err(e) = self.session.toggle(row, col) {
                    warn!(error = %e, "toggle rejected");
                }
            }
            Err(e) => warn!(error = %e, "click outside the board"),
        }
    }

    fn report(&mut self, outcome: StepOutcome) {
        if outcome == StepOutcome::CycleDetected {
            self.status = Some(format!(
                "Stopped at generation {}: pattern repeats",
                self.session.generation()
            ));
        }
    }
}

/// Grid coordinates `(row, col)` under a pixel offset, by integer division
/// with the cell size. Negative offsets map to negative coordinates.
pub fn pixel_to_cell(x: f32, y: f32, cell_size: usize) -> (isize, isize) {
    let cell = cell_size.max(1) as isize;
    let row = (y.floor() as isize).div_euclid(cell);
    let col = (x.floor() as isize).div_euclid(cell);
    (row, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(height: usize, width: usize) -> LifeApp {
        let mut app = LifeApp::new(LifeConfig { height, width, delay_ms: 10 }).unwrap();
        app.clear();
        app
    }

    #[test]
    fn pixels_map_by_integer_division() {
        assert_eq!(pixel_to_cell(0.0, 0.0, 16), (0, 0));
        assert_eq!(pixel_to_cell(15.9, 16.0, 16), (1, 0));
        assert_eq!(pixel_to_cell(47.0, 3.0, 16), (0, 2));
        assert_eq!(pixel_to_cell(-0.5, 3.0, 16), (0, -1));
    }

    #[test]
    fn click_toggles_the_cell_under_the_pointer() {
        let mut app = app(30, 30);
        app.click(40.0, 20.0);
        assert_eq!(app.session.grid().get(1, 2), Ok(true));
        app.click(41.0, 21.0);
        assert_eq!(app.session.grid().get(1, 2), Ok(false));
    }

    #[test]
    fn click_outside_the_board_is_ignored() {
        let mut app = app(10, 30);
        let [w, h] = app.board_size();
        app.click(w + 1.0, 5.0);
        app.click(5.0, h + 1.0);
        app.click(-3.0, 5.0);
        assert!(app.session.grid().is_extinct());
    }

    #[test]
    fn poll_waits_for_the_delay() {
        let mut app = app(5, 5);
        app.toggle_running();
        let start = app.last_update;
        app.poll(start);
        assert_eq!(app.session.generation(), 0);
        app.poll(start + Duration::from_millis(10));
        assert_eq!(app.session.generation(), 1);
    }

    #[test]
    fn oversized_pattern_sets_status() {
        let mut app = app(5, 5);
        app.selected_pattern = PATTERNS.iter().position(|p| p.name == "Pulsar").unwrap();
        app.apply_selected_pattern();
        assert!(app.status.is_some());
    }
}
