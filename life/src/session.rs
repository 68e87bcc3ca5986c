// session.rs - Interactive simulation state owned by a presentation shell

use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::{debug, info};

use crate::engine;
use crate::error::GridError;
use crate::grid::Grid;
use crate::patterns::{self, Pattern};

/// How many recent generations are remembered for cycle detection.
const HISTORY_LEN: usize = 10;

/// Result of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced,
    /// The new generation repeats one of the last few; the session was stopped.
    CycleDetected,
}

/// The current grid plus the run flag, generation counter and the hashes of
/// recent generations.
///
/// Every command replaces or edits the grid in place; there is no state
/// outside this struct.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    running: bool,
    generation: u64,
    stop_on_cycle: bool,
    history: VecDeque<u64>,
}

impl Session {
    /// Stopped session on a random grid.
    pub fn new(height: usize, width: usize) -> Result<Self, GridError> {
        Ok(Self::from_grid(Grid::random(height, width)?))
    }

    pub fn from_grid(grid: Grid) -> Self {
        let mut session = Self {
            grid,
            running: false,
            generation: 0,
            stop_on_cycle: false,
            history: VecDeque::with_capacity(HISTORY_LEN),
        };
        session.reset_history();
        session
    }

    /// Stop automatically when a generation repeats one of the last
    /// ten. Still lifes and short-period oscillators end a run this way.
    pub fn with_stop_on_cycle(mut self, enabled: bool) -> Self {
        self.stop_on_cycle = enabled;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn stop_on_cycle(&self) -> bool {
        self.stop_on_cycle
    }

    pub fn set_stop_on_cycle(&mut self, enabled: bool) {
        self.stop_on_cycle = enabled;
    }

    /// Advances one generation, replacing the grid wholesale.
    pub fn step(&mut self) -> StepOutcome {
        self.grid = engine::next(&self.grid);
        self.generation += 1;
        debug!(
            generation = self.generation,
            live = self.grid.live_count(),
            "step"
        );

        if self.check_for_cycle() && self.stop_on_cycle {
            info!(generation = self.generation, "cycle detected, stopping");
            self.running = false;
            return StepOutcome::CycleDetected;
        }
        StepOutcome::Advanced
    }

    /// Steps only while running.
    pub fn tick(&mut self) -> Option<StepOutcome> {
        self.running.then(|| self.step())
    }

    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    pub fn randomize_with<R: rand::Rng>(&mut self, rng: &mut R) {
        self.grid.randomize_with(rng);
        info!(live = self.grid.live_count(), "randomized grid");
        self.restart();
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        info!("cleared grid");
        self.restart();
    }

    /// Flips one cell. Coordinates are checked by the grid; a rejected toggle
    /// leaves the session unchanged.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.grid.toggle(row, col)?;
        self.reset_history();
        Ok(())
    }

    /// Clears the grid and stamps `pattern` in its center.
    pub fn apply_pattern(&mut self, pattern: &Pattern) -> Result<(), GridError> {
        let mut grid = self.grid.clone();
        grid.clear();
        patterns::place_centered(&mut grid, pattern)?;
        self.grid = grid;
        info!(pattern = pattern.name, "applied pattern");
        self.restart();
        Ok(())
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Flips the run flag and returns the new value.
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        info!(running = self.running, "toggled run state");
        self.running
    }

    fn restart(&mut self) {
        self.generation = 0;
        self.reset_history();
    }

    fn reset_history(&mut self) {
        self.history.clear();
        self.history.push_back(hash_grid(&self.grid));
    }

    /// Records the current grid; true if it was already among the recent ones.
    fn check_for_cycle(&mut self) -> bool {
        let current = hash_grid(&self.grid);
        let seen = self.history.contains(&current);
        if self.history.len() == HISTORY_LEN {
            self.history.pop_front();
        }
        self.history.push_back(current);
        seen
    }
}

fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn blinker() -> Grid {
        Grid::with_live_cells(5, 5, &[(2, 1), (2, 2), (2, 3)]).unwrap()
    }

    #[test]
    fn new_session_is_stopped() {
        let session = Session::new(8, 12).unwrap();
        assert!(!session.is_running());
        assert_eq!(session.generation(), 0);
        assert_eq!(session.grid().dimensions(), (8, 12));
    }

    #[test]
    fn tick_only_steps_while_running() {
        let mut session = Session::from_grid(blinker());
        assert_eq!(session.tick(), None);
        assert_eq!(session.generation(), 0);

        session.start();
        assert_eq!(session.tick(), Some(StepOutcome::Advanced));
        assert_eq!(session.generation(), 1);
        assert_eq!(session.grid(), &engine::next(&blinker()));
    }

    #[test]
    fn toggle_running_flips() {
        let mut session = Session::from_grid(blinker());
        assert!(session.toggle_running());
        assert!(!session.toggle_running());
    }

    #[test]
    fn oscillator_stops_when_cycle_detection_is_on() {
        let mut session = Session::from_grid(blinker()).with_stop_on_cycle(true);
        session.start();
        assert_eq!(session.step(), StepOutcome::Advanced);
        assert_eq!(session.step(), StepOutcome::CycleDetected);
        assert!(!session.is_running());
    }

    #[test]
    fn oscillator_keeps_running_by_default() {
        let mut session = Session::from_grid(blinker());
        session.start();
        for _ in 0..6 {
            assert_eq!(session.step(), StepOutcome::Advanced);
        }
        assert!(session.is_running());
        assert_eq!(session.generation(), 6);
    }

    #[test]
    fn clear_resets_generation() {
        let mut session = Session::from_grid(blinker());
        session.step();
        session.clear();
        assert_eq!(session.generation(), 0);
        assert!(session.grid().is_extinct());
    }

    #[test]
    fn randomize_keeps_dimensions() {
        let mut session = Session::from_grid(Grid::empty(6, 9).unwrap());
        session.randomize_with(&mut StdRng::seed_from_u64(3));
        assert_eq!(session.grid().dimensions(), (6, 9));
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn rejected_toggle_changes_nothing() {
        let mut session = Session::from_grid(blinker());
        assert!(session.toggle(5, 0).is_err());
        assert_eq!(session.grid(), &blinker());
        session.toggle(0, 0).unwrap();
        assert_eq!(session.grid().get(0, 0), Ok(true));
    }

    #[test]
    fn apply_pattern_replaces_grid() {
        let mut session = Session::from_grid(Grid::empty(10, 10).unwrap());
        session.toggle(0, 0).unwrap();
        session.apply_pattern(patterns::find("Glider").unwrap()).unwrap();
        assert_eq!(session.grid().live_count(), 5);
        assert_eq!(session.grid().get(0, 0), Ok(false));
    }

    #[test]
    fn failed_pattern_keeps_grid() {
        let mut session = Session::from_grid(blinker());
        assert!(session.apply_pattern(patterns::find("Pulsar").unwrap()).is_err());
        assert_eq!(session.grid(), &blinker());
    }
}
