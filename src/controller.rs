use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::error::{LifeError, Result};
use crate::intent_log::{Intent, IntentLog};
use crate::patterns::{self, Preset};
use crate::ports::{RenderPort, TimerId, TimerPort};
use crate::rules;
use crate::Grid;

/// Default probability of a cell being alive after `randomize`
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.3;

/// Grid, step counter and running flag, owned by the controller
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationState {
    pub grid: Grid,
    pub step_count: u64,
    pub running: bool,
}

/// Cell size in pixels and delay between automatic steps
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunConfig {
    cell_size: u32,
    tick_interval_ms: u32,
}

impl RunConfig {
    pub fn new(cell_size: u32, tick_interval_ms: u32) -> Result<Self> {
        if cell_size == 0 {
            return Err(LifeError::InvalidConfig("cell size must be positive".to_string()));
        }
        if tick_interval_ms == 0 {
            return Err(LifeError::InvalidConfig("tick interval must be positive".to_string()));
        }
        Ok(RunConfig { cell_size, tick_interval_ms })
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

/// Grid dimensions (rows, cols) that fit a surface at the given cell size
pub fn grid_dimensions(surface_width: u32, surface_height: u32, cell_size: u32) -> Result<(i32, i32)> {
    if cell_size == 0 {
        return Err(LifeError::InvalidConfig("cell size must be positive".to_string()));
    }
    let rows = (surface_height / cell_size) as i32;
    let cols = (surface_width / cell_size) as i32;
    if rows == 0 || cols == 0 {
        return Err(LifeError::InvalidConfig(format!(
            "cell size {} leaves no room on a {}x{} surface",
            cell_size, surface_width, surface_height
        )));
    }
    Ok((rows, cols))
}

/// Idle/Running state machine that turns user intents into grid updates.
///
/// At most one timer registration is live at a time: `start` is a no-op
/// while running, and ticks from any id other than the live one are dropped.
pub struct RunController<T: TimerPort, R: RenderPort> {
    state: SimulationState,
    config: RunConfig,
    surface_width: u32,
    surface_height: u32,
    alive_probability: f64,
    timer: T,
    renderer: R,
    active_timer: Option<TimerId>,
    rng: StdRng,
    intent_log: Option<IntentLog>,
}

impl<T: TimerPort, R: RenderPort> RunController<T, R> {
    /// Create an idle controller with an empty grid sized to the surface
    pub fn new(
        surface_width: u32,
        surface_height: u32,
        config: RunConfig,
        timer: T,
        renderer: R,
    ) -> Result<Self> {
        let (rows, cols) = grid_dimensions(surface_width, surface_height, config.cell_size)?;
        let mut controller = RunController {
            state: SimulationState {
                grid: Grid::new(rows, cols),
                step_count: 0,
                running: false,
            },
            config,
            surface_width,
            surface_height,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
            timer,
            renderer,
            active_timer: None,
            rng: StdRng::from_entropy(),
            intent_log: None,
        };
        info!(rows, cols, cell_size = config.cell_size, "controller ready");
        controller.redraw();
        Ok(controller)
    }

    /// Use a deterministic random source for `randomize`
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_alive_probability(mut self, alive_probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&alive_probability) {
            return Err(LifeError::InvalidConfig(format!(
                "alive probability {} is outside [0, 1]",
                alive_probability
            )));
        }
        self.alive_probability = alive_probability;
        Ok(self)
    }

    /// Record every dispatched intent
    pub fn with_intent_log(mut self, log: IntentLog) -> Self {
        self.intent_log = Some(log);
        self
    }

    // --- state machine ---

    /// Idle -> Running. No-op when already running.
    pub fn start(&mut self) {
        if self.state.running {
            debug!("start ignored, already running");
            return;
        }
        let id = self.timer.start(self.config.tick_interval_ms);
        self.active_timer = Some(id);
        self.state.running = true;
        info!(interval_ms = self.config.tick_interval_ms, "running");
    }

    /// Running -> Idle. No-op when idle.
    pub fn stop(&mut self) {
        if !self.state.running {
            return;
        }
        // Clear the handle first so a tick already queued for it is stale
        if let Some(id) = self.active_timer.take() {
            self.timer.cancel(id);
        }
        self.state.running = false;
        info!(step_count = self.state.step_count, "stopped");
    }

    pub fn toggle_running(&mut self) {
        if self.state.running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Handle one timer firing. Returns true if a step was taken.
    pub fn on_tick(&mut self, id: TimerId) -> bool {
        if self.active_timer != Some(id) {
            debug!(?id, "stale tick dropped");
            return false;
        }
        self.step();
        true
    }

    /// One synchronous step, only while idle. Returns true if a step was taken.
    pub fn single_step(&mut self) -> bool {
        if self.state.running {
            debug!("single step ignored while running");
            return false;
        }
        self.step();
        true
    }

    /// Stop if running, clear the grid and zero the step counter
    pub fn reset(&mut self) {
        self.stop();
        self.state.grid = Grid::new(self.rows(), self.cols());
        self.state.step_count = 0;
        info!("reset");
        self.redraw();
    }

    /// Replace the grid with a random fill
    pub fn randomize(&mut self) {
        self.state.grid = Grid::random(self.rows(), self.cols(), self.alive_probability, &mut self.rng);
        debug!(live = self.state.grid.live_count(), "randomized");
        self.redraw();
    }

    /// Overlay a preset centered on the grid; the grid is unchanged on error
    pub fn seed_pattern(&mut self, preset: Preset) -> Result<()> {
        let cells = preset.cells(self.rows(), self.cols())?;
        self.state.grid = patterns::seed(&self.state.grid, &cells)?;
        debug!(preset = preset.name(), "seeded");
        self.redraw();
        Ok(())
    }

    /// Set the tick interval; a running timer is cancelled and restarted
    pub fn change_speed(&mut self, interval_ms: u32) -> Result<()> {
        self.config = RunConfig::new(self.config.cell_size, interval_ms)?;
        if self.state.running {
            if let Some(id) = self.active_timer.take() {
                self.timer.cancel(id);
            }
            self.active_timer = Some(self.timer.start(interval_ms));
        }
        debug!(interval_ms, "speed changed");
        Ok(())
    }

    /// Set the cell size, discarding the grid for an empty one of the new
    /// dimensions. A running timer keeps running.
    pub fn change_zoom(&mut self, cell_size: u32) -> Result<()> {
        let (rows, cols) = grid_dimensions(self.surface_width, self.surface_height, cell_size)?;
        self.config = RunConfig::new(cell_size, self.config.tick_interval_ms)?;
        self.state.grid = Grid::new(rows, cols);
        debug!(cell_size, rows, cols, "zoom changed");
        self.redraw();
        Ok(())
    }

    /// Flip one cell, in either state
    pub fn toggle_cell(&mut self, row: i32, col: i32) -> Result<()> {
        self.state.grid.toggle(row, col)?;
        self.redraw();
        Ok(())
    }

    /// Map a surface-relative pointer position to a cell and toggle it
    pub fn click(&mut self, x: f32, y: f32) -> Result<()> {
        let (row, col) = self.cell_at(x, y);
        self.toggle_cell(row, col)
    }

    /// (row, col) under surface pixel (x, y); may be outside the grid
    pub fn cell_at(&self, x: f32, y: f32) -> (i32, i32) {
        let size = self.config.cell_size as f32;
        ((y / size).floor() as i32, (x / size).floor() as i32)
    }

    /// Apply an intent. Rejected intents are logged and leave state unchanged.
    pub fn dispatch(&mut self, intent: Intent) {
        let applied = match &intent {
            Intent::StartStop => {
                self.toggle_running();
                true
            }
            Intent::Step => self.single_step(),
            Intent::Reset => {
                self.reset();
                true
            }
            Intent::Randomize => {
                self.randomize();
                true
            }
            Intent::SeedPattern { preset } => Self::report(self.seed_pattern(*preset)),
            Intent::ChangeSpeed { interval_ms } => Self::report(self.change_speed(*interval_ms)),
            Intent::ChangeZoom { cell_size } => Self::report(self.change_zoom(*cell_size)),
            Intent::ToggleCell { row, col } => Self::report(self.toggle_cell(*row, *col)),
            Intent::Click { x, y } => Self::report(self.click(*x, *y)),
        };

        let step_count = self.state.step_count;
        if let Some(log) = self.intent_log.as_mut() {
            log.log(intent, step_count, applied);
        }
    }

    fn report(result: Result<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "intent rejected");
                false
            }
        }
    }

    fn step(&mut self) {
        self.state.grid = rules::advance(&self.state.grid);
        self.state.step_count += 1;
        debug!(step = self.state.step_count, live = self.state.grid.live_count(), "step");
        self.redraw();
    }

    /// Repaint the current grid
    pub fn redraw(&mut self) {
        self.renderer.draw(&self.state.grid, self.config.cell_size);
    }

    // --- display outputs ---

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub fn step_count(&self) -> u64 {
        self.state.step_count
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn run_state(&self) -> RunState {
        if self.state.running {
            RunState::Running
        } else {
            RunState::Idle
        }
    }

    /// Label for the start/stop button
    pub fn toggle_label(&self) -> &'static str {
        if self.state.running {
            "Stop"
        } else {
            "Start"
        }
    }

    pub fn rows(&self) -> i32 {
        self.state.grid.rows
    }

    pub fn cols(&self) -> i32 {
        self.state.grid.cols
    }

    pub fn cell_size(&self) -> u32 {
        self.config.cell_size
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.config.tick_interval_ms
    }

    pub fn surface_size(&self) -> (u32, u32) {
        (self.surface_width, self.surface_height)
    }

    pub fn active_timer(&self) -> Option<TimerId> {
        self.active_timer
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn intent_log(&self) -> Option<&IntentLog> {
        self.intent_log.as_ref()
    }
}
