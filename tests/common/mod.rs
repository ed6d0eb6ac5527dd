#![allow(dead_code)]

use lifegrid::{Grid, RenderPort, RunConfig, RunController, TimerId, TimerPort};

/// Parse a text grid fixture ('#' alive, '.' dead)
pub fn grid(text: &str) -> Grid {
    Grid::from_text(text).expect("valid grid fixture")
}

/// Render port that remembers every frame it was asked to draw
#[derive(Default)]
pub struct RecordingSurface {
    pub frames: Vec<(Grid, u32)>,
}

impl RecordingSurface {
    pub fn draws(&self) -> usize {
        self.frames.len()
    }

    pub fn last(&self) -> Option<&(Grid, u32)> {
        self.frames.last()
    }
}

impl RenderPort for RecordingSurface {
    fn draw(&mut self, grid: &Grid, cell_size: u32) {
        self.frames.push((grid.clone(), cell_size));
    }
}

/// Timer port that records registrations instead of scheduling anything
#[derive(Default)]
pub struct FakeTimer {
    next_id: u64,
    pub started: Vec<(TimerId, u32)>,
    pub cancelled: Vec<TimerId>,
    pub live: Vec<TimerId>,
}

impl TimerPort for FakeTimer {
    fn start(&mut self, interval_ms: u32) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.started.push((id, interval_ms));
        self.live.push(id);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.cancelled.push(id);
        self.live.retain(|&live| live != id);
    }
}

pub type TestController = RunController<FakeTimer, RecordingSurface>;

/// Controller on a `width` x `height` surface with a fixed random seed
pub fn controller(width: u32, height: u32, cell_size: u32, interval_ms: u32) -> TestController {
    let config = RunConfig::new(cell_size, interval_ms).expect("valid run config");
    RunController::new(width, height, config, FakeTimer::default(), RecordingSurface::default())
        .expect("valid surface")
        .with_seed(42)
}

/// Fire the controller's live timer once
pub fn tick(controller: &mut TestController) -> bool {
    match controller.active_timer() {
        Some(id) => controller.on_tick(id),
        None => false,
    }
}
