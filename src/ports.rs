use crate::Grid;

/// Identifier of one timer registration. Never reused within a timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Periodic timer the controller drives automatic stepping with
pub trait TimerPort {
    /// Register a periodic timer firing every `interval_ms`
    fn start(&mut self, interval_ms: u32) -> TimerId;
    /// Cancel a registration; cancelling an unknown id is a no-op
    fn cancel(&mut self, id: TimerId);
}

/// Drawing surface the controller paints the grid onto
pub trait RenderPort {
    /// Clear the surface and paint every cell as a `cell_size` square
    fn draw(&mut self, grid: &Grid, cell_size: u32);
}
