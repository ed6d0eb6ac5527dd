pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod intent_log;
pub mod patterns;
pub mod ports;
pub mod rules;
pub mod timer;

pub use controller::{RunConfig, RunController, RunState, SimulationState};
pub use error::{LifeError, Result};
pub use grid::Grid;
pub use intent_log::{Intent, IntentLog};
pub use patterns::Preset;
pub use ports::{RenderPort, TimerId, TimerPort};
pub use timer::FrameTimer;
