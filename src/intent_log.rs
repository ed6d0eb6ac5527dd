use std::time::Instant;
use serde::{Serialize, Deserialize};

use crate::patterns::Preset;

/// User intents that drive the controller
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    /// Start if idle, stop if running
    StartStop,
    /// Advance one generation while idle
    Step,
    /// Stop, clear the grid and zero the step counter
    Reset,
    /// Replace the grid with a random fill
    Randomize,
    /// Overlay a preset pattern centered on the grid
    SeedPattern { preset: Preset },
    /// Set the tick interval in milliseconds
    ChangeSpeed { interval_ms: u32 },
    /// Set the cell size in pixels
    ChangeZoom { cell_size: u32 },
    /// Flip the cell at (row, col)
    ToggleCell { row: i32, col: i32 },
    /// Pointer click at surface-relative pixel (x, y)
    Click { x: f32, y: f32 },
}

/// Logged intent with timestamp and outcome
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggedIntent {
    /// Milliseconds since the log was created
    pub timestamp_ms: u64,
    pub intent: Intent,
    /// Step counter after the intent was handled
    pub step_count: u64,
    /// False when the intent was rejected or ignored
    pub applied: bool,
}

/// Intent logger
pub struct IntentLog {
    start_time: Instant,
    entries: Vec<LoggedIntent>,
}

impl Default for IntentLog {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentLog {
    pub fn new() -> Self {
        IntentLog {
            start_time: Instant::now(),
            entries: Vec::new(),
        }
    }

    /// Record an intent with the current timestamp
    pub fn log(&mut self, intent: Intent, step_count: u64, applied: bool) {
        let timestamp_ms = self.start_time.elapsed().as_millis() as u64;

        self.entries.push(LoggedIntent {
            timestamp_ms,
            intent,
            step_count,
            applied,
        });
    }

    pub fn entries(&self) -> &[LoggedIntent] {
        &self.entries
    }

    /// Serialize the log as pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }

    /// Save log to JSON file
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Get summary statistics
    pub fn summary(&self) -> String {
        let mut toggles = 0;
        let mut steps = 0;
        let mut seeds = 0;
        let mut rejected = 0;

        for logged in &self.entries {
            if !logged.applied {
                rejected += 1;
                continue;
            }
            match &logged.intent {
                Intent::ToggleCell { .. } | Intent::Click { .. } => toggles += 1,
                Intent::Step => steps += 1,
                Intent::Randomize | Intent::SeedPattern { .. } => seeds += 1,
                _ => {}
            }
        }

        let duration = self.entries.last().map(|l| l.timestamp_ms).unwrap_or(0);

        format!(
            "Session Duration: {}ms\n\
             Total Intents: {} ({} rejected)\n\
             Cell Toggles: {}, Manual Steps: {}, Grid Seeds: {}",
            duration,
            self.entries.len(),
            rejected,
            toggles,
            steps,
            seeds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_applied_and_rejected() {
        let mut log = IntentLog::new();
        log.log(Intent::ToggleCell { row: 1, col: 1 }, 0, true);
        log.log(Intent::Click { x: -5.0, y: 3.0 }, 0, false);
        log.log(Intent::Step, 1, true);
        log.log(Intent::SeedPattern { preset: Preset::Glider }, 1, true);

        let summary = log.summary();
        assert!(summary.contains("Total Intents: 4 (1 rejected)"), "{}", summary);
        assert!(summary.contains("Cell Toggles: 1, Manual Steps: 1, Grid Seeds: 1"), "{}", summary);
    }

    #[test]
    fn json_export_round_trips_entries() {
        let mut log = IntentLog::new();
        log.log(Intent::ChangeSpeed { interval_ms: 250 }, 3, true);

        let json = log.to_json().unwrap();
        let parsed: Vec<LoggedIntent> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].intent, Intent::ChangeSpeed { interval_ms: 250 });
        assert_eq!(parsed[0].step_count, 3);
    }
}
