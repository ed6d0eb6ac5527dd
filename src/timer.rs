use crate::ports::{TimerId, TimerPort};

#[derive(Clone, Debug)]
struct Registration {
    id: TimerId,
    interval_ms: f64,
    next_due_ms: f64,
}

/// Timer driven by an external frame clock.
///
/// `start` schedules relative to the last time passed to `poll`. Each poll
/// fires a registration at most once and reschedules it from the poll time,
/// so a long frame never turns into a burst of ticks.
#[derive(Debug, Default)]
pub struct FrameTimer {
    now_ms: f64,
    next_id: u64,
    registrations: Vec<Registration>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock to `now_ms` and return the registrations that are due
    pub fn poll(&mut self, now_ms: f64) -> Vec<TimerId> {
        self.now_ms = self.now_ms.max(now_ms);
        let now = self.now_ms;

        let mut due = Vec::new();
        for reg in self.registrations.iter_mut() {
            if now >= reg.next_due_ms {
                due.push(reg.id);
                reg.next_due_ms = now + reg.interval_ms;
            }
        }
        due
    }

    /// Number of live registrations
    pub fn active(&self) -> usize {
        self.registrations.len()
    }
}

impl TimerPort for FrameTimer {
    fn start(&mut self, interval_ms: u32) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.registrations.push(Registration {
            id,
            interval_ms: interval_ms as f64,
            next_due_ms: self.now_ms + interval_ms as f64,
        });
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.registrations.retain(|reg| reg.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let mut timer = FrameTimer::new();
        let id = timer.start(100);

        assert!(timer.poll(50.0).is_empty());
        assert_eq!(timer.poll(100.0), vec![id]);
        assert!(timer.poll(150.0).is_empty());
        assert_eq!(timer.poll(200.0), vec![id]);
    }

    #[test]
    fn long_frame_fires_single_tick() {
        let mut timer = FrameTimer::new();
        let id = timer.start(10);

        assert_eq!(timer.poll(1000.0), vec![id]);
        assert!(timer.poll(1005.0).is_empty());
    }

    #[test]
    fn cancelled_registration_never_fires() {
        let mut timer = FrameTimer::new();
        let id = timer.start(10);
        timer.cancel(id);

        assert!(timer.poll(100.0).is_empty());
        assert_eq!(timer.active(), 0);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut timer = FrameTimer::new();
        let first = timer.start(10);
        timer.cancel(first);
        let second = timer.start(10);

        assert_ne!(first, second);
    }
}
