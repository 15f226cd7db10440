// Speed round clock: waiting for the randomized start, a per-challenge countdown, then the outcome.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeedPhase {
    Waiting,
    Challenge,
    Result,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedClock {
    pub phase: SpeedPhase,
    pub time_left: u32,
    limit: u32,
    started_at_ms: f64,
}

impl SpeedClock {
    pub fn new(limit: u32) -> Self {
        Self {
            phase: SpeedPhase::Waiting,
            time_left: limit,
            limit,
            started_at_ms: 0.0,
        }
    }

    pub fn reveal(&mut self, now_ms: f64) {
        if self.phase == SpeedPhase::Waiting {
            self.phase = SpeedPhase::Challenge;
            self.time_left = self.limit;
            self.started_at_ms = now_ms;
        }
    }

    /// One second passed. Returns `true` when this tick ran the challenge out of time.
    pub fn tick(&mut self) -> bool {
        if self.phase != SpeedPhase::Challenge {
            return false;
        }
        if self.time_left <= 1 {
            self.time_left = 0;
            self.phase = SpeedPhase::Result;
            true
        } else {
            self.time_left -= 1;
            false
        }
    }

    /// Closes the challenge and returns the elapsed milliseconds since the reveal.
    pub fn finish(&mut self, now_ms: f64) -> Option<f64> {
        if self.phase != SpeedPhase::Challenge {
            return None;
        }
        self.phase = SpeedPhase::Result;
        Some((now_ms - self.started_at_ms).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_only_after_reveal() {
        let mut c = SpeedClock::new(2);
        assert!(!c.tick());
        assert_eq!(c.time_left, 2);
        c.reveal(1000.0);
        assert!(!c.tick());
        assert!(c.tick());
        assert_eq!(c.phase, SpeedPhase::Result);
        assert_eq!(c.finish(5000.0), None);
    }

    #[test]
    fn finish_reports_elapsed() {
        let mut c = SpeedClock::new(5);
        assert_eq!(c.finish(10.0), None);
        c.reveal(1_000.0);
        assert_eq!(c.finish(1_420.0), Some(420.0));
        assert!(!c.tick());
    }
}
