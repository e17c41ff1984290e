use std::time::{Duration, Instant};

/// Single-shot timer driven by the event loop: `poll` reports the expiry exactly once.
#[derive(Debug, Clone)]
pub struct SingleShotTimer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl SingleShotTimer {
    pub fn new(interval: Duration) -> Self {
        Self { interval, deadline: None }
    }

    pub fn start(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.deadline = None;
    }

    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(at) if now >= at => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_interval() {
        let t0 = Instant::now();
        let mut t = SingleShotTimer::new(Duration::from_millis(150));
        assert!(!t.poll(t0));

        t.start(t0);
        assert!(t.is_active());
        assert!(!t.poll(t0 + Duration::from_millis(149)));
        assert!(t.poll(t0 + Duration::from_millis(150)));
        assert!(!t.is_active());
        assert!(!t.poll(t0 + Duration::from_millis(400)));
    }

    #[test]
    fn stop_cancels_pending_expiry() {
        let t0 = Instant::now();
        let mut t = SingleShotTimer::new(Duration::from_millis(150));
        t.start(t0);
        t.stop();
        assert!(!t.poll(t0 + Duration::from_secs(1)));
    }
}
