use std::time::{Duration, Instant};

/// Debounced dispatch for held keys: runs the supplied closure only when the
/// minimum interval has elapsed since the last accepted fire.
///
/// Time is passed in explicitly so callers and tests drive the gate
/// deterministically; the gate never reads the clock itself.
#[derive(Debug, Clone)]
pub struct RepeatGate {
    interval: Duration,
    last_fire: Option<Instant>,
}

impl RepeatGate {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fire: None,
        }
    }

    /// Invoke `f` if the gate is open at `now`. Returns whether it fired.
    pub fn fire<F: FnOnce()>(&mut self, now: Instant, f: F) -> bool {
        if !self.ready(now) {
            return false;
        }
        self.last_fire = Some(now);
        tracing::trace!("repeat gate fired");
        f();
        true
    }

    fn ready(&self, now: Instant) -> bool {
        match self.last_fire {
            None => true,
            Some(last) => now.duration_since(last) > self.interval,
        }
    }
}

impl Default for RepeatGate {
    /// 200 ms between accepted fires.
    fn default() -> Self {
        Self::new(Duration::from_millis(200))
    }
}
