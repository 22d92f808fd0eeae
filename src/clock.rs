use std::{thread::sleep, time::{Duration, Instant}};

/// Time source for the game loop. `now` is measured from an arbitrary
/// fixed origin and never goes backwards.
pub trait Clock {
    fn now(&self) -> Duration;
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock backed by `Instant`; sleeping blocks the thread.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        sleep(duration);
    }
}

/// Clock that only moves when slept on or advanced by hand.
#[derive(Default)]
pub struct VirtualClock {
    now: Duration,
}

impl VirtualClock {
    pub fn new() -> Self {
        VirtualClock { now: Duration::from_millis(0) }
    }

    /// Simulates a stall, e.g. the process not being scheduled.
    pub fn advance(&mut self, duration: Duration) {
        self.now += duration;
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn sleep(&mut self, duration: Duration) {
        self.now += duration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn virtual_clock_moves_only_when_told() {
        let mut clock = VirtualClock::new();
        assert_eq!(clock.now(), Duration::from_millis(0));

        clock.sleep(Duration::from_millis(10));
        clock.advance(Duration::from_millis(5));
        assert_eq!(clock.now(), Duration::from_millis(15));
        assert_eq!(clock.now(), Duration::from_millis(15));
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
