use std::time::{Duration, Instant};

/// Delta-time source for a frame loop.
///
/// Delta time is clamped so that a stalled process (debugger, minimized
/// window) does not make cursor movement jump across the grid.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    const DT_MIN: Duration = Duration::from_micros(100);
    const DT_MAX: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(start: Instant) -> Self {
        Self { last: start }
    }

    /// Seconds since the previous tick (or since creation), clamped.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Timestamps earlier than the previous tick yield the minimum delta.
    fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(Self::DT_MIN, Self::DT_MAX);
        self.last = now;
        dt.as_secs_f32()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_elapsed_seconds() {
        let t0 = Instant::now();
        let mut c = FrameClock::starting_at(t0);
        assert!((c.tick_at(t0 + Duration::from_millis(16)) - 0.016).abs() < 1e-6);
        assert!((c.tick_at(t0 + Duration::from_millis(48)) - 0.032).abs() < 1e-6);
    }

    #[test]
    fn clamps_long_stalls() {
        let t0 = Instant::now();
        let mut c = FrameClock::starting_at(t0);
        assert_eq!(c.tick_at(t0 + Duration::from_secs(10)), FrameClock::DT_MAX.as_secs_f32());
    }

    #[test]
    fn zero_or_backwards_time_yields_minimum() {
        let t0 = Instant::now() + Duration::from_secs(1);
        let mut c = FrameClock::starting_at(t0);
        assert_eq!(c.tick_at(t0), FrameClock::DT_MIN.as_secs_f32());
        let earlier = t0 - Duration::from_millis(5);
        assert_eq!(c.tick_at(earlier), FrameClock::DT_MIN.as_secs_f32());
    }
}
