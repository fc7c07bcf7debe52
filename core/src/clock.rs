use web_time::Instant;

/// Elapsed-time tracking for one game.
///
/// Runs from [`GameClock::start`] until the first [`GameClock::stop`]; later stops are ignored so the reading
/// freezes at the moment the game ended.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GameClock {
    started_at: Option<Instant>,
    stopped_at: Option<Instant>,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts, for a new game) the clock.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn start_at(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.stopped_at = None;
    }

    /// Stops the clock, returns whether this call is the one that stopped it.
    pub fn stop(&mut self) -> bool {
        self.stop_at(Instant::now())
    }

    pub fn stop_at(&mut self, now: Instant) -> bool {
        if !self.is_running() {
            return false;
        }
        self.stopped_at = Some(now);
        true
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.stopped_at.is_none()
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs_at(Instant::now())
    }

    pub fn elapsed_secs_at(&self, now: Instant) -> u32 {
        let Some(started_at) = self.started_at else {
            return 0;
        };
        let end = self.stopped_at.unwrap_or(now);
        let secs = end.saturating_duration_since(started_at).as_secs();
        u32::try_from(secs).unwrap_or(u32::MAX)
    }
}

/// Formats seconds as `M:SS`, minutes unpadded.
pub fn format_time(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;

    #[test]
    fn format_time_pads_seconds_only() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(59), "0:59");
        assert_eq!(format_time(60), "1:00");
        assert_eq!(format_time(125), "2:05");
        assert_eq!(format_time(600), "10:00");
        assert_eq!(format_time(3599), "59:59");
    }

    #[test]
    fn idle_clock_reads_zero() {
        let clock = GameClock::new();

        assert!(!clock.is_running());
        assert_eq!(clock.elapsed_secs(), 0);
    }

    #[test]
    fn running_clock_counts_whole_seconds() {
        let t0 = Instant::now();
        let mut clock = GameClock::new();
        clock.start_at(t0);

        assert!(clock.is_running());
        assert_eq!(clock.elapsed_secs_at(t0), 0);
        assert_eq!(clock.elapsed_secs_at(t0 + Duration::from_millis(1999)), 1);
        assert_eq!(clock.elapsed_secs_at(t0 + Duration::from_secs(125)), 125);
    }

    #[test]
    fn stop_freezes_reading_once() {
        let t0 = Instant::now();
        let mut clock = GameClock::new();
        clock.start_at(t0);

        assert!(clock.stop_at(t0 + Duration::from_secs(30)));
        assert!(!clock.stop_at(t0 + Duration::from_secs(45)));
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed_secs_at(t0 + Duration::from_secs(90)), 30);
    }

    #[test]
    fn restart_resets_reading() {
        let t0 = Instant::now();
        let mut clock = GameClock::new();
        clock.start_at(t0);
        clock.stop_at(t0 + Duration::from_secs(10));

        let t1 = t0 + Duration::from_secs(20);
        clock.start_at(t1);

        assert!(clock.is_running());
        assert_eq!(clock.elapsed_secs_at(t1 + Duration::from_secs(3)), 3);
    }

    #[test]
    fn stop_before_start_is_ignored() {
        let mut clock = GameClock::new();

        assert!(!clock.stop());
        assert_eq!(clock.elapsed_secs(), 0);
    }
}
