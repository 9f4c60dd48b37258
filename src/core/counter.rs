//! Count-up animation for the stats section

/// Default animation length for stat counters
pub const DEFAULT_DURATION_MS: u32 = 2_000;

/// Frame interval used when driving the counter from a timer
pub const FRAME_INTERVAL_MS: u32 = 16;

/// Animates a number from zero up to `target` over `duration_ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    pub target: u64,
    pub duration_ms: u32,
}

impl CountUp {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Value to display `elapsed_ms` after the animation started.
    ///
    /// Uses an ease-out cubic curve, so the number races up and settles on
    /// `target` exactly when the duration has elapsed.
    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        if self.duration_ms == 0 || elapsed_ms >= self.duration_ms as f64 {
            return self.target;
        }
        if elapsed_ms <= 0.0 {
            return 0;
        }
        let t = elapsed_ms / self.duration_ms as f64;
        let eased = 1.0 - (1.0 - t).powi(3);
        ((self.target as f64) * eased).floor().min(self.target as f64) as u64
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms as f64
    }
}

/// A [`CountUp`] that holds at zero until it is started.
///
/// The stats section starts it the first time the counter scrolls into view.
/// Later `start` calls are ignored, so the animation only plays once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUpRun {
    count: CountUp,
    started_at: Option<f64>,
}

impl CountUpRun {
    pub fn new(count: CountUp) -> Self {
        Self {
            count,
            started_at: None,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start the animation at `now_ms`. Returns false if it was already started.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now_ms);
        true
    }

    /// Value to display at `now_ms`
    pub fn value(&self, now_ms: f64) -> u64 {
        match self.started_at {
            Some(started) => self.count.value_at(now_ms - started),
            None => 0,
        }
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.started_at
            .is_some_and(|started| self.count.is_finished(now_ms - started))
    }
}

/// Format a count with thousands separators, e.g. `10000` -> `"10,000"`
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let counter = CountUp::new(10_000);
        assert_eq!(counter.value_at(0.0), 0);
        assert_eq!(counter.value_at(-5.0), 0);
        assert_eq!(counter.value_at(2_000.0), 10_000);
        assert_eq!(counter.value_at(10_000.0), 10_000);
        assert!(counter.is_finished(2_000.0));
        assert!(!counter.is_finished(1_999.0));
    }

    #[test]
    fn test_monotonic_and_bounded() {
        let counter = CountUp::new(98).with_duration(1_000);
        let mut last = 0;
        for step in 0..=1_100 {
            let value = counter.value_at(step as f64);
            assert!(value >= last);
            assert!(value <= 98);
            last = value;
        }
        assert_eq!(last, 98);
    }

    #[test]
    fn test_eases_out() {
        let counter = CountUp::new(1_000).with_duration(1_000);
        // Past the halfway value at the halfway time
        assert!(counter.value_at(500.0) > 500);
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let counter = CountUp::new(24).with_duration(0);
        assert_eq!(counter.value_at(0.0), 24);
    }

    #[test]
    fn test_run_holds_at_zero_until_started() {
        let mut run = CountUpRun::new(CountUp::new(152_847));
        // Long after page load, still nothing shown while out of view
        assert_eq!(run.value(60_000.0), 0);
        assert!(!run.is_finished(60_000.0));

        assert!(run.start(60_000.0));
        assert_eq!(run.value(60_000.0), 0);
        assert!(run.value(61_000.0) > 0);
        assert!(run.value(61_000.0) < 152_847);
        assert_eq!(run.value(62_000.0), 152_847);
        assert!(run.is_finished(62_000.0));
    }

    #[test]
    fn test_run_starts_once() {
        let mut run = CountUpRun::new(CountUp::new(8_432));
        assert!(run.start(100.0));
        assert!(!run.start(5_000.0));
        assert!(run.is_started());
        assert_eq!(run.value(2_100.0), 8_432);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(98), "98");
        assert_eq!(format_count(2_500), "2,500");
        assert_eq!(format_count(10_000), "10,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
        assert_eq!(format_count(152_847), "152,847");
    }
}
