pub const DEFAULT_DURATION_MS: f64 = 2000.0;

/// `Number.prototype.toFixed` accepts up to 100 digits, but f64 has nothing
/// meaningful to say past this point.
const MAX_DECIMALS: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct CounterConfig {
    pub target: f64,
    pub duration_ms: f64,
    pub decimals: usize,
    pub suffix: String,
}

impl CounterConfig {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            duration_ms: DEFAULT_DURATION_MS,
            decimals: 0,
            suffix: String::new(),
        }
    }

    pub fn duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

/// Quartic ease-out: fast start, decelerating into 1.0.
pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(4)
}

/// Renders `value` with exactly `decimals` fractional digits followed by
/// `suffix`. Halves round away from zero, the way `toFixed` does for the
/// values a counter produces.
pub fn format_counter(value: f64, decimals: usize, suffix: &str) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    let mut shown = if rounded.is_finite() { rounded } else { value };
    if shown == 0.0 {
        // no "-0" for negative targets at the start of the animation
        shown = 0.0;
    }
    format!("{:.*}{}", decimals, shown, suffix)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CounterPhase {
    Idle,
    Armed,
    Running { started_at: f64 },
    Finished,
    Detached { started: bool },
}

/// Result of feeding one animation frame to the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStep {
    /// Value updated, schedule another frame.
    Continue,
    /// Value reached the target, stop scheduling.
    Done,
    /// Counter is not running; nothing was touched.
    Ignored,
}

impl FrameStep {
    pub fn keep_running(self) -> bool {
        matches!(self, FrameStep::Continue)
    }
}

/// Time-driven counter that eases from 0 to its target exactly once.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    config: CounterConfig,
    phase: CounterPhase,
    value: f64,
}

impl CounterAnimation {
    pub fn new(config: CounterConfig) -> Self {
        Self {
            config,
            phase: CounterPhase::Idle,
            value: 0.0,
        }
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn display(&self) -> String {
        format_counter(self.value, self.config.decimals, &self.config.suffix)
    }

    pub fn has_started(&self) -> bool {
        match self.phase {
            CounterPhase::Idle => false,
            CounterPhase::Detached { started } => started,
            _ => true,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase == CounterPhase::Finished
    }

    /// Arms the animation. Returns `false` if it was already started (or
    /// torn down), in which case nothing changes and no frames should be
    /// scheduled.
    pub fn start(&mut self) -> bool {
        if self.phase != CounterPhase::Idle {
            return false;
        }
        self.phase = CounterPhase::Armed;
        true
    }

    /// Advances the animation to the frame timestamp `now` (milliseconds).
    /// The first frame after `start()` pins the start time.
    pub fn on_frame(&mut self, now: f64) -> FrameStep {
        let started_at = match self.phase {
            CounterPhase::Armed => {
                self.phase = CounterPhase::Running { started_at: now };
                now
            }
            CounterPhase::Running { started_at } => started_at,
            _ => return FrameStep::Ignored,
        };

        let progress = self.progress(now - started_at);
        self.value = ease_out_quart(progress) * self.config.target;

        if progress < 1.0 {
            FrameStep::Continue
        } else {
            self.phase = CounterPhase::Finished;
            FrameStep::Done
        }
    }

    /// Ends the animation for good. Later frames are ignored and the value is
    /// frozen where it was.
    pub fn detach(&mut self) {
        let started = self.has_started();
        self.phase = CounterPhase::Detached { started };
    }

    fn progress(&self, elapsed_ms: f64) -> f64 {
        let duration = self.config.duration_ms;
        if !duration.is_finite() || duration <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / duration).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(animation: &mut CounterAnimation, start: f64) {
        assert!(animation.start());
        let mut now = start;
        while animation.on_frame(now).keep_running() {
            now += 16.0;
        }
    }

    fn finish_from_midway(counter: &mut CounterAnimation) {
        let mut now = 1500.0;
        while counter.on_frame(now).keep_running() {
            now += 100.0;
        }
    }

    #[test]
    fn stays_at_zero_until_started() {
        let mut counter = CounterAnimation::new(CounterConfig::new(75.0).suffix("+"));
        assert_eq!(counter.on_frame(500.0), FrameStep::Ignored);
        assert_eq!(counter.display(), "0+");
        assert!(!counter.has_started());
    }

    #[test]
    fn converges_on_target() {
        let mut counter = CounterAnimation::new(CounterConfig::new(75.0).duration_ms(2000.0));
        assert!(counter.start());

        assert_eq!(counter.on_frame(1000.0), FrameStep::Continue);
        assert_eq!(counter.display(), "0");

        assert_eq!(counter.on_frame(3000.0), FrameStep::Done);
        assert_eq!(counter.display(), "75");
        assert!(counter.is_finished());

        assert_eq!(counter.on_frame(3016.0), FrameStep::Ignored);
        assert_eq!(counter.value(), 75.0);
    }

    #[test]
    fn renders_requested_decimals() {
        let config = CounterConfig::new(4.9).decimals(1).suffix("+");
        let mut counter = CounterAnimation::new(config);
        run_to_end(&mut counter, 0.0);
        assert_eq!(counter.display(), "4.9+");

        let mut whole = CounterAnimation::new(CounterConfig::new(10.0).suffix("+"));
        run_to_end(&mut whole, 0.0);
        assert_eq!(whole.display(), "10+");
    }

    #[test]
    fn second_start_does_not_restart() {
        let mut counter = CounterAnimation::new(CounterConfig::new(75.0));
        assert!(counter.start());
        counter.on_frame(0.0);
        counter.on_frame(1000.0);
        let midway = counter.value();
        assert!(midway > 0.0 && midway < 75.0);

        assert!(!counter.start());
        assert_eq!(counter.value(), midway);
        assert_eq!(counter.on_frame(1500.0), FrameStep::Continue);
        assert!(counter.value() > midway);

        finish_from_midway(&mut counter);
        assert!(!counter.start());
        assert_eq!(counter.display(), "75");
    }

    #[test]
    fn eases_out_monotonically() {
        let target = 75.0;
        let values: Vec<f64> = (0..=20)
            .map(|step| ease_out_quart(step as f64 / 20.0) * target)
            .collect();

        assert_eq!(values[0], 0.0);
        assert_eq!(values[20], target);
        for pair in values.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        for triple in values.windows(3) {
            let second_difference = (triple[2] - triple[1]) - (triple[1] - triple[0]);
            assert!(second_difference <= 1e-9);
        }
    }

    #[test]
    fn frames_after_detach_change_nothing() {
        let mut counter = CounterAnimation::new(CounterConfig::new(75.0));
        counter.start();
        counter.on_frame(0.0);
        counter.on_frame(400.0);
        let frozen = counter.value();

        counter.detach();
        assert_eq!(counter.on_frame(800.0), FrameStep::Ignored);
        assert_eq!(counter.on_frame(5000.0), FrameStep::Ignored);
        assert_eq!(counter.value(), frozen);
        assert!(counter.has_started());
        assert!(!counter.start());
    }

    #[test]
    fn detached_before_start_never_runs() {
        let mut counter = CounterAnimation::new(CounterConfig::new(75.0));
        counter.detach();
        assert!(!counter.start());
        assert!(!counter.has_started());
        assert_eq!(counter.display(), "0");
    }

    #[test]
    fn zero_duration_finishes_on_first_frame() {
        let mut counter = CounterAnimation::new(CounterConfig::new(12.0).duration_ms(0.0));
        counter.start();
        assert_eq!(counter.on_frame(42.0), FrameStep::Done);
        assert_eq!(counter.display(), "12");
    }

    #[test]
    fn clock_going_backwards_does_not_reverse() {
        let mut counter = CounterAnimation::new(CounterConfig::new(75.0));
        counter.start();
        counter.on_frame(1000.0);
        counter.on_frame(900.0);
        assert_eq!(counter.value(), 0.0);
    }

    #[test]
    fn formats_like_to_fixed() {
        assert_eq!(format_counter(0.0, 0, ""), "0");
        assert_eq!(format_counter(-0.0, 1, "%"), "0.0%");
        assert_eq!(format_counter(2.5, 0, ""), "3");
        assert_eq!(format_counter(74.6, 0, "+"), "75+");
        assert_eq!(format_counter(4.86, 1, "+"), "4.9+");
        assert_eq!(format_counter(3.0, 2, ""), "3.00");
    }
}
