/// One visibility notification for an observed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilitySample {
    /// Fraction of the element's area inside the viewport, `0.0..=1.0`.
    pub ratio: f64,
    pub intersecting: bool,
}

impl VisibilitySample {
    pub fn new(ratio: f64, intersecting: bool) -> Self {
        Self { ratio, intersecting }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LatchPhase {
    Observing,
    Triggered,
    Detached,
}

/// What the observer should do after a sample was fed to the latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchStep {
    /// Not visible enough yet, keep observing.
    Pending,
    /// Just became visible. The element should be unobserved now.
    Triggered,
    /// The latch already fired or was detached; nothing changed.
    Ignored,
}

impl LatchStep {
    pub fn keep_observing(self) -> bool {
        matches!(self, LatchStep::Pending)
    }
}

/// One-shot "has been seen in the viewport" latch.
///
/// `Observing -> Triggered` happens at most once and there is no way back.
/// `detach()` ends observation without firing, for elements that unmount
/// before they were ever scrolled into view.
#[derive(Debug, Clone)]
pub struct ViewportLatch {
    threshold: f64,
    phase: LatchPhase,
}

impl ViewportLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            phase: LatchPhase::Observing,
        }
    }

    pub fn has_triggered(&self) -> bool {
        self.phase == LatchPhase::Triggered
    }

    pub fn observe(&mut self, sample: VisibilitySample) -> LatchStep {
        if self.phase != LatchPhase::Observing {
            return LatchStep::Ignored;
        }
        if sample.intersecting && sample.ratio >= self.threshold {
            self.phase = LatchPhase::Triggered;
            LatchStep::Triggered
        } else {
            LatchStep::Pending
        }
    }

    /// Stops observing. Leaves an already triggered latch untouched.
    pub fn detach(&mut self) {
        if self.phase == LatchPhase::Observing {
            self.phase = LatchPhase::Detached;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_threshold_is_reached() {
        let mut latch = ViewportLatch::new(0.1);
        assert_eq!(latch.observe(VisibilitySample::new(0.0, false)), LatchStep::Pending);
        assert_eq!(latch.observe(VisibilitySample::new(0.05, true)), LatchStep::Pending);
        assert!(!latch.has_triggered());

        assert_eq!(latch.observe(VisibilitySample::new(0.1, true)), LatchStep::Triggered);
        assert!(latch.has_triggered());
    }

    #[test]
    fn stays_triggered_for_any_later_samples() {
        let mut latch = ViewportLatch::new(0.5);
        latch.observe(VisibilitySample::new(1.0, true));

        let later = [
            VisibilitySample::new(0.0, false),
            VisibilitySample::new(0.7, true),
            VisibilitySample::new(0.2, true),
        ];
        for sample in later {
            assert_eq!(latch.observe(sample), LatchStep::Ignored);
            assert!(latch.has_triggered());
        }

        latch.detach();
        assert!(latch.has_triggered());
    }

    #[test]
    fn already_visible_element_fires_on_first_notification() {
        let mut latch = ViewportLatch::new(0.1);
        assert_eq!(latch.observe(VisibilitySample::new(1.0, true)), LatchStep::Triggered);
    }

    #[test]
    fn detached_before_visible_never_fires() {
        let mut latch = ViewportLatch::new(0.1);
        latch.detach();
        latch.detach();

        assert_eq!(latch.observe(VisibilitySample::new(1.0, true)), LatchStep::Ignored);
        assert!(!latch.has_triggered());
    }

    #[test]
    fn zero_threshold_needs_an_intersection() {
        let mut latch = ViewportLatch::new(0.0);
        assert_eq!(latch.observe(VisibilitySample::new(0.0, false)), LatchStep::Pending);
        assert_eq!(latch.observe(VisibilitySample::new(0.0, true)), LatchStep::Triggered);
    }

    #[test]
    fn only_pending_keeps_observing() {
        assert!(LatchStep::Pending.keep_observing());
        assert!(!LatchStep::Triggered.keep_observing());
        assert!(!LatchStep::Ignored.keep_observing());
    }
}
