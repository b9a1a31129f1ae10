// Per-section reveal state driven by intersection reports.

/// Presentational state of one observed page section.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Hidden,
    Visible,
}

impl Reveal {
    #[inline]
    pub fn is_visible(self) -> bool {
        matches!(self, Reveal::Visible)
    }

    /// Apply one intersection report.
    ///
    /// Partial visibility below `threshold` keeps the current state so a
    /// section hovering at the edge of the viewport does not flicker.
    pub fn next(self, sample: IntersectionSample, threshold: f64) -> Reveal {
        if !sample.is_intersecting {
            Reveal::Hidden
        } else if sample.ratio >= threshold {
            Reveal::Visible
        } else {
            self
        }
    }
}

/// One observer report for a section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn entered(ratio: f64) -> Self {
        Self {
            is_intersecting: true,
            ratio,
        }
    }

    pub fn exited() -> Self {
        Self {
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

/// Whether sections fade back out when they leave the viewport.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPolicy {
    /// Toggle both ways on every enter/exit.
    #[default]
    Toggle,
    /// Stop observing a section after its first reveal.
    Once,
}

/// Outcome of feeding a sample to the monitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealChange {
    pub state: Reveal,
    pub changed: bool,
    pub unobserve: bool,
}

/// Tracks the reveal state of a fixed set of sections, addressed by index.
#[derive(Clone, Debug)]
pub struct RevealMonitor {
    states: Vec<Reveal>,
    observed: Vec<bool>,
    threshold: f64,
    policy: RevealPolicy,
}

impl RevealMonitor {
    pub fn new(section_count: usize, threshold: f64, policy: RevealPolicy) -> Self {
        Self {
            states: vec![Reveal::Hidden; section_count],
            observed: vec![true; section_count],
            threshold,
            policy,
        }
    }

    /// Observer thresholds: zero reports the full exit, `threshold` the reveal.
    pub fn observer_thresholds(&self) -> [f64; 2] {
        [0.0, self.threshold]
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<Reveal> {
        self.states.get(index).copied()
    }

    pub fn is_observed(&self, index: usize) -> bool {
        self.observed.get(index).copied().unwrap_or(false)
    }

    /// Feed one report. Returns `None` for unknown or no longer observed sections.
    pub fn apply(&mut self, index: usize, sample: IntersectionSample) -> Option<RevealChange> {
        if !self.is_observed(index) {
            return None;
        }
        let prev = self.states[index];
        let state = prev.next(sample, self.threshold);
        self.states[index] = state;
        let unobserve = self.policy == RevealPolicy::Once && state.is_visible();
        if unobserve {
            self.observed[index] = false;
        }
        Some(RevealChange {
            state,
            changed: state != prev,
            unobserve,
        })
    }
}
