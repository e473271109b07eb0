//! Load-progress aggregation and the cosmetic percentage readout.

/// Outcome of one asset request. Failures count as settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadProgress {
    total: u32,
    loaded: u32,
    failed: u32,
}

impl LoadProgress {
    pub fn new(total: u32) -> Self {
        Self {
            total,
            loaded: 0,
            failed: 0,
        }
    }

    /// Count one settled asset. Returns false once every asset has already
    /// been counted, so late or duplicate callbacks cannot push past 100.
    pub fn record(&mut self, outcome: LoadOutcome) -> bool {
        if self.is_complete() {
            return false;
        }
        match outcome {
            LoadOutcome::Loaded => self.loaded += 1,
            LoadOutcome::Failed => self.failed += 1,
        }
        true
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn loaded(&self) -> u32 {
        self.loaded
    }

    pub fn failed(&self) -> u32 {
        self.failed
    }

    pub fn settled(&self) -> u32 {
        self.loaded + self.failed
    }

    pub fn is_complete(&self) -> bool {
        self.settled() >= self.total
    }

    /// Real percentage, rounded down so that 100 is only reported when
    /// every asset has settled.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 100;
        }
        (self.settled().min(self.total) * 100) / self.total
    }
}

/// Readout that chases the real percentage in shrinking steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayPercent {
    shown: u32,
}

/// Readout refresh period.
pub const DISPLAY_TICK_MS: i32 = 16;

impl DisplayPercent {
    pub fn shown(&self) -> u32 {
        self.shown
    }

    /// One refresh tick towards `target`; never overshoots.
    pub fn step(&mut self, target: u32) -> u32 {
        let target = target.min(100);
        if self.shown < target {
            let diff = target - self.shown;
            let inc = if diff > 20 {
                diff.div_ceil(5)
            } else if diff > 5 {
                diff.div_ceil(3)
            } else {
                1
            };
            self.shown = (self.shown + inc).min(target);
        }
        self.shown
    }

    pub fn is_full(&self) -> bool {
        self.shown >= 100
    }
}
