pub const LOADING_STEP: u8 = 2;
pub const LOADING_TICK_MS: u64 = 30;
pub const LOADING_EXIT_DELAY_MS: f64 = 500.0;

const COMPLETE: u8 = 100;

/// Outcome of a single loading tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Progressed(u8),
    /// Returned once, on the tick that reaches 100.
    Finished,
    Idle,
}

/// Fake loading counter shown before the page content mounts.
///
/// The value never decreases and never leaves `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingProgress {
    value: u8,
    step: u8,
    finished: bool,
}

impl Default for LoadingProgress {
    fn default() -> Self {
        Self::with_step(LOADING_STEP)
    }
}

impl LoadingProgress {
    pub fn with_step(step: u8) -> Self {
        Self {
            value: 0,
            step: step.max(1),
            finished: false,
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_complete(&self) -> bool {
        self.finished
    }

    pub fn advance(&mut self) -> Advance {
        if self.finished {
            return Advance::Idle;
        }
        self.value = self.value.saturating_add(self.step).min(COMPLETE);
        if self.value == COMPLETE {
            self.finished = true;
            Advance::Finished
        } else {
            Advance::Progressed(self.value)
        }
    }

    pub fn bar_width(&self) -> String {
        format!("width: {}%", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_monotonic_until_complete() {
        let mut progress = LoadingProgress::default();
        let mut last = progress.value();
        let mut ticks = 0;
        while !progress.is_complete() {
            progress.advance();
            assert!(progress.value() >= last);
            assert!(progress.value() <= 100);
            last = progress.value();
            ticks += 1;
        }
        assert_eq!(progress.value(), 100);
        assert_eq!(ticks, 50);
    }

    #[test]
    fn test_finished_fires_exactly_once() {
        let mut progress = LoadingProgress::default();
        let outcomes = (0..200).map(|_| progress.advance()).collect::<Vec<_>>();
        let finished = outcomes.iter().filter(|a| **a == Advance::Finished).count();
        assert_eq!(finished, 1);

        // completion comes only after the value hits 100
        let idx = outcomes
            .iter()
            .position(|a| *a == Advance::Finished)
            .expect("loading should finish");
        assert_eq!(outcomes[idx - 1], Advance::Progressed(98));
        assert!(outcomes[idx + 1..].iter().all(|a| *a == Advance::Idle));
    }

    #[test]
    fn test_uneven_step_clamps_to_100() {
        let mut progress = LoadingProgress::with_step(30);
        assert_eq!(progress.advance(), Advance::Progressed(30));
        assert_eq!(progress.advance(), Advance::Progressed(60));
        assert_eq!(progress.advance(), Advance::Progressed(90));
        assert_eq!(progress.advance(), Advance::Finished);
        assert_eq!(progress.value(), 100);
        assert_eq!(progress.bar_width(), "width: 100%");
    }

    #[test]
    fn test_zero_step_still_finishes() {
        let mut progress = LoadingProgress::with_step(0);
        assert_eq!(progress.advance(), Advance::Progressed(1));
    }
}
