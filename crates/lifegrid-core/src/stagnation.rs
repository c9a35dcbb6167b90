//! Detection of boards that have stopped evolving.
//!
//! A still life repeats its content every generation and an oscillator
//! every `period` generations. The detector keeps the content fingerprints
//! of the last `window` generations and reports a repeat as soon as the
//! current fingerprint matches one of them.

use std::collections::VecDeque;

/// Rolling window of `(generation, fingerprint)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagnationDetector {
    window: usize,
    history: VecDeque<(u64, u64)>,
}

impl StagnationDetector {
    /// Create a detector remembering `window` past generations. A window of
    /// 0 never reports stagnation.
    pub fn new(window: usize) -> Self {
        Self {
            window,
            history: VecDeque::with_capacity(window),
        }
    }

    /// Record a generation and return the repeat period if its content was
    /// already seen inside the window.
    pub fn observe(&mut self, generation: u64, fingerprint: u64) -> Option<u64> {
        if self.window == 0 {
            return None;
        }
        let period = self
            .history
            .iter()
            .rev()
            .find(|(_, seen)| *seen == fingerprint)
            .map(|(seen_at, _)| generation.saturating_sub(*seen_at));

        if self.history.len() >= self.window {
            self.history.pop_front();
        }
        self.history.push_back((generation, fingerprint));
        period
    }
}
