//! Score tally and result line formatting.

/// Running tally for one session.
///
/// Holds `correct <= answered <= total` at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    correct: usize,
    answered: usize,
    total: usize,
}

impl Tally {
    pub fn new(total: usize) -> Self {
        Self {
            correct: 0,
            answered: 0,
            total,
        }
    }

    /// Record one answered question.
    pub fn record(&mut self, correct: bool) {
        debug_assert!(self.answered < self.total, "more answers than questions");
        self.answered += 1;
        if correct {
            self.correct += 1;
        }
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn total(&self) -> usize {
        self.total
    }
}

/// Human-readable score line.
pub fn format_score(correct: usize, total: usize) -> String {
    format!("You scored {correct} out of {total}")
}
