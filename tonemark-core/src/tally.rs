//! Per-label bookmark counts for one run

use serde::Serialize;

use crate::scorer::Label;

/// Number of bookmarks that received each label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl Tally {
    pub fn record(&mut self, label: Label) {
        match label {
            Label::Positive => self.positive += 1,
            Label::Negative => self.negative += 1,
            Label::Neutral => self.neutral += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}
