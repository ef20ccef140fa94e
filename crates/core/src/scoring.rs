//! Score counters keyed by player label.
//!
//! Counters only ever grow; there is no decay and no cap. Labels that have
//! never scored read as zero.

use std::collections::HashMap;

use crate::types::{FIRST_LABEL, SECOND_LABEL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCounter {
    scores: HashMap<String, u32>,
}

impl ScoreCounter {
    /// Start both default labels at zero
    pub fn new() -> Self {
        let scores = [FIRST_LABEL, SECOND_LABEL]
            .into_iter()
            .map(|label| (label.to_string(), 0))
            .collect();
        Self { scores }
    }

    pub fn increment(&mut self, label: &str) {
        *self.scores.entry(label.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, label: &str) -> u32 {
        self.scores.get(label).copied().unwrap_or(0)
    }

    /// Sum of all wins recorded
    pub fn total(&self) -> u32 {
        self.scores.values().sum()
    }
}

impl Default for ScoreCounter {
    fn default() -> Self {
        Self::new()
    }
}
