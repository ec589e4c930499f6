//! Answer filtering.
//!
//! A `FilterState` is a plain value object describing what the reviewer is
//! narrowing to. Criteria at their default values are inactive; active
//! criteria AND together. `apply` never mutates or reorders its input:
//! survivors keep their relative order, so the same filter over the same
//! records always yields the same stream.

use serde::{Deserialize, Serialize};

use crate::model::AnswerRecord;

/// Threshold for the "high confidence" quick filter.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.80;

/// Session-local filter criteria. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Minimum confidence as an integer percentage, 0..=100. 0 = inactive.
    pub confidence_min: u8,
    /// Case-insensitive substring over question, value, and citation.
    /// Empty = inactive.
    pub search_term: String,
    /// Quick filter: only records at or above [`HIGH_CONFIDENCE_THRESHOLD`].
    pub show_only_high_confidence: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            confidence_min: 0,
            search_term: String::new(),
            show_only_high_confidence: false,
        }
    }
}

impl FilterState {
    /// Restore every criterion to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Number of criteria that differ from their defaults (0 to 3).
    /// UI readout only; filtering itself checks each criterion directly.
    pub fn active_count(&self) -> usize {
        [
            self.confidence_min > 0,
            !self.search_term.is_empty(),
            self.show_only_high_confidence,
        ]
        .iter()
        .filter(|&&active| active)
        .count()
    }

    /// True when no criterion is active (apply would be the identity).
    pub fn is_default(&self) -> bool {
        self.active_count() == 0
    }

    /// Check a single record against every active criterion.
    pub fn passes(&self, record: &AnswerRecord) -> bool {
        if !self.search_term.is_empty() {
            let needle = self.search_term.to_lowercase();
            let in_question = record.question.to_lowercase().contains(&needle);
            let in_value = record.value.to_lowercase().contains(&needle);
            // An absent citation cannot satisfy the search clause
            let in_citation = record
                .citation
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&needle));
            if !in_question && !in_value && !in_citation {
                return false;
            }
        }

        if self.confidence_min > 0 && record.confidence * 100.0 < f64::from(self.confidence_min) {
            return false;
        }

        if self.show_only_high_confidence && record.confidence < HIGH_CONFIDENCE_THRESHOLD {
            return false;
        }

        true
    }
}

/// Apply a filter to a record stream. Survivors keep their relative order;
/// the input is untouched.
pub fn apply(records: &[AnswerRecord], filter: &FilterState) -> Vec<AnswerRecord> {
    records
        .iter()
        .filter(|record| filter.passes(record))
        .cloned()
        .collect()
}
