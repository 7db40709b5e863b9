use garde::Validate;
use serde::Serialize;
use std::fmt;

use super::types::Strategy;

/// One structural problem, e.g. `legs[2].strike: must be positive, got 0`.
/// The path points at the offending field so the UI can attach the message
/// to the right input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Flattens every rule violation into an ordered list. Never panics and
/// never stops at the first problem; an empty list means the strategy is
/// structurally sound. The caller decides whether to block chart rendering.
pub fn validate_strategy(strategy: &Strategy) -> Vec<ValidationIssue> {
    match strategy.validate() {
        Ok(()) => Vec::new(),
        Err(report) => report
            .iter()
            .map(|(path, error)| ValidationIssue {
                path: path.to_string(),
                message: error.to_string(),
            })
            .collect(),
    }
}
