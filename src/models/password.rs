//! Password strength model.

use serde::{Deserialize, Serialize};

/// Labels indexed by strength score.
pub const STRENGTH_LABELS: [&str; 6] = ["", "Very Weak", "Weak", "Fair", "Good", "Strong"];

/// Highest achievable strength score.
pub const MAX_STRENGTH_SCORE: u8 = 5;

/// Strength meter reading for a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    /// Score from 0 to 5.
    pub score: u8,
    /// Label for the score; empty for an empty password.
    pub label: String,
}

impl PasswordStrength {
    /// Builds the reading for a score, clamping it to the valid range.
    pub fn from_score(score: u8) -> Self {
        let score = score.min(MAX_STRENGTH_SCORE);
        Self {
            score,
            label: STRENGTH_LABELS[usize::from(score)].to_string(),
        }
    }
}
