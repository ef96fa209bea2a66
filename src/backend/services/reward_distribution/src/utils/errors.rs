use thiserror::Error;

use crate::models::Balance;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DistributionError {
    #[error("Invalid budget: {0} GTT (vault total must be non-negative)")]
    InvalidBudget(Balance),

    #[error("Invalid payout request for {participant_id}: {reason}")]
    InvalidRequest {
        participant_id: String,
        reason: String,
    },

    #[error(
        "Invalid activity for {}: {reason}",
        .participant_id.as_deref().unwrap_or("unattributed record")
    )]
    InvalidActivity {
        participant_id: Option<String>,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DistributionError {
    /// Attach a participant id to an activity error raised by the score engine,
    /// which only ever sees the bare record.
    pub fn attribute_to(self, participant: &str) -> Self {
        match self {
            DistributionError::InvalidActivity { participant_id: None, reason } => {
                DistributionError::InvalidActivity {
                    participant_id: Some(participant.to_string()),
                    reason,
                }
            }
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, DistributionError>;
