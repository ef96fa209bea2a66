use serde::{Deserialize, Serialize};

use super::{Balance, ParticipantId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutRequest {
    pub participant_id: ParticipantId,
    pub amount: Balance,
}

impl PayoutRequest {
    pub fn new(participant_id: impl Into<ParticipantId>, amount: Balance) -> Self {
        Self {
            participant_id: participant_id.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RejectionReason {
    /// The vault could not cover the amount at this point in the batch.
    InsufficientBalance,
    /// Negative amount.
    InvalidAmount,
    ExceedsRequestLimit,
    /// The participant already has a decision earlier in the batch.
    DuplicateParticipant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutDecision {
    pub participant_id: ParticipantId,
    pub amount: Balance,
    pub approved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection: Option<RejectionReason>,
}

impl PayoutDecision {
    pub fn approve(request: &PayoutRequest) -> Self {
        Self {
            participant_id: request.participant_id.clone(),
            amount: request.amount,
            approved: true,
            rejection: None,
        }
    }

    pub fn reject(request: &PayoutRequest, reason: RejectionReason) -> Self {
        Self {
            participant_id: request.participant_id.clone(),
            amount: request.amount,
            approved: false,
            rejection: Some(reason),
        }
    }
}
