use serde::{Deserialize, Serialize};

use super::Balance;

/// Raw per-participant activity counters for one cycle.
///
/// Missing fields deserialize as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityRecord {
    pub votes_cast: i64,
    pub capsules_reviewed: i64,
    pub disputes_resolved: i64,
}

impl ActivityRecord {
    pub fn new(votes_cast: i64, capsules_reviewed: i64, disputes_resolved: i64) -> Self {
        Self {
            votes_cast,
            capsules_reviewed,
            disputes_resolved,
        }
    }

    /// Returns the first negative counter as `(field, value)`.
    pub fn negative_counter(&self) -> Option<(&'static str, i64)> {
        [
            ("votesCast", self.votes_cast),
            ("capsulesReviewed", self.capsules_reviewed),
            ("disputesResolved", self.disputes_resolved),
        ]
        .into_iter()
        .find(|(_, value)| *value < 0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationBreakdown {
    pub votes: i128,
    pub reviews: i128,
    pub disputes: i128,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReputationScore {
    pub total_score: i128,
    pub breakdown: ReputationBreakdown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncentiveBreakdown {
    pub base: Balance,
    pub disputes: Balance,
    pub reviews: Balance,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncentiveAward {
    #[serde(rename = "totalRewardGTT")]
    pub total_reward_gtt: Balance,
    pub breakdown: IncentiveBreakdown,
    /// Set when the configured reward cap clamped the uncapped sum.
    #[serde(default)]
    pub capped: bool,
}

// Constants for reputation scoring
pub const VOTE_WEIGHT: u32 = 2;
pub const REVIEW_WEIGHT: u32 = 3;
pub const DISPUTE_WEIGHT: u32 = 5;

// Constants for incentive awards
pub const BASE_INCENTIVE_GTT: Balance = 50;
pub const DISPUTE_BONUS_GTT: u32 = 20;
pub const REVIEW_BONUS_GTT: u32 = 10;
