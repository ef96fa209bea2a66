use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::payout::PayoutDecision;
use super::{Balance, ParticipantId};

/// A participant skipped by the cycle because its activity record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidRecord {
    pub participant_id: ParticipantId,
    pub reason: String,
}

/// Durable output of one disbursement cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleReport {
    pub decisions: Vec<PayoutDecision>,
    #[serde(rename = "totalGTT")]
    pub total_gtt: Balance,
    #[serde(rename = "remainingGTT")]
    pub remaining_gtt: Balance,
    pub total_disbursed: Balance,
    pub approved_count: usize,
    pub rejected_count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub invalid_records: Vec<InvalidRecord>,
}

impl CycleReport {
    pub fn new(
        total_gtt: Balance,
        remaining_gtt: Balance,
        decisions: Vec<PayoutDecision>,
        invalid_records: Vec<InvalidRecord>,
    ) -> Self {
        let total_disbursed = decisions
            .iter()
            .filter(|d| d.approved)
            .map(|d| d.amount)
            .sum();
        let approved_count = decisions.iter().filter(|d| d.approved).count();
        let rejected_count = decisions.len() - approved_count;

        Self {
            decisions,
            total_gtt,
            remaining_gtt,
            total_disbursed,
            approved_count,
            rejected_count,
            invalid_records,
        }
    }

    pub fn approved(&self) -> impl Iterator<Item = &PayoutDecision> {
        self.decisions.iter().filter(|d| d.approved)
    }

    pub fn rejected(&self) -> impl Iterator<Item = &PayoutDecision> {
        self.decisions.iter().filter(|d| !d.approved)
    }

    /// `total == remaining + disbursed`. Only guaranteed when the cycle owned its vault.
    pub fn is_conserved(&self) -> bool {
        self.total_gtt == self.remaining_gtt + self.total_disbursed
    }
}

/// Persisted envelope around a finished cycle report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub report: CycleReport,
}

impl CycleRecord {
    pub fn new(report: CycleReport) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            report,
        }
    }
}
