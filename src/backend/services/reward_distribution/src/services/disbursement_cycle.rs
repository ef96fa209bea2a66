use tracing::{info, warn};

use crate::config::{AdmissionMode, DistributionConfig};
use crate::models::activity::ActivityRecord;
use crate::models::payout::PayoutRequest;
use crate::models::report::{CycleReport, InvalidRecord};
use crate::models::{Balance, ParticipantId};
use crate::services::admission_queue::PayoutAdmissionQueue;
use crate::services::score_engine::ScoreEngine;
use crate::services::vault::VaultAccount;
use crate::utils::errors::{DistributionError, Result};

/// Runs one disbursement cycle: score, request, admit, report.
///
/// Participants are processed in the order the caller supplies them. The
/// engine defines no canonical ordering, so callers that need reproducible
/// reports must pre-sort (a `BTreeMap` works).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisbursementCycle {
    engine: ScoreEngine,
    queue: PayoutAdmissionQueue,
}

impl DisbursementCycle {
    pub fn new(engine: ScoreEngine, queue: PayoutAdmissionQueue) -> Self {
        Self { engine, queue }
    }

    /// Validates the whole config before building the engine and queue.
    pub fn from_config(config: &DistributionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(
            ScoreEngine::from_config(config)?,
            PayoutAdmissionQueue::new(config.admission),
        ))
    }

    pub fn engine(&self) -> &ScoreEngine {
        &self.engine
    }

    /// Run a cycle against a fresh vault holding `total_gtt`.
    pub fn run<I>(&self, activities: I, total_gtt: Balance) -> Result<CycleReport>
    where
        I: IntoIterator<Item = (ParticipantId, ActivityRecord)>,
    {
        let vault = VaultAccount::new(total_gtt)?;
        self.run_against(activities, &vault)
    }

    /// Run a cycle against a caller-owned vault, which may be shared.
    ///
    /// The report's `total_gtt` is the balance observed when the cycle began.
    pub fn run_against<I>(&self, activities: I, vault: &VaultAccount) -> Result<CycleReport>
    where
        I: IntoIterator<Item = (ParticipantId, ActivityRecord)>,
    {
        let (requests, invalid_records) = self.build_requests(activities)?;
        self.admit(requests, invalid_records, vault)
    }

    /// Admit manually supplied requests against a fresh vault.
    pub fn run_requests(&self, requests: Vec<PayoutRequest>, total_gtt: Balance) -> Result<CycleReport> {
        let vault = VaultAccount::new(total_gtt)?;
        self.admit(requests, Vec::new(), &vault)
    }

    fn build_requests<I>(&self, activities: I) -> Result<(Vec<PayoutRequest>, Vec<InvalidRecord>)>
    where
        I: IntoIterator<Item = (ParticipantId, ActivityRecord)>,
    {
        let strict = self.queue.policy().mode == AdmissionMode::Strict;
        let mut requests = Vec::new();
        let mut invalid_records = Vec::new();

        for (participant_id, activity) in activities {
            match self.engine.compute_incentive(&activity) {
                Ok(award) => requests.push(PayoutRequest::new(participant_id, award.total_reward_gtt)),
                Err(err) if strict => return Err(err.attribute_to(&participant_id)),
                Err(err) => {
                    let reason = match err {
                        DistributionError::InvalidActivity { reason, .. } => reason,
                        other => other.to_string(),
                    };
                    warn!(participant = %participant_id, %reason, "activity record skipped");
                    invalid_records.push(InvalidRecord {
                        participant_id,
                        reason,
                    });
                }
            }
        }

        Ok((requests, invalid_records))
    }

    fn admit(
        &self,
        requests: Vec<PayoutRequest>,
        invalid_records: Vec<InvalidRecord>,
        vault: &VaultAccount,
    ) -> Result<CycleReport> {
        let opening_gtt = vault.remaining_gtt();
        let outcome = self.queue.admit(&requests, vault)?;
        let report = CycleReport::new(opening_gtt, outcome.remaining_gtt, outcome.decisions, invalid_records);

        info!(
            total_gtt = report.total_gtt,
            remaining_gtt = report.remaining_gtt,
            total_disbursed = report.total_disbursed,
            approved = report.approved_count,
            rejected = report.rejected_count,
            invalid = report.invalid_records.len(),
            "disbursement cycle completed"
        );

        Ok(report)
    }
}
