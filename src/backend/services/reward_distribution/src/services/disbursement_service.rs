use anyhow::{Context, Result};
use std::cmp::Reverse;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::config::DistributionConfig;
use crate::models::activity::{ActivityRecord, ReputationScore};
use crate::models::payout::PayoutRequest;
use crate::models::report::CycleRecord;
use crate::models::{Balance, ParticipantId};
use crate::repositories::traits::CycleReportRepository;
use crate::services::disbursement_cycle::DisbursementCycle;

/// Runs disbursement cycles and hands each finished report to the repository.
pub struct DisbursementService<R: CycleReportRepository> {
    cycle: DisbursementCycle,
    repository: Arc<R>,
}

impl<R: CycleReportRepository> DisbursementService<R> {
    pub fn new(cycle: DisbursementCycle, repository: Arc<R>) -> Self {
        Self { cycle, repository }
    }

    pub fn from_config(config: &DistributionConfig, repository: Arc<R>) -> Result<Self> {
        let cycle = DisbursementCycle::from_config(config).context("invalid distribution config")?;
        Ok(Self::new(cycle, repository))
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Score every participant, admit the resulting payouts against a fresh
    /// vault of `total_gtt`, and persist the report.
    pub async fn distribute<I>(&self, activities: I, total_gtt: Balance) -> Result<CycleRecord>
    where
        I: IntoIterator<Item = (ParticipantId, ActivityRecord)>,
    {
        let report = self
            .cycle
            .run(activities, total_gtt)
            .context("disbursement cycle failed")?;

        self.persist(CycleRecord::new(report)).await
    }

    /// Same as [`distribute`](Self::distribute) for caller-built requests.
    pub async fn distribute_requests(
        &self,
        requests: Vec<PayoutRequest>,
        total_gtt: Balance,
    ) -> Result<CycleRecord> {
        let report = self
            .cycle
            .run_requests(requests, total_gtt)
            .context("manual payout batch failed")?;

        self.persist(CycleRecord::new(report)).await
    }

    pub async fn get_cycle(&self, cycle_id: Uuid) -> Result<Option<CycleRecord>> {
        self.repository.get_report(cycle_id).await
    }

    /// Reputation scores ordered best first; ties fall back to participant id.
    pub fn reputation_ranking<I>(&self, activities: I) -> Result<Vec<(ParticipantId, ReputationScore)>>
    where
        I: IntoIterator<Item = (ParticipantId, ActivityRecord)>,
    {
        let mut ranking = activities
            .into_iter()
            .map(|(participant_id, activity)| {
                self.cycle
                    .engine()
                    .compute_reputation(&activity)
                    .map_err(|e| e.attribute_to(&participant_id))
                    .map(|score| (participant_id, score))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        ranking.sort_by(|(a_id, a), (b_id, b)| {
            (Reverse(a.total_score), a_id).cmp(&(Reverse(b.total_score), b_id))
        });
        Ok(ranking)
    }

    async fn persist(&self, record: CycleRecord) -> Result<CycleRecord> {
        self.repository
            .store_report(record.clone())
            .await
            .with_context(|| format!("failed to store cycle report {}", record.id))?;

        info!(
            cycle_id = %record.id,
            total_disbursed = record.report.total_disbursed,
            remaining_gtt = record.report.remaining_gtt,
            "cycle report stored"
        );

        Ok(record)
    }
}
