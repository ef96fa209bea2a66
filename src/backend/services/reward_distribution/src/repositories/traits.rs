use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::report::CycleRecord;

/// Durable storage for finished cycle reports (ledger writer, audit log, ...).
#[async_trait]
pub trait CycleReportRepository: Send + Sync {
    async fn store_report(&self, record: CycleRecord) -> Result<()>;
    async fn get_report(&self, cycle_id: Uuid) -> Result<Option<CycleRecord>>;
    async fn list_reports(&self) -> Result<Vec<CycleRecord>>;
}
