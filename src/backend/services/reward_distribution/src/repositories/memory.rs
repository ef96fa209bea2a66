use anyhow::{bail, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::report::CycleRecord;
use crate::repositories::traits::CycleReportRepository;

/// Instance-owned report store, useful for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCycleReportRepository {
    records: Arc<RwLock<BTreeMap<Uuid, CycleRecord>>>,
}

impl InMemoryCycleReportRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl CycleReportRepository for InMemoryCycleReportRepository {
    async fn store_report(&self, record: CycleRecord) -> Result<()> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            bail!("cycle report {} already stored", record.id);
        }
        records.insert(record.id, record);
        Ok(())
    }

    async fn get_report(&self, cycle_id: Uuid) -> Result<Option<CycleRecord>> {
        Ok(self.records.read().await.get(&cycle_id).cloned())
    }

    async fn list_reports(&self) -> Result<Vec<CycleRecord>> {
        let mut records: Vec<_> = self.records.read().await.values().cloned().collect();
        records.sort_by_key(|r| r.created_at);
        Ok(records)
    }
}
