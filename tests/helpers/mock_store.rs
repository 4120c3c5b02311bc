// ==========================================
// In-memory product stores for pipeline tests
// ==========================================

use async_trait::async_trait;
use medicine_import::repository::{RepositoryError, RepositoryResult};
use medicine_import::{ImportRecord, ProductRepository};
use std::sync::Mutex;

/// Collects documents in memory and counts bulk-insert calls
#[derive(Default)]
pub struct MemoryProductStore {
    docs: Mutex<Vec<ImportRecord>>,
    insert_calls: Mutex<usize>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> Vec<ImportRecord> {
        self.docs.lock().unwrap().clone()
    }

    pub fn insert_calls(&self) -> usize {
        *self.insert_calls.lock().unwrap()
    }
}

#[async_trait]
impl ProductRepository for MemoryProductStore {
    async fn insert_many(&self, records: Vec<ImportRecord>) -> RepositoryResult<usize> {
        *self.insert_calls.lock().unwrap() += 1;
        let n = records.len();
        self.docs.lock().unwrap().extend(records);
        Ok(n)
    }

    async fn count(&self) -> RepositoryResult<i64> {
        Ok(self.docs.lock().unwrap().len() as i64)
    }

    async fn max_mid(&self) -> RepositoryResult<Option<i64>> {
        Ok(self.docs.lock().unwrap().iter().map(|d| d.mid).max())
    }
}

/// Rejects every bulk insert, nothing is stored
#[derive(Default)]
pub struct FailingProductStore {
    insert_calls: Mutex<usize>,
}

impl FailingProductStore {
    pub fn insert_calls(&self) -> usize {
        *self.insert_calls.lock().unwrap()
    }
}

#[async_trait]
impl ProductRepository for FailingProductStore {
    async fn insert_many(&self, _records: Vec<ImportRecord>) -> RepositoryResult<usize> {
        *self.insert_calls.lock().unwrap() += 1;
        Err(RepositoryError::DatabaseTransactionError(
            "store rejected the batch".to_string(),
        ))
    }

    async fn count(&self) -> RepositoryResult<i64> {
        Ok(0)
    }

    async fn max_mid(&self) -> RepositoryResult<Option<i64>> {
        Err(RepositoryError::DatabaseConnectionError(
            "store unreachable".to_string(),
        ))
    }
}
