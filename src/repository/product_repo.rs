// ==========================================
// Medicine Import - product repository trait
// ==========================================
// Responsibility: data access for the medicine_managements collection
// Rule: no business logic, insert and read-only aggregates only
// ==========================================

use crate::domain::product::ImportRecord;
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// ProductRepository Trait
// ==========================================
// Implementors: SqliteProductRepository, in-memory mocks in tests
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert all documents in one call
    ///
    /// # Returns
    /// - Ok(usize): number of inserted documents (always `records.len()`)
    /// - Err: nothing from this call was persisted
    async fn insert_many(&self, records: Vec<ImportRecord>) -> RepositoryResult<usize>;

    /// Number of documents in the collection
    async fn count(&self) -> RepositoryResult<i64>;

    /// Highest `mid` stored so far, `None` for an empty collection
    async fn max_mid(&self) -> RepositoryResult<Option<i64>>;
}
