// ==========================================
// Medicine Import - SQLite product repository
// ==========================================
// Responsibility: transactional bulk insert into medicine_managements
// ==========================================

use crate::db::{ensure_collection, open_sqlite_connection};
use crate::domain::product::ImportRecord;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::product_repo::ProductRepository;
use async_trait::async_trait;
use rusqlite::{params, Connection, Transaction};
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// SqliteProductRepository
// ==========================================
pub struct SqliteProductRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteProductRepository {
    /// Open the store and make sure the collection exists
    ///
    /// # Parameters
    /// - db_path: database file path
    pub fn connect(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(format!("{}: {}", db_path, e)))?;
        ensure_collection(&conn)
            .map_err(|e| RepositoryError::DatabaseConnectionError(format!("{}: {}", db_path, e)))?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Build from an existing connection (collection is created if needed)
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(e.to_string()))?;
            crate::db::configure_sqlite_connection(&guard)?;
            ensure_collection(&guard)?;
        }
        Ok(Self { conn })
    }

    fn lock(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Insert the documents inside an open transaction
    fn insert_many_tx(tx: &Transaction, records: &[ImportRecord]) -> RepositoryResult<usize> {
        let mut stmt = tx.prepare(
            r#"
            INSERT INTO medicine_managements (
                medicineName, price, supplierName, sgst, mid
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )?;

        let mut count = 0;
        for record in records {
            stmt.execute(params![
                record.medicine_name,
                record.price,
                record.supplier_name,
                record.sgst,
                record.mid,
            ])?;
            count += 1;
        }

        Ok(count)
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn insert_many(&self, records: Vec<ImportRecord>) -> RepositoryResult<usize> {
        let mut conn = self.lock()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        // dropping `tx` on error rolls the whole batch back
        let count = Self::insert_many_tx(&tx, &records)?;

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(count)
    }

    async fn count(&self) -> RepositoryResult<i64> {
        let conn = self.lock()?;
        let count = conn.query_row("SELECT COUNT(*) FROM medicine_managements", [], |row| {
            row.get(0)
        })?;
        Ok(count)
    }

    async fn max_mid(&self) -> RepositoryResult<Option<i64>> {
        let conn = self.lock()?;
        let max = conn.query_row("SELECT MAX(mid) FROM medicine_managements", [], |row| {
            row.get::<_, Option<i64>>(0)
        })?;
        Ok(max)
    }
}

impl SqliteProductRepository {
    /// Read back every stored document in insertion order
    pub fn list_all(&self) -> RepositoryResult<Vec<ImportRecord>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT medicineName, price, supplierName, sgst, mid
            FROM medicine_managements
            ORDER BY _id
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(ImportRecord {
                medicine_name: row.get(0)?,
                price: row.get(1)?,
                supplier_name: row.get(2)?,
                sgst: row.get(3)?,
                mid: row.get(4)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}
