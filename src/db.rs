// ==========================================
// Medicine Import - SQLite store connection
// ==========================================
// Goals:
// - one place for the PRAGMAs applied to every connection
// - create the medicine_managements collection when it is missing
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// Default busy_timeout (milliseconds)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Collection (table) holding medicine documents
pub const MEDICINE_COLLECTION: &str = "medicine_managements";

/// Apply the shared PRAGMAs to a connection
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a SQLite connection with the shared configuration
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Create the medicine collection if it does not exist yet
///
/// The table carries every field of the inventory application's product
/// schema; the importer only fills medicineName / price / supplierName /
/// sgst / mid and leaves the rest NULL.
pub fn ensure_collection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS medicine_managements (
            _id             INTEGER PRIMARY KEY AUTOINCREMENT,
            medicineName    TEXT,
            batch           TEXT,
            expiryDate      TEXT,
            price           REAL CHECK (price IS NULL OR price >= 0),
            quantity        REAL,
            sgst            REAL,
            hsn_code        TEXT,
            createdAt       TEXT,
            createdBy       TEXT,
            updatedBy       TEXT,
            updatedOn       TEXT,
            supplierName    TEXT,
            supplierAddress TEXT,
            supplierPhone   TEXT,
            mid             INTEGER
        );
        "#,
    )
}

/// Whether the medicine collection exists
pub fn has_collection(conn: &Connection) -> rusqlite::Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [MEDICINE_COLLECTION],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
