// src/db/operations.rs
// Operation log queries

use rusqlite::{Connection, OptionalExtension, params};

use super::schema::COLUMNS;
use super::types::OperationRecord;

/// Parse OperationRecord from a rusqlite Row with standard column order:
/// (fecha, num_1, operador, num_2, resultado)
pub fn parse_operation_row(row: &rusqlite::Row) -> rusqlite::Result<OperationRecord> {
    Ok(OperationRecord {
        id: row.get(0)?,
        operand1: row.get(1)?,
        operator_symbol: row.get(2)?,
        operand2: row.get(3)?,
        result: row.get(4)?,
    })
}

/// Append one record. No uniqueness check: ids may repeat within a second.
pub fn insert_operation_sync(conn: &Connection, record: &OperationRecord) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO Calculadora (fecha, num_1, operador, num_2, resultado) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            record.id,
            record.operand1,
            record.operator_symbol,
            record.operand2,
            record.result
        ],
    )?;
    Ok(())
}

/// All records, most recent first.
///
/// Rows sharing a timestamp come back newest insert first.
pub fn list_operations_sync(conn: &Connection) -> rusqlite::Result<Vec<OperationRecord>> {
    let sql = format!("SELECT {COLUMNS} FROM Calculadora ORDER BY fecha DESC, rowid DESC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], parse_operation_row)?;
    rows.collect()
}

/// Records stored with exactly `symbol`, most recent first
pub fn filter_operations_sync(
    conn: &Connection,
    symbol: &str,
) -> rusqlite::Result<Vec<OperationRecord>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM Calculadora WHERE operador = ?1 ORDER BY fecha DESC, rowid DESC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([symbol], parse_operation_row)?;
    rows.collect()
}

/// Most recent record, if any
pub fn latest_operation_sync(conn: &Connection) -> rusqlite::Result<Option<OperationRecord>> {
    let sql = format!("SELECT {COLUMNS} FROM Calculadora ORDER BY fecha DESC, rowid DESC LIMIT 1");
    conn.query_row(&sql, [], parse_operation_row).optional()
}

/// Number of stored records
pub fn count_operations_sync(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM Calculadora", [], |row| row.get(0))
}
