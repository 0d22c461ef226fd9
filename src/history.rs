// src/history.rs
// Validation layer in front of the operation log

use crate::calc::Operator;
use crate::db::{OperationRecord, OperationStore};
use crate::error::{CalcError, Result};
use tracing::{debug, warn};

/// Validates records before they reach storage and normalizes filter symbols.
pub struct HistoryService<S> {
    store: S,
}

impl<S: OperationStore> HistoryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Store one completed calculation.
    ///
    /// Rejects an empty id or NaN operands; the operator is stored by its
    /// display symbol.
    pub fn record(
        &self,
        timestamp_id: &str,
        operand1: f64,
        operator: Operator,
        operand2: f64,
        result: &str,
    ) -> Result<()> {
        if timestamp_id.is_empty() {
            return Err(CalcError::InvalidOperationRecord("timestamp id is empty".into()));
        }
        if operand1.is_nan() {
            return Err(CalcError::InvalidOperationRecord("first operand is NaN".into()));
        }
        if operand2.is_nan() {
            return Err(CalcError::InvalidOperationRecord("second operand is NaN".into()));
        }

        let record = OperationRecord {
            id: timestamp_id.to_string(),
            operand1,
            operator_symbol: operator.display_symbol().to_string(),
            operand2,
            result: result.to_string(),
        };
        self.store.insert(&record).inspect_err(|e| {
            warn!(id = timestamp_id, error = %e, "Failed to store operation");
        })
    }

    /// Every stored record, most recent first
    pub fn list_all(&self) -> Result<Vec<OperationRecord>> {
        self.store.list_all()
    }

    /// Records for the operator accepting `symbol`, most recent first.
    ///
    /// Input synonyms are accepted: `*` lists multiplications stored as `x`.
    pub fn list_by_operator(&self, symbol: char) -> Result<Vec<OperationRecord>> {
        let operator = Operator::parse(symbol)
            .map_err(|_| CalcError::InvalidFilterOperator(symbol.to_string()))?;
        debug!(input = %symbol, display = %operator, "Filtering history");
        self.store.filter(operator.display_symbol())
    }

    /// Most recent record, None on an empty log
    pub fn latest(&self) -> Result<Option<OperationRecord>> {
        self.store.latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::setup_test_db;
    use crate::db::Database;

    fn service(db: &Database) -> HistoryService<&Database> {
        HistoryService::new(db)
    }

    #[test]
    fn test_record_then_list() {
        let db = setup_test_db();
        let history = service(&db);
        history.record("20240101000000", 1.0, Operator::Subtract, 1.0, "0.0").unwrap();
        history.record("20240101000005", 2.0, Operator::Add, 3.0, "5.00").unwrap();

        let all = history.list_all().unwrap();
        assert_eq!(all.len(), 2);
        let first = &all[0];
        assert_eq!(first.id, "20240101000005");
        assert_eq!(first.operand1, 2.0);
        assert_eq!(first.operator_symbol, "+");
        assert_eq!(first.operand2, 3.0);
        assert_eq!(first.result, "5.00");
        assert_eq!(all[1].id, "20240101000000");
    }

    #[test]
    fn test_record_stores_display_symbol() {
        let db = setup_test_db();
        let history = service(&db);
        history.record("20240101000000", 9.0, Operator::Divide, 3.0, "3.0").unwrap();
        history.record("20240101000001", 4.0, Operator::Multiply, 2.0, "8.0").unwrap();

        let symbols: Vec<String> = history
            .list_all()
            .unwrap()
            .into_iter()
            .map(|r| r.operator_symbol)
            .collect();
        assert_eq!(symbols, ["x", "/"]);
    }

    #[test]
    fn test_record_rejects_empty_id() {
        let db = setup_test_db();
        let history = service(&db);
        let err = history.record("", 1.0, Operator::Add, 1.0, "2.0").unwrap_err();
        assert!(matches!(err, CalcError::InvalidOperationRecord(_)));
        assert_eq!(db.count().unwrap(), 0);
    }

    #[test]
    fn test_record_rejects_nan_operands() {
        let db = setup_test_db();
        let history = service(&db);
        assert!(history.record("1", f64::NAN, Operator::Add, 1.0, "NaN").is_err());
        assert!(history.record("1", 1.0, Operator::Add, f64::NAN, "NaN").is_err());
        assert_eq!(db.count().unwrap(), 0);
    }

    #[test]
    fn test_record_accepts_infinity() {
        let db = setup_test_db();
        let history = service(&db);
        history
            .record("20240101000000", f64::INFINITY, Operator::Add, 1.0, "inf")
            .unwrap();
        assert_eq!(history.latest().unwrap().unwrap().operand1, f64::INFINITY);
    }

    #[test]
    fn test_list_by_operator_filters_and_orders() {
        let db = setup_test_db();
        let history = service(&db);
        history.record("20240101000001", 1.0, Operator::Add, 1.0, "2.0").unwrap();
        history.record("20240101000002", 2.0, Operator::Multiply, 2.0, "4.0").unwrap();
        history.record("20240101000003", 3.0, Operator::Add, 3.0, "6.0").unwrap();

        let adds = history.list_by_operator('+').unwrap();
        let ids: Vec<&str> = adds.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["20240101000003", "20240101000001"]);
        assert!(adds.iter().all(|r| r.operator_symbol == "+"));

        let expected: Vec<OperationRecord> = history
            .list_all()
            .unwrap()
            .into_iter()
            .filter(|r| r.operator_symbol == "+")
            .collect();
        assert_eq!(adds, expected);
    }

    #[test]
    fn test_list_by_operator_accepts_synonyms() {
        let db = setup_test_db();
        let history = service(&db);
        history.record("20240101000001", 2.0, Operator::Multiply, 2.0, "4.0").unwrap();
        history.record("20240101000002", 8.0, Operator::Divide, 2.0, "4.0").unwrap();

        assert_eq!(history.list_by_operator('*').unwrap().len(), 1);
        assert_eq!(history.list_by_operator('x').unwrap().len(), 1);
        assert_eq!(history.list_by_operator(':').unwrap().len(), 1);
        assert!(history.list_by_operator('-').unwrap().is_empty());
    }

    #[test]
    fn test_list_by_operator_rejects_unknown_symbol() {
        let db = setup_test_db();
        let history = service(&db);
        let err = history.list_by_operator('%').unwrap_err();
        assert!(matches!(err, CalcError::InvalidFilterOperator(s) if s == "%"));
    }

    #[test]
    fn test_latest_empty_is_none() {
        let db = setup_test_db();
        assert!(service(&db).latest().unwrap().is_none());
    }
}
