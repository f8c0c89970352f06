//! # Statement Executor
//!
//! The single boundary through which every SQL statement is issued.
//!
//! ## Statement Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Statement Executor                                   │
//! │                                                                         │
//! │  Repository                                                            │
//! │       │  executor.query_count(SQL, params![hotel_id, room_number])     │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  1. Bind parameters (SqlValue → SqliteArguments)                │   │
//! │  │  2. Prepare a one-shot statement (persistent = false)           │   │
//! │  │  3. Run it on the pool's single connection                      │   │
//! │  │  4. Finalize the statement (also on error)                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ├── execute       → rows affected                                │
//! │       ├── query         → ResultSet (column names + text cells)        │
//! │       ├── query_count   → number of rows                               │
//! │       ├── query_as      → Vec<T: FromRow>                              │
//! │       └── query_scalar  → single value                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Values are always bound, never spliced into the SQL text.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Arguments, Column, Decode, FromRow, Row, Sqlite, SqlitePool, TypeInfo, ValueRef};
use tracing::debug;

use crate::error::{DbError, DbResult};

// =============================================================================
// Parameters
// =============================================================================

/// A value bound to a statement placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Integer(value as i64)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Real(value)
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(value: NaiveDate) -> Self {
        SqlValue::Text(value.format("%Y-%m-%d").to_string())
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(value: DateTime<Utc>) -> Self {
        SqlValue::Text(value.to_rfc3339())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(SqlValue::Null)
    }
}

/// Builds a parameter list from heterogeneous values.
///
/// ```rust,ignore
/// executor.query_count(SQL, params![hotel_id, room_number, date]).await?;
/// ```
#[macro_export]
macro_rules! params {
    () => { ::std::vec::Vec::<$crate::executor::SqlValue>::new() };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::executor::SqlValue::from($value)),+]
    };
}

fn bind_arguments<'q>(params: Vec<SqlValue>) -> DbResult<SqliteArguments<'q>> {
    let mut args = SqliteArguments::default();
    for value in params {
        let bound = match value {
            SqlValue::Null => args.add(Option::<String>::None),
            SqlValue::Integer(v) => args.add(v),
            SqlValue::Real(v) => args.add(v),
            SqlValue::Text(v) => args.add(v),
        };
        bound.map_err(|e| DbError::Internal(format!("failed to bind parameter: {}", e)))?;
    }
    Ok(args)
}

/// Collapses a multi-line SQL literal for log output.
fn compact(sql: &str) -> String {
    sql.split_whitespace().collect::<Vec<_>>().join(" ")
}

// =============================================================================
// Result Set
// =============================================================================

/// Rows of a read statement with every value rendered as text.
///
/// Column order follows the statement's projection and row order follows its
/// ORDER BY. `NULL` renders as `"null"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    /// Projected column names. Empty when the statement returned no rows.
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultSet {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn from_rows(rows: &[SqliteRow]) -> DbResult<Self> {
        let columns = rows
            .first()
            .map(|row| row.columns().iter().map(|c| c.name().to_string()).collect())
            .unwrap_or_default();

        let rows = rows
            .iter()
            .map(|row| (0..row.len()).map(|i| render_value(row, i)).collect())
            .collect::<DbResult<Vec<Vec<String>>>>()?;

        Ok(ResultSet { columns, rows })
    }
}

/// Renders one column of a row as text, based on the value's storage class.
fn render_value(row: &SqliteRow, index: usize) -> DbResult<String> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok("null".to_string());
    }

    let storage = raw.type_info().name().to_string();
    let rendered = match storage.as_str() {
        "INTEGER" => <i64 as Decode<Sqlite>>::decode(raw).map(|v| v.to_string()),
        "REAL" => <f64 as Decode<Sqlite>>::decode(raw).map(|v| v.to_string()),
        "BLOB" => <Vec<u8> as Decode<Sqlite>>::decode(raw).map(|v| format!("<{} bytes>", v.len())),
        _ => <String as Decode<Sqlite>>::decode(raw),
    };

    rendered.map_err(|e| DbError::Decode {
        column: row.columns()[index].name().to_string(),
        message: e.to_string(),
    })
}

// =============================================================================
// Executor
// =============================================================================

/// Issues SQL statements against the database.
///
/// Every call prepares a fresh statement that is not kept in the
/// connection's statement cache, and releases it before returning.
#[derive(Debug, Clone)]
pub struct StatementExecutor {
    pool: SqlitePool,
}

impl StatementExecutor {
    /// Creates a new executor over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        StatementExecutor { pool }
    }

    /// Runs a mutating statement (INSERT / UPDATE / DELETE / DDL).
    ///
    /// ## Returns
    /// Number of rows affected.
    pub async fn execute(&self, sql: &str, params: Vec<SqlValue>) -> DbResult<u64> {
        debug!(sql = %compact(sql), params = params.len(), "execute");

        let result = sqlx::query_with(sql, bind_arguments(params)?)
            .persistent(false)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Runs a read statement and returns every row as text.
    pub async fn query(&self, sql: &str, params: Vec<SqlValue>) -> DbResult<ResultSet> {
        debug!(sql = %compact(sql), params = params.len(), "query");

        let rows = sqlx::query_with(sql, bind_arguments(params)?)
            .persistent(false)
            .fetch_all(&self.pool)
            .await?;

        let result = ResultSet::from_rows(&rows)?;
        debug!(rows = result.len(), "query returned rows");
        Ok(result)
    }

    /// Runs a read statement and returns only the number of rows.
    ///
    /// ## Usage
    /// Existence checks: `query_count(..) > 0`.
    pub async fn query_count(&self, sql: &str, params: Vec<SqlValue>) -> DbResult<usize> {
        debug!(sql = %compact(sql), params = params.len(), "query_count");

        let rows = sqlx::query_with(sql, bind_arguments(params)?)
            .persistent(false)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.len())
    }

    /// Runs a read statement and decodes every row into `T`.
    pub async fn query_as<T>(&self, sql: &str, params: Vec<SqlValue>) -> DbResult<Vec<T>>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        debug!(sql = %compact(sql), params = params.len(), "query_as");

        let rows = sqlx::query_as_with::<Sqlite, T, _>(sql, bind_arguments(params)?)
            .persistent(false)
            .fetch_all(&self.pool)
            .await?;

        debug!(rows = rows.len(), "query_as returned rows");
        Ok(rows)
    }

    /// Runs a statement that must produce exactly one row.
    ///
    /// Used for `INSERT ... RETURNING`. No row maps to [`DbError::NotFound`].
    pub async fn query_one_as<T>(&self, sql: &str, params: Vec<SqlValue>) -> DbResult<T>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        debug!(sql = %compact(sql), params = params.len(), "query_one_as");

        let row = sqlx::query_as_with::<Sqlite, T, _>(sql, bind_arguments(params)?)
            .persistent(false)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    /// Runs a statement expected to produce at most one row.
    ///
    /// Used for lookups by key.
    pub async fn query_optional_as<T>(
        &self,
        sql: &str,
        params: Vec<SqlValue>,
    ) -> DbResult<Option<T>>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        debug!(sql = %compact(sql), params = params.len(), "query_optional_as");

        let row = sqlx::query_as_with::<Sqlite, T, _>(sql, bind_arguments(params)?)
            .persistent(false)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// Runs a statement returning a single value in the first column of
    /// exactly one row.
    pub async fn query_scalar<T>(&self, sql: &str, params: Vec<SqlValue>) -> DbResult<T>
    where
        (T,): for<'r> FromRow<'r, SqliteRow>,
        T: Send + Unpin,
    {
        debug!(sql = %compact(sql), params = params.len(), "query_scalar");

        let value = sqlx::query_scalar_with::<Sqlite, T, _>(sql, bind_arguments(params)?)
            .persistent(false)
            .fetch_one(&self.pool)
            .await?;

        Ok(value)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn executor() -> StatementExecutor {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let exec = db.executor();
        exec.execute(
            "CREATE TABLE scratch (id INTEGER PRIMARY KEY, label TEXT, score REAL)",
            params![],
        )
        .await
        .unwrap();
        exec
    }

    #[test]
    fn test_params_macro_converts_values() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let values = params![7_i64, "x", 1.5_f64, date, None::<String>, true];
        assert_eq!(
            values,
            vec![
                SqlValue::Integer(7),
                SqlValue::Text("x".to_string()),
                SqlValue::Real(1.5),
                SqlValue::Text("2024-05-01".to_string()),
                SqlValue::Null,
                SqlValue::Integer(1),
            ]
        );
    }

    #[tokio::test]
    async fn test_execute_returns_rows_affected() {
        let exec = executor().await;

        let inserted = exec
            .execute(
                "INSERT INTO scratch (label, score) VALUES (?1, ?2), (?3, ?4)",
                params!["a", 1.0_f64, "b", 2.0_f64],
            )
            .await
            .unwrap();
        assert_eq!(inserted, 2);

        let updated = exec
            .execute("UPDATE scratch SET score = score + 1 WHERE label = ?1", params!["a"])
            .await
            .unwrap();
        assert_eq!(updated, 1);
    }

    #[tokio::test]
    async fn test_query_renders_text_in_projection_order() {
        let exec = executor().await;
        exec.execute(
            "INSERT INTO scratch (label, score) VALUES ('b', 2.5), ('a', NULL)",
            params![],
        )
        .await
        .unwrap();

        let result = exec
            .query("SELECT score, label, id FROM scratch ORDER BY label", params![])
            .await
            .unwrap();

        assert_eq!(result.columns, vec!["score", "label", "id"]);
        assert_eq!(
            result.rows,
            vec![
                vec!["null".to_string(), "a".to_string(), "2".to_string()],
                vec!["2.5".to_string(), "b".to_string(), "1".to_string()],
            ]
        );
    }

    #[tokio::test]
    async fn test_query_with_no_rows() {
        let exec = executor().await;
        let result = exec
            .query("SELECT * FROM scratch WHERE id = ?1", params![1_i64])
            .await
            .unwrap();
        assert!(result.is_empty());
        assert!(result.columns.is_empty());
    }

    #[tokio::test]
    async fn test_query_count() {
        let exec = executor().await;
        exec.execute(
            "INSERT INTO scratch (label) VALUES ('a'), ('a'), ('b')",
            params![],
        )
        .await
        .unwrap();

        let count = exec
            .query_count("SELECT id FROM scratch WHERE label = ?1", params!["a"])
            .await
            .unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_bound_values_are_not_interpreted_as_sql() {
        let exec = executor().await;
        exec.execute("INSERT INTO scratch (label) VALUES ('safe')", params![])
            .await
            .unwrap();

        let hostile = "x' OR '1'='1";
        let count = exec
            .query_count("SELECT id FROM scratch WHERE label = ?1", params![hostile])
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_query_scalar() {
        let exec = executor().await;
        let total: i64 = exec
            .query_scalar("SELECT COUNT(*) FROM scratch", params![])
            .await
            .unwrap();
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn test_errors_propagate() {
        let exec = executor().await;
        let err = exec
            .execute("INSERT INTO missing_table VALUES (1)", params![])
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::QueryFailed(_)));
    }
}
