//! Read-only access to the hosted issue table.
//!
//! The store never writes: all mutations happen through external
//! collaborators against the same table. Every fetch is a full re-read in
//! the server-supplied order; the caller replaces its copy wholesale.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, info};

use crate::errors::StoreError;
use crate::issues::types::{Issue, IssueCategory, IssueStatus};

/// Full-table read, most recently updated first. Ordering is delegated
/// entirely to the server; the client never re-sorts.
const FETCH_ALL_SQL: &str = "SELECT id, category, description, impact, status, remarks, \
     created_at, last_updated \
     FROM issues_table \
     ORDER BY last_updated DESC";

/// Raw row as stored: category and status are label text, validated into
/// the closed enums during decode.
#[derive(Debug, FromRow)]
struct IssueRow {
    id: String,
    category: String,
    description: String,
    impact: Option<String>,
    status: Option<String>,
    remarks: Option<String>,
    created_at: Option<DateTime<Utc>>,
    last_updated: Option<DateTime<Utc>>,
}

impl IssueRow {
    fn into_issue(self) -> Result<Issue, StoreError> {
        let category =
            IssueCategory::from_label(&self.category).ok_or_else(|| StoreError::UnknownCategory {
                id: self.id.clone(),
                value: self.category.clone(),
            })?;

        let status_label = self.status.unwrap_or_default();
        let status =
            IssueStatus::from_label(&status_label).ok_or_else(|| StoreError::UnknownStatus {
                id: self.id.clone(),
                value: status_label,
            })?;

        Ok(Issue {
            id: self.id,
            category,
            description: self.description,
            impact: self.impact,
            status,
            remarks: self.remarks,
            created_at: self.created_at,
            last_updated: self.last_updated,
        })
    }
}

/// Handle to the hosted issue database.
///
/// Wraps a lazily-connected pool: construction never touches the network,
/// so the UI can come up immediately and show its connecting state while
/// the first fetch is in flight.
#[derive(Debug, Clone)]
pub struct IssueStore {
    pool: PgPool,
}

impl IssueStore {
    /// Build a store over a lazy connection pool.
    pub fn connect_lazy(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_lazy(url)
            .map_err(|e| StoreError::Connect { source: e })?;

        info!(
            event = "core.store.pool_created",
            max_connections = max_connections
        );
        Ok(Self { pool })
    }

    /// The underlying pool, for the change feed's listener connection.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Fetch every issue, most recently updated first.
    ///
    /// Returns the rows in server order. A row whose category or status
    /// label falls outside the closed enum sets fails the whole fetch;
    /// the table DDL constrains both columns, so that only happens when
    /// the table contract drifts.
    pub async fn fetch_all(&self) -> Result<Vec<Issue>, StoreError> {
        let rows: Vec<IssueRow> = sqlx::query_as(FETCH_ALL_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::Query { source: e })?;

        let issues = rows
            .into_iter()
            .map(IssueRow::into_issue)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(event = "core.store.fetch_completed", count = issues.len());
        Ok(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> IssueRow {
        IssueRow {
            id: "issue-1".to_string(),
            category: "交通与基础设施".to_string(),
            description: "村口公路破损".to_string(),
            impact: None,
            status: Some("待解决".to_string()),
            remarks: Some("已上报镇政府".to_string()),
            created_at: None,
            last_updated: Some(Utc::now()),
        }
    }

    #[test]
    fn test_row_decodes_into_issue() {
        let issue = sample_row().into_issue().unwrap();
        assert_eq!(issue.id, "issue-1");
        assert_eq!(issue.category, IssueCategory::Transportation);
        assert_eq!(issue.status, IssueStatus::Pending);
        assert_eq!(issue.remarks.as_deref(), Some("已上报镇政府"));
    }

    #[test]
    fn test_unknown_category_is_decode_error() {
        let mut row = sample_row();
        row.category = "roads".to_string();

        let err = row.into_issue().unwrap_err();
        assert!(matches!(
            err,
            StoreError::UnknownCategory { ref id, ref value } if id == "issue-1" && value == "roads"
        ));
    }

    #[test]
    fn test_unknown_status_is_decode_error() {
        let mut row = sample_row();
        row.status = Some("done".to_string());

        let err = row.into_issue().unwrap_err();
        assert!(matches!(err, StoreError::UnknownStatus { .. }));
    }

    #[test]
    fn test_null_status_is_decode_error() {
        let mut row = sample_row();
        row.status = None;

        let err = row.into_issue().unwrap_err();
        assert!(matches!(
            err,
            StoreError::UnknownStatus { ref value, .. } if value.is_empty()
        ));
    }

    #[test]
    fn test_fetch_sql_orders_server_side() {
        assert!(FETCH_ALL_SQL.contains("ORDER BY last_updated DESC"));
        assert!(FETCH_ALL_SQL.contains("FROM issues_table"));
    }

    #[tokio::test]
    async fn test_connect_lazy_does_not_touch_network() {
        // connect_lazy only parses the URL; a bogus host must still succeed.
        let store = IssueStore::connect_lazy("postgres://nobody@nowhere.invalid/board", 2);
        assert!(store.is_ok());
    }
}
