//! # Session
//!
//! Everything one run of the shell carries between commands: the database
//! handle, the logged-in user, and the chosen output format.
//!
//! ## Lifecycle
//! ```text
//! Session::new(db) ──► log_in(id) ──► commands ... ──► log_out() ──► teardown()
//!       │                                                                │
//!       └──────────── id: Uuid (recorded on every log line) ─────────────┘
//! ```

use tracing::{debug, info};
use uuid::Uuid;

use crate::config::OutputFormat;
use hotel_db::Database;

/// State of one interactive session.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    db: Database,
    format: OutputFormat,
    user_id: Option<i64>,
}

impl Session {
    /// Starts a session over an open database.
    pub fn new(db: Database, format: OutputFormat) -> Self {
        let id = Uuid::new_v4();
        debug!(session = %id, "Session started");
        Session {
            id,
            db,
            format,
            user_id: None,
        }
    }

    /// Correlation ID for log output.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// The logged-in user, if any.
    pub fn user_id(&self) -> Option<i64> {
        self.user_id
    }

    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
    }

    /// Records a successful login.
    pub fn log_in(&mut self, user_id: i64) {
        info!(session = %self.id, user_id, "User logged in");
        self.user_id = Some(user_id);
    }

    /// Clears the logged-in user, returning who it was.
    pub fn log_out(&mut self) -> Option<i64> {
        let previous = self.user_id.take();
        if let Some(user_id) = previous {
            info!(session = %self.id, user_id, "User logged out");
        }
        previous
    }

    /// Logs out and closes the database. Safe to call more than once.
    pub async fn teardown(&mut self) {
        self.log_out();
        self.db.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotel_db::DbConfig;

    async fn session() -> Session {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        Session::new(db, OutputFormat::Tsv)
    }

    #[tokio::test]
    async fn test_login_logout() {
        let mut session = session().await;
        assert!(!session.is_logged_in());

        session.log_in(3);
        assert_eq!(session.user_id(), Some(3));

        assert_eq!(session.log_out(), Some(3));
        assert_eq!(session.log_out(), None);
        assert!(!session.is_logged_in());
    }

    #[tokio::test]
    async fn test_teardown_is_idempotent() {
        let mut session = session().await;
        session.log_in(1);

        session.teardown().await;
        session.teardown().await;

        assert!(session.db().is_closed());
        assert!(!session.is_logged_in());
    }
}
