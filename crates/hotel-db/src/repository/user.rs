//! # User Repository
//!
//! Sign-up and login against the `Users` table.
//!
//! ## Credentials
//! Passwords are stored and compared as plaintext. Login matches the
//! `(userID, password)` pair exactly; a wrong password and an unknown user
//! are indistinguishable to the caller.

use tracing::{debug, info};

use crate::error::DbResult;
use crate::executor::StatementExecutor;
use crate::params;
use hotel_core::{User, UserType};

const USER_COLUMNS: &str = "userID AS user_id, name, password, userType AS user_type";

/// Repository for user accounts.
#[derive(Debug, Clone)]
pub struct UserRepository {
    exec: StatementExecutor,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(exec: StatementExecutor) -> Self {
        UserRepository { exec }
    }

    /// Registers a new customer account.
    ///
    /// ## Returns
    /// The created user, with the `userID` generated by the database.
    pub async fn create(&self, name: &str, password: &str) -> DbResult<User> {
        self.create_with_type(name, password, UserType::Customer).await
    }

    /// Registers an account with an explicit role (seeding managers).
    pub async fn create_with_type(
        &self,
        name: &str,
        password: &str,
        user_type: UserType,
    ) -> DbResult<User> {
        let sql = format!(
            "INSERT INTO Users (name, password, userType) VALUES (?1, ?2, ?3) RETURNING {}",
            USER_COLUMNS
        );

        let user: User = self
            .exec
            .query_one_as(&sql, params![name, password, user_type.as_str()])
            .await?;

        info!(user_id = user.user_id, user_type = user.user_type.as_str(), "User created");
        Ok(user)
    }

    /// Checks a `(userID, password)` pair.
    ///
    /// ## Returns
    /// * `Some(user_id)` - Credentials match
    /// * `None` - Unknown user or wrong password
    pub async fn authenticate(&self, user_id: i64, password: &str) -> DbResult<Option<i64>> {
        let matches = self
            .exec
            .query_count(
                "SELECT userID FROM Users WHERE userID = ?1 AND password = ?2",
                params![user_id, password],
            )
            .await?;

        debug!(user_id, matched = matches > 0, "Login attempt");
        Ok((matches > 0).then_some(user_id))
    }

    /// Gets a user by ID.
    pub async fn get_by_id(&self, user_id: i64) -> DbResult<Option<User>> {
        let sql = format!("SELECT {} FROM Users WHERE userID = ?1", USER_COLUMNS);
        self.exec.query_optional_as(&sql, params![user_id]).await
    }

    /// Counts all users.
    pub async fn count(&self) -> DbResult<i64> {
        self.exec.query_scalar("SELECT COUNT(*) FROM Users", params![]).await
    }
}
