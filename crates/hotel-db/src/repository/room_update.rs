//! # Room Update Repository
//!
//! Manager edits to a room's price and image, and the `RoomUpdatesLog`
//! audit trail they leave.
//!
//! ## Update Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RoomUpdateRequest                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Hotel.managerUserID == manager_id? ── no ──► NotManager               │
//! │       │ yes                                                             │
//! │       ▼                                                                 │
//! │  UPDATE Rooms SET price, imageURL ──── 0 rows ──► UnknownRoom          │
//! │       │ 1 row                                                           │
//! │       ▼                                                                 │
//! │  INSERT INTO RoomUpdatesLog ... RETURNING updateNumber                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Updated(RoomUpdate)                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The UPDATE and the log INSERT are separate autocommitted statements.

use chrono::Utc;
use tracing::{debug, info};

use crate::error::DbResult;
use crate::executor::StatementExecutor;
use crate::params;
use hotel_core::{RoomUpdate, RoomUpdateOutcome, RoomUpdateRequest, RECENT_LIMIT};

const UPDATE_COLUMNS: &str = "updateNumber AS update_number, managerID AS manager_id, \
     hotelID AS hotel_id, roomNumber AS room_number, updatedOn AS updated_on";

/// Repository for room edits and the update log.
#[derive(Debug, Clone)]
pub struct RoomUpdateRepository {
    exec: StatementExecutor,
}

impl RoomUpdateRepository {
    /// Creates a new RoomUpdateRepository.
    pub fn new(exec: StatementExecutor) -> Self {
        RoomUpdateRepository { exec }
    }

    /// Changes a room's price and image URL on behalf of a manager.
    pub async fn update_room_info(&self, request: &RoomUpdateRequest) -> DbResult<RoomUpdateOutcome> {
        let authorized = self
            .exec
            .query_count(
                "SELECT hotelID FROM Hotel WHERE hotelID = ?1 AND managerUserID = ?2",
                params![request.hotel_id, request.manager_id],
            )
            .await?;
        if authorized == 0 {
            debug!(
                manager_id = request.manager_id,
                hotel_id = request.hotel_id,
                "Room update rejected: not the hotel's manager"
            );
            return Ok(RoomUpdateOutcome::NotManager);
        }

        let changed = self
            .exec
            .execute(
                "UPDATE Rooms SET price = ?1, imageURL = ?2 WHERE hotelID = ?3 AND roomNumber = ?4",
                params![
                    request.price,
                    request.image_url.as_str(),
                    request.hotel_id,
                    request.room_number
                ],
            )
            .await?;
        if changed == 0 {
            return Ok(RoomUpdateOutcome::UnknownRoom);
        }

        let sql = format!(
            r#"
            INSERT INTO RoomUpdatesLog (managerID, hotelID, roomNumber, updatedOn)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING {}
            "#,
            UPDATE_COLUMNS
        );
        let logged: RoomUpdate = self
            .exec
            .query_one_as(
                &sql,
                params![request.manager_id, request.hotel_id, request.room_number, Utc::now()],
            )
            .await?;

        info!(
            update_number = logged.update_number,
            manager_id = logged.manager_id,
            hotel_id = logged.hotel_id,
            room_number = logged.room_number,
            price = request.price,
            "Room updated"
        );
        Ok(RoomUpdateOutcome::Updated(logged))
    }

    /// The manager's most recent log entries, newest first.
    pub async fn recent_for_manager(&self, manager_id: i64) -> DbResult<Vec<RoomUpdate>> {
        let sql = format!(
            r#"
            SELECT {}
            FROM RoomUpdatesLog
            WHERE managerID = ?1
            ORDER BY updateNumber DESC
            LIMIT ?2
            "#,
            UPDATE_COLUMNS
        );
        self.exec
            .query_as(&sql, params![manager_id, i64::from(RECENT_LIMIT)])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fixtures::setup;

    fn request(manager_id: i64, hotel_id: i64, room_number: i64, price: i64) -> RoomUpdateRequest {
        RoomUpdateRequest {
            manager_id,
            hotel_id,
            room_number,
            price,
            image_url: "https://img.example/room.png".to_string(),
        }
    }

    #[tokio::test]
    async fn test_manager_updates_room_and_logs() {
        let fx = setup().await;

        let outcome = fx
            .db
            .room_updates()
            .update_room_info(&request(fx.manager_id, fx.hotel_id, 101, 199))
            .await
            .unwrap();
        let logged = match outcome {
            RoomUpdateOutcome::Updated(u) => u,
            other => panic!("expected update, got {:?}", other),
        };
        assert_eq!(logged.manager_id, fx.manager_id);
        assert_eq!(logged.room_number, 101);

        let room = fx.db.hotels().get_room(fx.hotel_id, 101).await.unwrap().unwrap();
        assert_eq!(room.price, 199);
        assert_eq!(room.image_url.as_deref(), Some("https://img.example/room.png"));
    }

    #[tokio::test]
    async fn test_non_manager_is_rejected() {
        let fx = setup().await;

        let outcome = fx
            .db
            .room_updates()
            .update_room_info(&request(fx.customer_id, fx.hotel_id, 101, 1))
            .await
            .unwrap();
        assert!(matches!(outcome, RoomUpdateOutcome::NotManager));

        let room = fx.db.hotels().get_room(fx.hotel_id, 101).await.unwrap().unwrap();
        assert_eq!(room.price, 120);
        assert!(fx.db.room_updates().recent_for_manager(fx.customer_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_room_is_not_logged() {
        let fx = setup().await;

        let outcome = fx
            .db
            .room_updates()
            .update_room_info(&request(fx.manager_id, fx.hotel_id, 999, 10))
            .await
            .unwrap();
        assert!(matches!(outcome, RoomUpdateOutcome::UnknownRoom));
        assert!(fx.db.room_updates().recent_for_manager(fx.manager_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_recent_updates_capped_and_descending() {
        let fx = setup().await;
        let updates = fx.db.room_updates();

        for price in 1..=7 {
            updates
                .update_room_info(&request(fx.manager_id, fx.hotel_id, 102, price))
                .await
                .unwrap();
        }

        let recent = updates.recent_for_manager(fx.manager_id).await.unwrap();
        assert_eq!(recent.len(), 5);
        let numbers: Vec<i64> = recent.iter().map(|u| u.update_number).collect();
        let mut sorted = numbers.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(numbers, sorted);
        assert_eq!(numbers[0] - numbers[4], 4);
    }
}
