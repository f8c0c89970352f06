//! # Hotel Repository
//!
//! Hotels, their rooms, and the manager ownership check.
//!
//! ## Nearby Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How "hotels near me" Works                           │
//! │                                                                         │
//! │  Caller position (lat, lon)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQL: (latitude - ?1)^2 + (longitude - ?2)^2 < 30^2                    │
//! │       │   narrows the scan inside SQLite, no custom functions          │
//! │       ▼                                                                 │
//! │  Rust: hotel_core::geo::is_nearby (sqrt distance < 30.0)               │
//! │       │   exact comparison, a hotel at exactly 30.0 is excluded        │
//! │       ▼                                                                 │
//! │  Vec<Hotel> ordered by hotelID                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! SQLite has no `calculate_distance` (or `sqrt`) function to call from the
//! query, so the squared-distance prefilter plus the Rust check stand in
//! for a database-side distance filter.

use tracing::debug;

use crate::error::DbResult;
use crate::executor::StatementExecutor;
use crate::params;
use hotel_core::geo::is_nearby;
use hotel_core::{Hotel, Room, RoomListing, NEARBY_RADIUS};

const HOTEL_COLUMNS: &str = "hotelID AS hotel_id, hotelName AS hotel_name, latitude, longitude, \
     managerUserID AS manager_user_id";

/// Repository for hotels and rooms.
#[derive(Debug, Clone)]
pub struct HotelRepository {
    exec: StatementExecutor,
}

impl HotelRepository {
    /// Creates a new HotelRepository.
    pub fn new(exec: StatementExecutor) -> Self {
        HotelRepository { exec }
    }

    /// Lists hotels strictly closer than [`NEARBY_RADIUS`] to a point.
    pub async fn within_radius(&self, latitude: f64, longitude: f64) -> DbResult<Vec<Hotel>> {
        let sql = format!(
            r#"
            SELECT {}
            FROM Hotel
            WHERE (latitude - ?1) * (latitude - ?1) + (longitude - ?2) * (longitude - ?2) < ?3
            ORDER BY hotelID
            "#,
            HOTEL_COLUMNS
        );

        let candidates: Vec<Hotel> = self
            .exec
            .query_as(&sql, params![latitude, longitude, NEARBY_RADIUS * NEARBY_RADIUS])
            .await?;

        let hotels: Vec<Hotel> = candidates
            .into_iter()
            .filter(|h| is_nearby(latitude, longitude, h.latitude, h.longitude))
            .collect();

        debug!(latitude, longitude, count = hotels.len(), "Nearby hotels");
        Ok(hotels)
    }

    /// Lists every room of a hotel, joined with the hotel name.
    pub async fn rooms(&self, hotel_id: i64) -> DbResult<Vec<RoomListing>> {
        self.exec
            .query_as(
                r#"
                SELECT h.hotelName AS hotel_name,
                       r.roomNumber AS room_number,
                       r.price,
                       r.imageURL AS image_url
                FROM Rooms r
                INNER JOIN Hotel h ON h.hotelID = r.hotelID
                WHERE r.hotelID = ?1
                ORDER BY r.roomNumber
                "#,
                params![hotel_id],
            )
            .await
    }

    /// Gets a hotel by ID.
    pub async fn get_by_id(&self, hotel_id: i64) -> DbResult<Option<Hotel>> {
        let sql = format!("SELECT {} FROM Hotel WHERE hotelID = ?1", HOTEL_COLUMNS);
        self.exec.query_optional_as(&sql, params![hotel_id]).await
    }

    /// Gets a single room.
    pub async fn get_room(&self, hotel_id: i64, room_number: i64) -> DbResult<Option<Room>> {
        self.exec
            .query_optional_as(
                r#"
                SELECT hotelID AS hotel_id, roomNumber AS room_number, price, imageURL AS image_url
                FROM Rooms
                WHERE hotelID = ?1 AND roomNumber = ?2
                "#,
                params![hotel_id, room_number],
            )
            .await
    }

    /// Whether `(hotel_id, room_number)` names a room.
    pub async fn room_exists(&self, hotel_id: i64, room_number: i64) -> DbResult<bool> {
        let count = self
            .exec
            .query_count(
                "SELECT roomNumber FROM Rooms WHERE hotelID = ?1 AND roomNumber = ?2",
                params![hotel_id, room_number],
            )
            .await?;
        Ok(count > 0)
    }

    /// Whether `manager_id` is the manager of `hotel_id`.
    pub async fn is_manager(&self, manager_id: i64, hotel_id: i64) -> DbResult<bool> {
        let count = self
            .exec
            .query_count(
                "SELECT hotelID FROM Hotel WHERE hotelID = ?1 AND managerUserID = ?2",
                params![hotel_id, manager_id],
            )
            .await?;
        Ok(count > 0)
    }

    /// Inserts a hotel (seeding).
    pub async fn insert(&self, hotel: &Hotel) -> DbResult<()> {
        self.exec
            .execute(
                r#"
                INSERT INTO Hotel (hotelID, hotelName, latitude, longitude, managerUserID)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
                params![
                    hotel.hotel_id,
                    hotel.hotel_name.as_str(),
                    hotel.latitude,
                    hotel.longitude,
                    hotel.manager_user_id
                ],
            )
            .await?;
        Ok(())
    }

    /// Inserts a room (seeding).
    pub async fn insert_room(&self, room: &Room) -> DbResult<()> {
        self.exec
            .execute(
                r#"
                INSERT INTO Rooms (hotelID, roomNumber, price, imageURL)
                VALUES (?1, ?2, ?3, ?4)
                "#,
                params![room.hotel_id, room.room_number, room.price, room.image_url.clone()],
            )
            .await?;
        Ok(())
    }

    /// Counts all hotels.
    pub async fn count(&self) -> DbResult<i64> {
        self.exec.query_scalar("SELECT COUNT(*) FROM Hotel", params![]).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::fixtures::setup;
    use hotel_core::Hotel;

    #[tokio::test]
    async fn test_within_radius_excludes_boundary() {
        let fx = setup().await;
        let hotels = fx.db.hotels();

        // Hotel 3 sits at distance exactly 30 from (10, 10): (18, 24) offsets.
        hotels
            .insert(&Hotel {
                hotel_id: 3,
                hotel_name: "Boundary Inn".to_string(),
                latitude: 28.0,
                longitude: 34.0,
                manager_user_id: fx.manager_id,
            })
            .await
            .unwrap();
        // Hotel 4 sits just inside.
        hotels
            .insert(&Hotel {
                hotel_id: 4,
                hotel_name: "Corner Stay".to_string(),
                latitude: 27.9,
                longitude: 34.0,
                manager_user_id: fx.manager_id,
            })
            .await
            .unwrap();

        let found = hotels.within_radius(10.0, 10.0).await.unwrap();
        let ids: Vec<i64> = found.iter().map(|h| h.hotel_id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[tokio::test]
    async fn test_within_radius_none_nearby() {
        let fx = setup().await;
        let found = fx.db.hotels().within_radius(-500.0, -500.0).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_rooms_listing() {
        let fx = setup().await;
        let rooms = fx.db.hotels().rooms(fx.hotel_id).await.unwrap();

        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].hotel_name, "Harbor View");
        assert_eq!(rooms[0].room_number, 101);
        assert_eq!(rooms[1].price, 150);
        assert!(rooms[0].image_url.is_none());

        assert!(fx.db.hotels().rooms(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_room_exists_and_manager_check() {
        let fx = setup().await;
        let hotels = fx.db.hotels();

        assert!(hotels.room_exists(fx.hotel_id, 101).await.unwrap());
        assert!(!hotels.room_exists(fx.hotel_id, 201).await.unwrap());

        assert!(hotels.is_manager(fx.manager_id, fx.hotel_id).await.unwrap());
        assert!(!hotels.is_manager(fx.customer_id, fx.hotel_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let fx = setup().await;
        let hotel = fx.db.hotels().get_by_id(fx.other_hotel_id).await.unwrap().unwrap();
        assert_eq!(hotel.hotel_name, "Summit Lodge");
        assert!(fx.db.hotels().get_by_id(42).await.unwrap().is_none());
        assert_eq!(fx.db.hotels().count().await.unwrap(), 2);
    }
}
