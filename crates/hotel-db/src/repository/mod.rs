//! # Repository Module
//!
//! Database repositories for Hotel Desk.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Layout                                    │
//! │                                                                         │
//! │  Shell command                                                         │
//! │       │                                                                 │
//! │       │  db.bookings().book(&request)                                  │
//! │       ▼                                                                 │
//! │  BookingRepository                                                     │
//! │  ├── room_exists / is_booked   (existence checks, query_count)         │
//! │  ├── book                      (INSERT ... RETURNING)                  │
//! │  └── recent_for_customer ...   (query_as into hotel-core records)      │
//! │       │                                                                 │
//! │       │  SQL + bound parameters                                        │
//! │       ▼                                                                 │
//! │  StatementExecutor ──► SQLite                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`user::UserRepository`] - Sign-up and login
//! - [`hotel::HotelRepository`] - Hotels, rooms and manager checks
//! - [`booking::BookingRepository`] - Bookings and booking reports
//! - [`room_update::RoomUpdateRepository`] - Manager room edits and their log
//! - [`repair::RepairRepository`] - Maintenance companies and repair requests

pub mod booking;
pub mod hotel;
pub mod repair;
pub mod room_update;
pub mod user;

#[cfg(test)]
pub(crate) mod fixtures {
    //! Shared setup for repository tests.

    use crate::pool::{Database, DbConfig};
    use hotel_core::{Hotel, MaintenanceCompany, Room, UserType};

    /// IDs created by [`setup`].
    pub struct Fixture {
        pub db: Database,
        pub customer_id: i64,
        pub other_customer_id: i64,
        pub manager_id: i64,
        pub hotel_id: i64,
        pub other_hotel_id: i64,
        pub company_id: i64,
    }

    /// In-memory database with one manager running hotel 1 (rooms 101, 102)
    /// and hotel 2 (room 201), two customers and one maintenance company.
    pub async fn setup() -> Fixture {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let customer = db.users().create("Alice", "alice-pw").await.unwrap();
        let other = db.users().create("Bob", "bob-pw").await.unwrap();
        let manager = db
            .users()
            .create_with_type("Morgan", "manager-pw", UserType::Manager)
            .await
            .unwrap();

        for (hotel_id, name, lat, lon) in [(1, "Harbor View", 10.0, 10.0), (2, "Summit Lodge", 80.0, 80.0)] {
            db.hotels()
                .insert(&Hotel {
                    hotel_id,
                    hotel_name: name.to_string(),
                    latitude: lat,
                    longitude: lon,
                    manager_user_id: manager.user_id,
                })
                .await
                .unwrap();
        }

        for (hotel_id, room_number, price) in [(1, 101, 120), (1, 102, 150), (2, 201, 90)] {
            db.hotels()
                .insert_room(&Room {
                    hotel_id,
                    room_number,
                    price,
                    image_url: None,
                })
                .await
                .unwrap();
        }

        db.repairs()
            .insert_company(&MaintenanceCompany {
                company_id: 1,
                name: "FixIt Co".to_string(),
                address: Some("1 Main St".to_string()),
                is_certified: true,
            })
            .await
            .unwrap();

        Fixture {
            db,
            customer_id: customer.user_id,
            other_customer_id: other.user_id,
            manager_id: manager.user_id,
            hotel_id: 1,
            other_hotel_id: 2,
            company_id: 1,
        }
    }
}
