//! # Demo Data
//!
//! Deterministic sample data for trying the shell against a fresh database.
//!
//! ## What Gets Created
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Users            4 managers, 20 customers (password "password")       │
//! │  Hotel            8 hotels on a 100 x 100 grid, 2 per manager          │
//! │  Rooms            10 per hotel, numbered 1-10                          │
//! │  Maintenance      3 companies                                          │
//! │  RoomBookings     a few per customer in May 2024                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Seeding is skipped when the database already has users.

use chrono::{Days, NaiveDate};
use tracing::{info, warn};

use crate::error::{DbError, DbResult};
use crate::executor::ResultSet;
use crate::params;
use crate::pool::Database;
use hotel_core::{BookingOutcome, BookingRequest, Hotel, MaintenanceCompany, Room, UserType};

/// Password given to every seeded account.
pub const DEMO_PASSWORD: &str = "password";

const MANAGERS: &[&str] = &["Morgan Reyes", "Priya Shah", "Tomas Lind", "Grace Okafor"];

const HOTELS: &[(&str, f64, f64)] = &[
    ("Harbor View", 12.0, 18.0),
    ("Summit Lodge", 85.0, 90.0),
    ("Riverside Inn", 30.5, 22.0),
    ("Desert Rose", 64.0, 8.5),
    ("Maple Court", 45.0, 55.0),
    ("Lakeshore Suites", 20.0, 70.0),
    ("Old Town Hotel", 72.0, 48.0),
    ("Airport Stay", 5.0, 95.0),
];

const COMPANIES: &[(&str, &str, bool)] = &[
    ("FixIt Co", "12 Foundry Rd", true),
    ("Handy Crew", "400 Elm St", false),
    ("Apex Maintenance", "9 Industrial Way", true),
];

const ROOMS_PER_HOTEL: i64 = 10;
const CUSTOMERS: usize = 20;

/// Counts of rows created by [`seed_demo_data`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub hotels: usize,
    pub rooms: usize,
    pub companies: usize,
    pub bookings: usize,
}

/// Fills an empty database with demo data.
///
/// ## Returns
/// * `Some(summary)` - Data inserted
/// * `None` - The database already had users; nothing changed
pub async fn seed_demo_data(db: &Database) -> DbResult<Option<SeedSummary>> {
    let existing = db.users().count().await?;
    if existing > 0 {
        warn!(existing, "Database already has users, skipping seed");
        return Ok(None);
    }

    let mut summary = SeedSummary::default();

    let mut manager_ids = Vec::with_capacity(MANAGERS.len());
    for name in MANAGERS {
        let manager = db
            .users()
            .create_with_type(name, DEMO_PASSWORD, UserType::Manager)
            .await?;
        manager_ids.push(manager.user_id);
        summary.users += 1;
    }

    let mut customer_ids = Vec::with_capacity(CUSTOMERS);
    for i in 1..=CUSTOMERS {
        let customer = db
            .users()
            .create(&format!("Customer {:02}", i), DEMO_PASSWORD)
            .await?;
        customer_ids.push(customer.user_id);
        summary.users += 1;
    }

    for (index, (name, latitude, longitude)) in HOTELS.iter().enumerate() {
        let hotel_id = index as i64 + 1;
        db.hotels()
            .insert(&Hotel {
                hotel_id,
                hotel_name: name.to_string(),
                latitude: *latitude,
                longitude: *longitude,
                manager_user_id: manager_ids[index % manager_ids.len()],
            })
            .await?;
        summary.hotels += 1;

        for room_number in 1..=ROOMS_PER_HOTEL {
            db.hotels()
                .insert_room(&Room {
                    hotel_id,
                    room_number,
                    price: 60 + hotel_id * 10 + room_number * 5,
                    image_url: (room_number % 3 == 0)
                        .then(|| format!("https://images.example/hotel{}/room{}.jpg", hotel_id, room_number)),
                })
                .await?;
            summary.rooms += 1;
        }
    }

    for (index, (name, address, is_certified)) in COMPANIES.iter().enumerate() {
        db.repairs()
            .insert_company(&MaintenanceCompany {
                company_id: index as i64 + 1,
                name: name.to_string(),
                address: Some(address.to_string()),
                is_certified: *is_certified,
            })
            .await?;
        summary.companies += 1;
    }

    let start = NaiveDate::from_ymd_opt(2024, 5, 1)
        .ok_or_else(|| DbError::Internal("invalid seed start date".to_string()))?;
    for (index, customer_id) in customer_ids.iter().enumerate() {
        // Earlier customers book more often so "regular customers" has a ranking
        let stays = CUSTOMERS - index;
        for stay in 0..stays.min(6) {
            let offset = (index * 3 + stay * 2) as u64;
            let request = BookingRequest {
                customer_id: *customer_id,
                hotel_id: (stay % 3) as i64 + 1,
                room_number: (index as i64 % ROOMS_PER_HOTEL) + 1,
                booking_date: start + Days::new(offset),
            };
            if let BookingOutcome::Booked(_) = db.bookings().book(&request).await? {
                summary.bookings += 1;
            }
        }
    }

    info!(
        users = summary.users,
        hotels = summary.hotels,
        rooms = summary.rooms,
        companies = summary.companies,
        bookings = summary.bookings,
        "Demo data seeded"
    );
    Ok(Some(summary))
}

/// Row counts per table, for a quick look at what a database contains.
pub async fn table_counts(db: &Database) -> DbResult<ResultSet> {
    db.executor()
        .query(
            r#"
            SELECT 'Users' AS tableName, COUNT(*) AS rowCount FROM Users
            UNION ALL SELECT 'Hotel', COUNT(*) FROM Hotel
            UNION ALL SELECT 'Rooms', COUNT(*) FROM Rooms
            UNION ALL SELECT 'MaintenanceCompany', COUNT(*) FROM MaintenanceCompany
            UNION ALL SELECT 'RoomBookings', COUNT(*) FROM RoomBookings
            UNION ALL SELECT 'RoomRepairs', COUNT(*) FROM RoomRepairs
            UNION ALL SELECT 'RoomUpdatesLog', COUNT(*) FROM RoomUpdatesLog
            "#,
            params![],
        )
        .await
}
