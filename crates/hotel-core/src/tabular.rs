//! # Tabular Output
//!
//! Column headers and text cells for every record the shell prints.
//!
//! Headers use the schema's column names so the terminal output reads the
//! same as a raw `SELECT` against the database would.

use crate::types::*;

/// A record that can be printed as one row of a table.
pub trait Tabular {
    /// Column headers, in projection order.
    fn headers() -> &'static [&'static str];

    /// Cell values rendered as text, one per header.
    fn cells(&self) -> Vec<String>;
}

fn optional(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "null".to_string())
}

impl Tabular for Hotel {
    fn headers() -> &'static [&'static str] {
        &["hotelName", "latitude", "longitude"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.hotel_name.clone(),
            self.latitude.to_string(),
            self.longitude.to_string(),
        ]
    }
}

impl Tabular for RoomListing {
    fn headers() -> &'static [&'static str] {
        &["hotelName", "roomNumber", "price", "imageURL"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.hotel_name.clone(),
            self.room_number.to_string(),
            self.price.to_string(),
            optional(&self.image_url),
        ]
    }
}

impl Tabular for RoomBooking {
    fn headers() -> &'static [&'static str] {
        &["bookingID", "customerID", "hotelID", "roomNumber", "bookingDate"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.booking_id.to_string(),
            self.customer_id.to_string(),
            self.hotel_id.to_string(),
            self.room_number.to_string(),
            self.booking_date.to_string(),
        ]
    }
}

impl Tabular for CustomerBooking {
    fn headers() -> &'static [&'static str] {
        &["hotelID", "roomNumber", "price", "bookingDate"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.hotel_id.to_string(),
            self.room_number.to_string(),
            self.price.to_string(),
            self.booking_date.to_string(),
        ]
    }
}

impl Tabular for RegularCustomer {
    fn headers() -> &'static [&'static str] {
        &["customerID", "count"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.customer_id.to_string(), self.booking_count.to_string()]
    }
}

impl Tabular for RoomUpdate {
    fn headers() -> &'static [&'static str] {
        &["updateNumber", "managerID", "hotelID", "roomNumber", "updatedOn"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.update_number.to_string(),
            self.manager_id.to_string(),
            self.hotel_id.to_string(),
            self.room_number.to_string(),
            self.updated_on.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]
    }
}

impl Tabular for RoomRepair {
    fn headers() -> &'static [&'static str] {
        &["repairID", "companyID", "hotelID", "roomNumber", "repairDate"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.repair_id.to_string(),
            self.company_id.to_string(),
            self.hotel_id.to_string(),
            self.room_number.to_string(),
            self.repair_date.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn assert_width<T: Tabular>(row: &T) {
        assert_eq!(T::headers().len(), row.cells().len());
    }

    #[test]
    fn test_cells_match_headers() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        assert_width(&RoomListing {
            hotel_name: "Harbor View".to_string(),
            room_number: 101,
            price: 120,
            image_url: None,
        });
        assert_width(&RoomBooking {
            booking_id: 1,
            customer_id: 4,
            hotel_id: 2,
            room_number: 101,
            booking_date: date,
        });
        assert_width(&RoomRepair {
            repair_id: 1,
            company_id: 3,
            hotel_id: 2,
            room_number: 101,
            repair_date: date,
        });
        assert_width(&RegularCustomer {
            customer_id: 4,
            booking_count: 3,
        });
    }

    #[test]
    fn test_missing_image_renders_null() {
        let listing = RoomListing {
            hotel_name: "Harbor View".to_string(),
            room_number: 101,
            price: 120,
            image_url: None,
        };
        assert_eq!(listing.cells()[3], "null");
    }

    #[test]
    fn test_customer_booking_projection() {
        let booking = CustomerBooking {
            booking_id: 9,
            hotel_id: 2,
            room_number: 101,
            price: 150,
            booking_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        };
        assert_eq!(booking.cells(), vec!["2", "101", "150", "2024-05-01"]);
    }
}
