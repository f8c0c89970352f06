//! # Output Rendering
//!
//! Prints query results as tab-separated text or JSON.
//!
//! ## TSV Layout
//! ```text
//! hotelName       latitude        longitude        ← only when rows exist
//! Harbor View     12      18
//! Riverside Inn   30.5    22
//! Hotels within 30 units of current location: 2   ← status line
//! ```
//!
//! In JSON mode only the array is written, so the output can be piped.

use serde::Serialize;
use std::io::Write;

use crate::config::OutputFormat;
use crate::error::CliError;
use hotel_core::Tabular;

/// Writes records as a table.
pub fn write_rows<T, W>(out: &mut W, format: OutputFormat, rows: &[T]) -> Result<(), CliError>
where
    T: Tabular + Serialize,
    W: Write,
{
    match format {
        OutputFormat::Tsv => {
            if !rows.is_empty() {
                writeln!(out, "{}", T::headers().join("\t"))?;
            }
            for row in rows {
                writeln!(out, "{}", row.cells().join("\t"))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Writes a summary line after a table (TSV only).
pub fn write_status<W: Write>(out: &mut W, format: OutputFormat, line: &str) -> Result<(), CliError> {
    if format == OutputFormat::Tsv {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotel_core::{Hotel, RegularCustomer};

    fn hotel(id: i64, name: &str) -> Hotel {
        Hotel {
            hotel_id: id,
            hotel_name: name.to_string(),
            latitude: 12.0,
            longitude: 18.5,
            manager_user_id: 1,
        }
    }

    fn render<T: Tabular + Serialize>(format: OutputFormat, rows: &[T]) -> String {
        let mut out = Vec::new();
        write_rows(&mut out, format, rows).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_tsv_with_rows() {
        let text = render(OutputFormat::Tsv, &[hotel(1, "Harbor View")]);
        assert_eq!(text, "hotelName\tlatitude\tlongitude\nHarbor View\t12\t18.5\n");
    }

    #[test]
    fn test_tsv_without_rows_has_no_header() {
        let text = render::<Hotel>(OutputFormat::Tsv, &[]);
        assert!(text.is_empty());
    }

    #[test]
    fn test_json() {
        let rows = [RegularCustomer {
            customer_id: 4,
            booking_count: 2,
        }];
        let text = render(OutputFormat::Json, &rows);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["customer_id"], 4);
        assert_eq!(value[0]["booking_count"], 2);
    }

    #[test]
    fn test_status_only_in_tsv() {
        let mut out = Vec::new();
        write_status(&mut out, OutputFormat::Json, "Rooms: 2").unwrap();
        assert!(out.is_empty());

        write_status(&mut out, OutputFormat::Tsv, "Rooms: 2").unwrap();
        assert_eq!(out, b"Rooms: 2\n");
    }
}
