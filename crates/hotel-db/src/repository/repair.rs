//! # Repair Repository
//!
//! Maintenance companies and the repair requests filed against rooms.

use tracing::info;

use crate::error::DbResult;
use crate::executor::StatementExecutor;
use crate::params;
use hotel_core::{MaintenanceCompany, RepairRequest, RoomRepair};

const REPAIR_COLUMNS: &str = "repairID AS repair_id, companyID AS company_id, \
     hotelID AS hotel_id, roomNumber AS room_number, repairDate AS repair_date";

/// Repository for repair requests.
#[derive(Debug, Clone)]
pub struct RepairRepository {
    exec: StatementExecutor,
}

impl RepairRepository {
    /// Creates a new RepairRepository.
    pub fn new(exec: StatementExecutor) -> Self {
        RepairRepository { exec }
    }

    /// Files a repair request for a room.
    ///
    /// An unknown company or room fails with
    /// [`DbError::ForeignKeyViolation`](crate::DbError::ForeignKeyViolation).
    pub async fn place(&self, request: &RepairRequest) -> DbResult<RoomRepair> {
        let sql = format!(
            r#"
            INSERT INTO RoomRepairs (companyID, hotelID, roomNumber, repairDate)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING {}
            "#,
            REPAIR_COLUMNS
        );

        let repair: RoomRepair = self
            .exec
            .query_one_as(
                &sql,
                params![
                    request.company_id,
                    request.hotel_id,
                    request.room_number,
                    request.repair_date
                ],
            )
            .await?;

        info!(
            repair_id = repair.repair_id,
            company_id = repair.company_id,
            hotel_id = repair.hotel_id,
            room_number = repair.room_number,
            "Repair request placed"
        );
        Ok(repair)
    }

    /// Every repair request filed for a hotel, oldest first.
    pub async fn history_for_hotel(&self, hotel_id: i64) -> DbResult<Vec<RoomRepair>> {
        let sql = format!(
            "SELECT {} FROM RoomRepairs WHERE hotelID = ?1 ORDER BY repairID",
            REPAIR_COLUMNS
        );
        self.exec.query_as(&sql, params![hotel_id]).await
    }

    /// Lists maintenance companies.
    pub async fn companies(&self) -> DbResult<Vec<MaintenanceCompany>> {
        self.exec
            .query_as(
                r#"
                SELECT companyID AS company_id, name, address, isCertified AS is_certified
                FROM MaintenanceCompany
                ORDER BY companyID
                "#,
                params![],
            )
            .await
    }

    /// Inserts a maintenance company (seeding).
    pub async fn insert_company(&self, company: &MaintenanceCompany) -> DbResult<()> {
        self.exec
            .execute(
                r#"
                INSERT INTO MaintenanceCompany (companyID, name, address, isCertified)
                VALUES (?1, ?2, ?3, ?4)
                "#,
                params![
                    company.company_id,
                    company.name.as_str(),
                    company.address.clone(),
                    company.is_certified
                ],
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::repository::fixtures::setup;
    use chrono::NaiveDate;

    fn request(company_id: i64, hotel_id: i64, room_number: i64) -> RepairRequest {
        RepairRequest {
            company_id,
            hotel_id,
            room_number,
            repair_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_place_and_history() {
        let fx = setup().await;
        let repairs = fx.db.repairs();

        let first = repairs.place(&request(fx.company_id, fx.hotel_id, 101)).await.unwrap();
        let second = repairs.place(&request(fx.company_id, fx.hotel_id, 102)).await.unwrap();
        repairs
            .place(&request(fx.company_id, fx.other_hotel_id, 201))
            .await
            .unwrap();

        assert!(second.repair_id > first.repair_id);

        let history = repairs.history_for_hotel(fx.hotel_id).await.unwrap();
        let rooms: Vec<i64> = history.iter().map(|r| r.room_number).collect();
        assert_eq!(rooms, vec![101, 102]);
        assert_eq!(history[0].repair_date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[tokio::test]
    async fn test_unknown_company_rejected() {
        let fx = setup().await;
        let err = fx
            .db
            .repairs()
            .place(&request(77, fx.hotel_id, 101))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_companies() {
        let fx = setup().await;
        let companies = fx.db.repairs().companies().await.unwrap();
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].name, "FixIt Co");
        assert!(companies[0].is_certified);
    }
}
