use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User,
    m20260801_000003_create_parking_spot_table::ParkingSpot,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer_null(Reservation::SpotId))
                    .col(integer(Reservation::UserId))
                    .col(
                        timestamp(Reservation::ParkingTimestamp)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Reservation::LeavingTimestamp))
                    .col(double(Reservation::ParkingCost))
                    .col(string_null(Reservation::VehicleNumber))
                    .col(string_null(Reservation::Remarks))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_spot_id")
                            .from(Reservation::Table, Reservation::SpotId)
                            .to(ParkingSpot::Table, ParkingSpot::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_user_id")
                            .from(Reservation::Table, Reservation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    SpotId,
    UserId,
    ParkingTimestamp,
    LeavingTimestamp,
    ParkingCost,
    VehicleNumber,
    Remarks,
}
