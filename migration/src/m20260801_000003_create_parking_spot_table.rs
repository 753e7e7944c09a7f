use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000002_create_parking_lot_table::ParkingLot;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParkingSpot::Table)
                    .if_not_exists()
                    .col(pk_auto(ParkingSpot::Id))
                    .col(integer(ParkingSpot::LotId))
                    .col(string(ParkingSpot::Status).default("available"))
                    .col(boolean(ParkingSpot::IsActive).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parking_spot_lot_id")
                            .from(ParkingSpot::Table, ParkingSpot::LotId)
                            .to(ParkingLot::Table, ParkingLot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParkingSpot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ParkingSpot {
    Table,
    Id,
    LotId,
    Status,
    IsActive,
}
