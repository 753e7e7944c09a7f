use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParkingLot::Table)
                    .if_not_exists()
                    .col(pk_auto(ParkingLot::Id))
                    .col(string(ParkingLot::Name))
                    .col(string_null(ParkingLot::Address))
                    .col(string_null(ParkingLot::PinCode))
                    .col(double(ParkingLot::Price))
                    .col(integer(ParkingLot::NumberOfSpots))
                    .col(boolean(ParkingLot::IsActive).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParkingLot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ParkingLot {
    Table,
    Id,
    Name,
    Address,
    PinCode,
    Price,
    NumberOfSpots,
    IsActive,
}
