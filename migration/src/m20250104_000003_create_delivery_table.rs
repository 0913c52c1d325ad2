use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Delivery::Table)
                    .if_not_exists()
                    .col(pk_auto(Delivery::Id))
                    .col(string(Delivery::Status))
                    .col(string_null(Delivery::City))
                    .col(string_null(Delivery::Street))
                    .col(string_null(Delivery::Zipcode))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Delivery::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Delivery {
    Table,
    Id,
    Status,
    City,
    Street,
    Zipcode,
}
