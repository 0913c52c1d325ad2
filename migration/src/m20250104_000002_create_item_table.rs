use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(pk_auto(Item::Id))
                    .col(string(Item::Dtype))
                    .col(string(Item::Name))
                    .col(integer(Item::Price))
                    .col(integer(Item::StockQuantity))
                    // Book
                    .col(string_null(Item::Author))
                    .col(string_null(Item::Isbn))
                    // Album
                    .col(string_null(Item::Artist))
                    .col(string_null(Item::Etc))
                    // Movie
                    .col(string_null(Item::Director))
                    .col(string_null(Item::Actor))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Item::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Item {
    Table,
    Id,
    Dtype,
    Name,
    Price,
    StockQuantity,
    Author,
    Isbn,
    Artist,
    Etc,
    Director,
    Actor,
}
