//! Create `greeting` table.
//! One row per persisted greeting: database-assigned id plus rendered message.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Greeting::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Greeting::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Greeting::Message).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Greeting::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Greeting {
    Table,
    Id,
    Message,
}
