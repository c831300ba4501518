use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Academy::Table)
                    .if_not_exists()
                    .col(pk_auto(Academy::Id))
                    .col(string(Academy::Name))
                    .col(string_uniq(Academy::Email))
                    .col(string(Academy::Password))
                    .col(string(Academy::Image))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Academy::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Academy {
    Table,
    Id,
    Name,
    Email,
    Password,
    Image,
}
