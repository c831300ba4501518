use sea_orm_migration::{prelude::*, schema::*};

use super::m20261019_000001_create_academy_table::Academy;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(integer(Player::AcademyId))
                    .col(string(Player::Title))
                    .col(text(Player::Description))
                    .col(string(Player::Address))
                    .col(double(Player::Latitude))
                    .col(double(Player::Longitude))
                    .col(string(Player::Image))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_academy_id")
                            .from(Player::Table, Player::AcademyId)
                            .to(Academy::Table, Academy::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    AcademyId,
    Title,
    Description,
    Address,
    Latitude,
    Longitude,
    Image,
}
