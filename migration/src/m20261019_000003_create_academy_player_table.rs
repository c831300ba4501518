use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261019_000001_create_academy_table::Academy, m20261019_000002_create_player_table::Player,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AcademyPlayer::Table)
                    .if_not_exists()
                    .col(integer(AcademyPlayer::AcademyId))
                    .col(integer(AcademyPlayer::PlayerId))
                    .primary_key(
                        Index::create()
                            .col(AcademyPlayer::AcademyId)
                            .col(AcademyPlayer::PlayerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_academy_player_academy_id")
                            .from(AcademyPlayer::Table, AcademyPlayer::AcademyId)
                            .to(Academy::Table, Academy::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_academy_player_player_id")
                            .from(AcademyPlayer::Table, AcademyPlayer::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AcademyPlayer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AcademyPlayer {
    Table,
    AcademyId,
    PlayerId,
}
