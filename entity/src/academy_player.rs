//! `SeaORM` Entity for the `academy_player` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "academy_player")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub academy_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub player_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::academy::Entity",
        from = "Column::AcademyId",
        to = "super::academy::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Academy,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Player,
}

impl Related<super::academy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Academy.def()
    }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
