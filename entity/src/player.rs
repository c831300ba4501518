//! `SeaORM` Entity for the `player` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub academy_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub address: String,
    #[sea_orm(column_type = "Double")]
    pub latitude: f64,
    #[sea_orm(column_type = "Double")]
    pub longitude: f64,
    pub image: String,
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
    #[sea_orm(has_many = "super::academy_player::Entity")]
    AcademyPlayer,
}

impl Related<super::academy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Academy.def()
    }
}

impl Related<super::academy_player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcademyPlayer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
