use crate::server::{
    data::player::PlayerRepository,
    model::player::{Coordinates, CreatePlayerParam, UpdatePlayerParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
