use crate::server::{
    data::academy_player::AcademyPlayerRepository,
    error::{player::PlayerError, AppError},
    model::player::{Coordinates, CreatePlayerParam, UpdatePlayerParam},
    service::player::PlayerService,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod get;

/// Player fields from the worked example: title "T", description "a valid desc", address "addr".
fn example_param() -> CreatePlayerParam {
    CreatePlayerParam {
        title: "T".to_string(),
        description: "a valid desc".to_string(),
        address: "addr".to_string(),
        location: Coordinates {
            lat: 45.188529,
            lng: 5.724524,
        },
        image: "images/t.png".to_string(),
    }
}
