use crate::server::{data::academy::AcademyRepository, model::academy::CreateAcademyParam};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod get_all;
