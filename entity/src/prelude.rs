//! `SeaORM` Entity prelude

pub use super::academy::Entity as Academy;
pub use super::academy_player::Entity as AcademyPlayer;
pub use super::player::Entity as Player;
