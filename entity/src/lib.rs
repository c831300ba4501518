//! `SeaORM` Entity definitions for the academy roster schema.

pub mod prelude;

pub mod academy;
pub mod academy_player;
pub mod player;
