mod auth;
mod player;
