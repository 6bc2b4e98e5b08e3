pub mod achievements;
pub mod auth;
pub mod characters;
pub mod friends;
pub mod games;
pub mod health;
pub mod player;
pub mod routes;
