//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main holonet crate to keep tests consistent.

pub type UserModel = entity::user::Model;

pub type PlanetModel = entity::planet::Model;

pub type CharacterModel = entity::character::Model;

pub type FavoriteModel = entity::favorite::Model;
