//! Test fixture modules for database record creation.
//!
//! - `catalog` - Planets and characters
//! - `favorite` - Favorite planets and characters of a user
//! - `user` - Users
//! - `factory` - In-memory models that never touch the database

pub mod catalog;
pub mod factory;
pub mod favorite;
pub mod user;
