//! Data access layer repositories.
//!
//! Repositories wrap single-table SeaORM queries for each entity: lookups by primary
//! key, list-all and filter-by-equality. None of them open transactions.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
