//! Service layer for business logic.
//!
//! Services sit between the HTTP controllers and the data repositories. They turn
//! missing records into domain errors and shape database models into API DTOs.

pub mod catalog;
pub mod favorite;
pub mod user;
