//! Server application models and type definitions.
//!
//! This module contains the application state shared by HTTP handlers, database model
//! type aliases, and the favorite target type used by the favorite workflows.

pub mod app;
pub mod db;
pub mod favorite;
