//! Server application core modules.
//!
//! This module contains the server side of the Holonet catalog API: configuration,
//! database access, domain services, HTTP controllers and routing, and the startup code
//! that wires them together.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
