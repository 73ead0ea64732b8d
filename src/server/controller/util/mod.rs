//! Utilities shared by controllers.

pub mod id_path;
