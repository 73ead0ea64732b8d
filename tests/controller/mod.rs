//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, verifying status codes for
//! successful lookups, missing records and the favorite workflows.

mod catalog;
mod favorite;
mod user;

use holonet::server::{controller::util::id_path::IdPath, model::app::AppState};
use holonet_test_utils::prelude::*;
