//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances with standard test values that don't require
//! database interaction, suitable for unit tests.

use chrono::Utc;

use crate::model::{CharacterModel, FavoriteModel, PlanetModel, UserModel};

pub fn mock_user_model(id: i32, email: &str) -> UserModel {
    UserModel {
        id,
        email: email.to_string(),
        password: "password".to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        is_active: true,
        subscription_date: Utc::now().naive_utc(),
    }
}

pub fn mock_planet_model(id: i32, name: &str) -> PlanetModel {
    PlanetModel {
        id,
        name: name.to_string(),
        climate: Some("arid".to_string()),
        population: Some(200_000),
        terrain: Some("desert".to_string()),
    }
}

pub fn mock_character_model(id: i32, name: &str, planet_id: Option<i32>) -> CharacterModel {
    CharacterModel {
        id,
        name: name.to_string(),
        gender: Some("male".to_string()),
        birth_year: Some("19BBY".to_string()),
        planet_id,
    }
}

/// Create a favorite model pointing at either a character or a planet.
pub fn mock_favorite_model(
    id: i32,
    user_id: i32,
    character_id: Option<i32>,
    planet_id: Option<i32>,
) -> FavoriteModel {
    FavoriteModel {
        id,
        user_id,
        character_id,
        planet_id,
    }
}
