use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CharacterModel, PlanetModel},
    TestContext,
};

impl TestContext {
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    /// Insert a planet with the provided name and fixed climate, population & terrain.
    pub async fn insert_mock_planet(&self, name: &str) -> Result<PlanetModel, TestError> {
        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                climate: ActiveValue::Set(Some("arid".to_string())),
                population: ActiveValue::Set(Some(200_000)),
                terrain: ActiveValue::Set(Some("desert".to_string())),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a character with the provided name and optional homeworld.
    pub async fn insert_mock_character(
        &self,
        name: &str,
        planet_id: Option<i32>,
    ) -> Result<CharacterModel, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                gender: ActiveValue::Set(Some("male".to_string())),
                birth_year: ActiveValue::Set(Some("19BBY".to_string())),
                planet_id: ActiveValue::Set(planet_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
