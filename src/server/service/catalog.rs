use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::{CharacterDto, PlanetDto},
    server::{
        data::{character::CharacterRepository, planet::PlanetRepository},
        error::{catalog::CatalogError, Error},
    },
};

/// Read-only access to the planets and characters of the catalog.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    /// Retrieves a planet by ID
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - Planet found
    /// - `Err(Error::CatalogError(CatalogError::PlanetNotFound))` - No planet with this ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_planet(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        let Some(planet) = PlanetRepository::new(self.db).get_by_id(planet_id).await? else {
            return Err(CatalogError::PlanetNotFound(planet_id).into());
        };

        Ok(planet.into())
    }

    pub async fn list_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let characters = CharacterRepository::new(self.db).get_all().await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    /// Retrieves a character by ID
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - Character found
    /// - `Err(Error::CatalogError(CatalogError::CharacterNotFound))` - No character with this ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_character(&self, character_id: i32) -> Result<CharacterDto, Error> {
        let Some(character) = CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?
        else {
            return Err(CatalogError::CharacterNotFound(character_id).into());
        };

        Ok(character.into())
    }
}

#[cfg(test)]
mod tests {
    use holonet_test_utils::prelude::*;

    use crate::server::{
        error::{catalog::CatalogError, Error},
        service::catalog::CatalogService,
    };

    /// Expect the planet DTO to mirror the stored planet
    #[tokio::test]
    async fn gets_existing_planet() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_tables()
            .with_mock_planet("Naboo")
            .build()
            .await?;

        let result = CatalogService::new(&test.db).get_planet(1).await;

        assert!(matches!(result, Ok(ref planet) if planet.id == 1 && planet.name == "Naboo"));

        Ok(())
    }

    /// Expect PlanetNotFound carrying the requested ID
    #[tokio::test]
    async fn fails_for_nonexistent_planet() -> Result<(), TestError> {
        let test = TestBuilder::new().with_tables().build().await?;

        let result = CatalogService::new(&test.db).get_planet(999).await;

        assert!(matches!(
            result,
            Err(Error::CatalogError(CatalogError::PlanetNotFound(999)))
        ));

        Ok(())
    }

    /// Expect CharacterNotFound carrying the requested ID
    #[tokio::test]
    async fn fails_for_nonexistent_character() -> Result<(), TestError> {
        let test = TestBuilder::new().with_tables().build().await?;

        let result = CatalogService::new(&test.db).get_character(5).await;

        assert!(matches!(
            result,
            Err(Error::CatalogError(CatalogError::CharacterNotFound(5)))
        ));

        Ok(())
    }

    /// Expect a database error rather than a not found error when tables are missing
    #[tokio::test]
    async fn fails_when_tables_missing() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = CatalogService::new(&test.db).list_characters().await;

        assert!(matches!(result, Err(Error::DbErr(_))));

        Ok(())
    }
}
