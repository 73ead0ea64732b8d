use sea_orm::DatabaseConnection;

use crate::{
    model::favorite::{FavoriteDetailDto, FavoriteDto},
    server::{
        data::{
            character::CharacterRepository, favorite::FavoriteRepository,
            planet::PlanetRepository,
        },
        error::{catalog::CatalogError, favorite::FavoriteError, Error},
        model::favorite::FavoriteTarget,
        service::user::UserService,
    },
};

/// Manages the favorite planets and characters of the current user.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the current user's favorites with the referenced planet or character embedded
    pub async fn get_favorites(&self) -> Result<Vec<FavoriteDetailDto>, Error> {
        let user = UserService::new(self.db).get_current_user().await?;

        let favorites = FavoriteRepository::new(self.db)
            .get_by_user_id_with_targets(user.id)
            .await?;

        Ok(favorites
            .into_iter()
            .map(|(favorite, planet, character)| FavoriteDetailDto {
                favorite: favorite.into(),
                planet: planet.map(Into::into),
                character: character.map(Into::into),
            })
            .collect())
    }

    /// Adds a planet or character to the current user's favorites.
    ///
    /// The duplicate check and the insert are separate statements without a transaction
    /// or unique constraint, so concurrent identical requests may both insert.
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)` - The newly created favorite
    /// - `Err(Error::UserError)` - No current user
    /// - `Err(Error::CatalogError)` - Target planet or character does not exist
    /// - `Err(Error::FavoriteError(FavoriteError::AlreadyExists))` - Target is already a favorite
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite(&self, target: FavoriteTarget) -> Result<FavoriteDto, Error> {
        let user = UserService::new(self.db).get_current_user().await?;

        self.ensure_target_exists(target).await?;

        let favorite_repo = FavoriteRepository::new(self.db);

        if let Some(existing) = favorite_repo
            .find_by_user_and_target(user.id, target)
            .await?
        {
            return Err(FavoriteError::AlreadyExists(existing).into());
        }

        let favorite = favorite_repo.create(user.id, target).await?;

        tracing::debug!(
            user_id = %user.id,
            favorite_id = %favorite.id,
            "Added favorite {}",
            target
        );

        Ok(favorite.into())
    }

    /// Removes a planet or character from the current user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite removed
    /// - `Err(Error::UserError)` - No current user
    /// - `Err(Error::FavoriteError(FavoriteError::NotFound))` - Target is not a favorite
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_favorite(&self, target: FavoriteTarget) -> Result<(), Error> {
        let user = UserService::new(self.db).get_current_user().await?;

        let favorite_repo = FavoriteRepository::new(self.db);

        let Some(favorite) = favorite_repo
            .find_by_user_and_target(user.id, target)
            .await?
        else {
            return Err(FavoriteError::NotFound(target).into());
        };

        favorite_repo.delete(favorite.id).await?;

        tracing::debug!(
            user_id = %user.id,
            favorite_id = %favorite.id,
            "Removed favorite {}",
            target
        );

        Ok(())
    }

    async fn ensure_target_exists(&self, target: FavoriteTarget) -> Result<(), Error> {
        match target {
            FavoriteTarget::Planet(id) => {
                if PlanetRepository::new(self.db).get_by_id(id).await?.is_none() {
                    return Err(CatalogError::PlanetNotFound(id).into());
                }
            }
            FavoriteTarget::Character(id) => {
                if CharacterRepository::new(self.db)
                    .get_by_id(id)
                    .await?
                    .is_none()
                {
                    return Err(CatalogError::CharacterNotFound(id).into());
                }
            }
        }

        Ok(())
    }
}
