use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    LoaderTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    db::{CharacterModel, FavoriteModel, PlanetModel},
    favorite::FavoriteTarget,
};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a favorite linking the user to the target, the other target column is left null
    pub async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<FavoriteModel, DbErr> {
        let (character_id, planet_id) = match target {
            FavoriteTarget::Planet(id) => (None, Some(id)),
            FavoriteTarget::Character(id) => (Some(id), None),
        };

        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Gets all favorites of a user ordered by ID
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<FavoriteModel>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all favorites of a user along with the planet and character each references
    pub async fn get_by_user_id_with_targets(
        &self,
        user_id: i32,
    ) -> Result<
        Vec<(
            FavoriteModel,
            Option<PlanetModel>,
            Option<CharacterModel>,
        )>,
        DbErr,
    > {
        let favorites = self.get_by_user_id(user_id).await?;

        let planets = favorites
            .load_one(entity::prelude::Planet, self.db)
            .await?;
        let characters = favorites
            .load_one(entity::prelude::Character, self.db)
            .await?;

        Ok(favorites
            .into_iter()
            .zip(planets)
            .zip(characters)
            .map(|((favorite, planet), character)| (favorite, planet, character))
            .collect())
    }

    /// Finds the first favorite of the user pointing at the target
    pub async fn find_by_user_and_target(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<FavoriteModel>, DbErr> {
        let query = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id));

        let query = match target {
            FavoriteTarget::Planet(id) => query.filter(entity::favorite::Column::PlanetId.eq(id)),
            FavoriteTarget::Character(id) => {
                query.filter(entity::favorite::Column::CharacterId.eq(id))
            }
        };

        query
            .order_by_asc(entity::favorite::Column::Id)
            .one(self.db)
            .await
    }

    /// Deletes a favorite
    ///
    /// Returns OK regardless of the favorite existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
