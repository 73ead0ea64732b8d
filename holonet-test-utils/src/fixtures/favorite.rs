use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::FavoriteModel, TestContext};

impl TestContext {
    pub fn favorite(&self) -> FavoriteFixtures<'_> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    pub async fn insert_planet_favorite(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        self.insert(user_id, None, Some(planet_id)).await
    }

    pub async fn insert_character_favorite(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        self.insert(user_id, Some(character_id), None).await
    }

    async fn insert(
        &self,
        user_id: i32,
        character_id: Option<i32>,
        planet_id: Option<i32>,
    ) -> Result<FavoriteModel, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                character_id: ActiveValue::Set(character_id),
                planet_id: ActiveValue::Set(planet_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
