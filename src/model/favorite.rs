use serde::{Deserialize, Serialize};

use crate::model::catalog::{CharacterDto, PlanetDto};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub character_id: Option<i32>,
    pub planet_id: Option<i32>,
}

impl From<entity::favorite::Model> for FavoriteDto {
    fn from(favorite: entity::favorite::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            character_id: favorite.character_id,
            planet_id: favorite.planet_id,
        }
    }
}

/// A favorite with its planet or character embedded
///
/// `planet` and `character` are omitted entirely when the favorite does not
/// reference them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteDetailDto {
    #[serde(flatten)]
    pub favorite: FavoriteDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planet: Option<PlanetDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<CharacterDto>,
}

/// The response when a favorite is added twice
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteExistsDto {
    pub msg: String,
    /// The favorite that already exists
    pub favorite: FavoriteDto,
}

/// Message naming the planet or character a favorite operation targeted
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteTargetDto {
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planet_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_id: Option<i32>,
}
