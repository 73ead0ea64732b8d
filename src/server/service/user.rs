use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{
        data::user::UserRepository,
        error::{user::UserError, Error},
        model::db::UserModel,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Resolves the user that favorite operations act on behalf of.
    ///
    /// There is no authentication; the current user is the user with the lowest ID.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The current user
    /// - `Err(Error::UserError(UserError::NoCurrentUser))` - The user table is empty
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_current_user(&self) -> Result<UserModel, Error> {
        UserRepository::new(self.db)
            .get_first()
            .await?
            .ok_or_else(|| UserError::NoCurrentUser.into())
    }
}
