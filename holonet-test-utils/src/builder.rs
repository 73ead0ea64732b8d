//! Declarative test builder.
//!
//! Configuration methods only queue work; tables are created and fixtures inserted
//! during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,

    users: Vec<String>,               // emails
    planets: Vec<String>,             // names
    characters: Vec<(String, Option<i32>)>, // (name, planet_id)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            users: Vec::new(),
            planets: Vec::new(),
            characters: Vec::new(),
        }
    }

    /// Create all application tables: User, Planet, Character and Favorite.
    pub fn with_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Tables are created in the order they are added, after the application tables
    /// if [`TestBuilder::with_tables`] was used.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holonet_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holonet_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Planet)
    ///     .with_table(Character)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock user with the provided email.
    ///
    /// Users are inserted in the order queued, so the first queued user becomes the
    /// current user.
    pub fn with_mock_user(mut self, email: impl Into<String>) -> Self {
        self.users.push(email.into());
        self
    }

    /// Insert a mock planet with the provided name.
    pub fn with_mock_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Insert a mock character, optionally with a homeworld.
    ///
    /// Planets are inserted before characters, so `planet_id` may refer to a planet
    /// queued with [`TestBuilder::with_mock_planet`].
    pub fn with_mock_character(mut self, name: impl Into<String>, planet_id: Option<i32>) -> Self {
        self.characters.push((name.into(), planet_id));
        self
    }

    /// Build the test context.
    ///
    /// Executes queued operations in order:
    /// 1. Creates database tables (application tables if specified, then custom tables)
    /// 2. Inserts fixtures (users, planets, characters)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::Favorite),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for email in self.users {
            setup.user().insert_mock_user(&email).await?;
        }

        for name in self.planets {
            setup.catalog().insert_mock_planet(&name).await?;
        }

        for (name, planet_id) in self.characters {
            setup.catalog().insert_mock_character(&name, planet_id).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
