//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate so signatures across the
//! data and service layers stay readable.

/// Type alias for user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key, the lowest ID is treated as the current user
/// - `email` - Unique email address
/// - `password` - Stored as given, never serialized
/// - `first_name` / `last_name` - User's name
/// - `is_active` - Whether the account is active
/// - `subscription_date` - Timestamp when the user was created
pub type UserModel = entity::user::Model;

/// Type alias for planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for character database model.
///
/// `planet_id` references the character's homeworld when known.
pub type CharacterModel = entity::character::Model;

/// Type alias for favorite database model.
///
/// Links a user to either a planet or a character.
pub type FavoriteModel = entity::favorite::Model;
