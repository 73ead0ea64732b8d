use std::fmt;

/// The planet or character a favorite points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteTarget {
    /// Planet ID
    Planet(i32),
    /// Character ID
    Character(i32),
}

impl FavoriteTarget {
    /// ID of the targeted planet or character
    pub fn id(&self) -> i32 {
        match self {
            Self::Planet(id) | Self::Character(id) => *id,
        }
    }

    /// Name of the target kind as used in response messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Planet(_) => "planet",
            Self::Character(_) => "character",
        }
    }
}

impl fmt::Display for FavoriteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ID {}", self.kind(), self.id())
    }
}
