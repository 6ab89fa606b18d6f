//! Player palette and roster entries.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed palette of crew colors. A color doubles as the player's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Blue,
    Green,
    Pink,
    Orange,
    Yellow,
    Black,
    White,
    Purple,
    Cyan,
}

impl PlayerColor {
    pub const ALL: [Self; 10] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Pink,
        Self::Orange,
        Self::Yellow,
        Self::Black,
        Self::White,
        Self::Purple,
        Self::Cyan,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Pink => "Pink",
            Self::Orange => "Orange",
            Self::Yellow => "Yellow",
            Self::Black => "Black",
            Self::White => "White",
            Self::Purple => "Purple",
            Self::Cyan => "Cyan",
        }
    }

    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Red => "#C51111",
            Self::Blue => "#132ED1",
            Self::Green => "#117F2D",
            Self::Pink => "#ED54BA",
            Self::Orange => "#EF7D0D",
            Self::Yellow => "#F5F557",
            Self::Black => "#3F474E",
            Self::White => "#D6E0F0",
            Self::Purple => "#6B2FBC",
            Self::Cyan => "#38FEDC",
        }
    }

    /// Case-sensitive lookup by display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Session-unique player identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    #[default]
    Alive,
    Dead,
}

impl PlayerStatus {
    #[must_use]
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub color: PlayerColor,
    pub status: PlayerStatus,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, color: PlayerColor) -> Self {
        Self {
            id,
            name: color.name().to_string(),
            color,
            status: PlayerStatus::Alive,
        }
    }

    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.status.is_alive()
    }

    /// Shape the reasoning service expects for a roster entry.
    #[must_use]
    pub fn payload(&self) -> PlayerPayload {
        PlayerPayload {
            name: self.name.clone(),
            color: self.color.hex().to_string(),
            status: self.status,
        }
    }
}

/// Wire form of a player: `{ name, color, status }` with the color as hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPayload {
    pub name: String,
    pub color: String,
    pub status: PlayerStatus,
}
