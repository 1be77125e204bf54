use serde::{Deserialize, Serialize};

/// One of the two sides.
///
/// Red is the first player and yellow the second, but either may drop the first piece of a
/// game; turn order is tracked by [`Game`](crate::Game), not by the player identity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    #[display("R")]
    Red,
    #[display("Y")]
    Yellow,
}

impl Player {
    pub const ALL: [Self; 2] = [Self::Red, Self::Yellow];

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Yellow,
            Self::Yellow => Self::Red,
        }
    }

    /// Stable index for per-player tables (`Red = 0`, `Yellow = 1`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Yellow => 1,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Yellow => 'Y',
        }
    }
}

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Piece(Player),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Piece(player) => Some(player),
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Piece(player) => player.symbol(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for player in Player::ALL {
            assert_ne!(player, player.opponent());
            assert_eq!(player, player.opponent().opponent());
        }
    }

    #[test]
    fn test_indices_are_distinct() {
        assert_eq!(Player::Red.index(), 0);
        assert_eq!(Player::Yellow.index(), 1);
    }

    #[test]
    fn test_cell_player() {
        assert!(Cell::Empty.is_empty());
        assert_eq!(Cell::Empty.player(), None);
        assert_eq!(Cell::Piece(Player::Yellow).player(), Some(Player::Yellow));
        assert_eq!(Cell::Piece(Player::Red).symbol(), 'R');
    }

    #[test]
    fn test_player_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Player::Yellow).unwrap();
        assert_eq!(json, "\"yellow\"");
        let player: Player = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(player, Player::Red);
    }
}
