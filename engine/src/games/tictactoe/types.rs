use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const BOARD_WIDTH: usize = 3;
pub const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_WIDTH;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    Human,
    Computer,
}

impl Mark {
    pub fn player(&self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Human => Some(Player::Human),
            Mark::Computer => Some(Player::Computer),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn mark(&self) -> Mark {
        match self {
            Player::Human => Mark::Human,
            Player::Computer => Mark::Computer,
        }
    }

    pub fn opponent(&self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        player.mark()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "human"),
            Player::Computer => write!(f, "computer"),
        }
    }
}

/// Derived from board contents on demand; never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Tie,
    HumanWin,
    ComputerWin,
}

impl GameOutcome {
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::Human => GameOutcome::HumanWin,
            Player::Computer => GameOutcome::ComputerWin,
        }
    }

    pub fn is_over(&self) -> bool {
        *self != GameOutcome::InProgress
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::HumanWin => Some(Player::Human),
            GameOutcome::ComputerWin => Some(Player::Computer),
            GameOutcome::InProgress | GameOutcome::Tie => None,
        }
    }

    /// `None` while the game is still being played.
    pub fn finished(&self) -> Option<FinalOutcome> {
        match self {
            GameOutcome::InProgress => None,
            GameOutcome::Tie => Some(FinalOutcome::Tie),
            GameOutcome::HumanWin | GameOutcome::ComputerWin => {
                self.winner().map(FinalOutcome::Win)
            }
        }
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinalOutcome {
    Tie,
    Win(Player),
}

impl From<FinalOutcome> for GameOutcome {
    fn from(outcome: FinalOutcome) -> Self {
        match outcome {
            FinalOutcome::Tie => GameOutcome::Tie,
            FinalOutcome::Win(player) => GameOutcome::win_for(player),
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "in progress"),
            GameOutcome::Tie => write!(f, "tie"),
            GameOutcome::HumanWin => write!(f, "human win"),
            GameOutcome::ComputerWin => write!(f, "computer win"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyLevel {
    Easy,
    Harder,
    #[default]
    Expert,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 3] = [
        DifficultyLevel::Easy,
        DifficultyLevel::Harder,
        DifficultyLevel::Expert,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "Easy",
            DifficultyLevel::Harder => "Harder",
            DifficultyLevel::Expert => "Expert",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DifficultyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DifficultyLevel::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!(
                    "Unknown difficulty '{}', expected one of: easy, harder, expert",
                    wanted
                )
            })
    }
}

/// Row and column of a cell, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= BOARD_SIZE {
            return None;
        }
        Some(Self::new(index / BOARD_WIDTH, index % BOARD_WIDTH))
    }

    pub fn index(&self) -> Option<usize> {
        if self.row >= BOARD_WIDTH || self.column >= BOARD_WIDTH {
            return None;
        }
        Some(self.row * BOARD_WIDTH + self.column)
    }
}
