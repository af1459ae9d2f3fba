use super::board::Board;
use super::bot_controller::{BotInput, HARDER_EXPERT_CHANCE, calculate_move};
use super::error::GameError;
use super::types::{DifficultyLevel, GameOutcome, Player};
use crate::games::SessionRng;

/// One board, its difficulty setting and the random source the computer
/// draws from. This is the whole contract a front end talks to.
#[derive(Debug, Clone)]
pub struct TicTacToeGame {
    board: Board,
    difficulty: DifficultyLevel,
    harder_expert_chance: f64,
    rng: SessionRng,
}

impl TicTacToeGame {
    pub fn new(difficulty: DifficultyLevel, rng: SessionRng) -> Self {
        Self {
            board: Board::new(),
            difficulty,
            harder_expert_chance: HARDER_EXPERT_CHANCE,
            rng,
        }
    }

    pub fn with_harder_expert_chance(mut self, chance: f64) -> Self {
        self.harder_expert_chance = chance;
        self
    }

    pub fn clear_board(&mut self) {
        self.board.clear();
    }

    pub fn set_move(&mut self, player: Player, location: usize) -> Result<(), GameError> {
        self.board.set_move(player, location)
    }

    pub fn check_for_winner(&self) -> GameOutcome {
        self.board.check_for_winner()
    }

    pub fn difficulty(&self) -> DifficultyLevel {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: DifficultyLevel) {
        self.difficulty = difficulty;
    }

    /// Chooses the computer's next cell without placing it.
    pub fn select_computer_move(&mut self) -> Result<usize, GameError> {
        let input = BotInput {
            board: self.board,
            harder_expert_chance: self.harder_expert_chance,
        };
        calculate_move(self.difficulty, &input, &mut self.rng)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        self.board.empty_cells()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
