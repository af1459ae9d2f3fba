use super::board::Board;
use super::error::GameError;
use super::game::TicTacToeGame;
use super::types::{DifficultyLevel, FinalOutcome, GameOutcome, Player};
use crate::log;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Fresh board; the human always opens.
    HumanGoesFirst,
    HumanTurn,
    Finished(FinalOutcome),
}

/// What happened in response to one cell activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub human_move: usize,
    pub computer_move: Option<usize>,
    pub outcome: GameOutcome,
}

/// Drives one game the way a front end would: the human opens, every
/// accepted human move is answered by the computer, and nothing is accepted
/// once the game is over.
#[derive(Debug, Clone)]
pub struct GameSession {
    game: TicTacToeGame,
    status: SessionStatus,
    last_computer_move: Option<usize>,
}

impl GameSession {
    pub fn new(game: TicTacToeGame) -> Self {
        let mut session = Self {
            game,
            status: SessionStatus::HumanGoesFirst,
            last_computer_move: None,
        };
        session.new_game();
        session
    }

    pub fn new_game(&mut self) {
        self.game.clear_board();
        self.status = SessionStatus::HumanGoesFirst;
        self.last_computer_move = None;
        log!("New game started ({} difficulty)", self.game.difficulty());
    }

    pub fn handle_cell_activated(&mut self, index: usize) -> Result<TurnReport, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        self.game.set_move(Player::Human, index)?;
        log!("Human played cell {}", index);

        let mut outcome = self.game.check_for_winner();
        let mut computer_move = None;

        if !outcome.is_over() {
            let location = self.game.select_computer_move()?;
            self.game.set_move(Player::Computer, location)?;
            log!("Computer played cell {}", location);
            computer_move = Some(location);
            outcome = self.game.check_for_winner();
        }

        self.last_computer_move = computer_move;
        self.status = match outcome.finished() {
            Some(finished) => {
                log!("Game over: {}", outcome);
                SessionStatus::Finished(finished)
            }
            None => SessionStatus::HumanTurn,
        };

        Ok(TurnReport {
            human_move: index,
            computer_move,
            outcome,
        })
    }

    pub fn set_difficulty(&mut self, difficulty: DifficultyLevel) {
        if self.game.difficulty() != difficulty {
            log!("Difficulty changed from {} to {}", self.game.difficulty(), difficulty);
        }
        self.game.set_difficulty(difficulty);
    }

    pub fn difficulty(&self) -> DifficultyLevel {
        self.game.difficulty()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn outcome(&self) -> GameOutcome {
        self.game.check_for_winner()
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.status, SessionStatus::Finished(_))
    }

    pub fn last_computer_move(&self) -> Option<usize> {
        self.last_computer_move
    }

    pub fn board(&self) -> &Board {
        self.game.board()
    }

    pub fn game(&self) -> &TicTacToeGame {
        &self.game
    }
}
