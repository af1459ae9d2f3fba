mod board;
mod bot_controller;
mod error;
mod game;
mod session;
mod session_manager;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves, is_valid_move};
pub use bot_controller::{
    BotInput, HARDER_EXPERT_CHANCE, calculate_expert_move, calculate_move,
};
pub use error::{GameError, IllegalMoveReason};
pub use game::TicTacToeGame;
pub use session::{GameSession, SessionStatus, TurnReport};
pub use session_manager::{SessionId, SessionManager, SessionSnapshot};
pub use types::{
    BOARD_SIZE, BOARD_WIDTH, DifficultyLevel, FinalOutcome, GameOutcome, Mark, Player, Position,
};
pub use win_detector::{Line, WINNING_LINES, check_win, check_win_with_line};
