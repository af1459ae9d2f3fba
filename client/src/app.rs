use tictactoe_engine::games::tictactoe::{
    DifficultyLevel, GameError, GameSession, IllegalMoveReason, Position,
};

use crate::input::{Command, HELP_TEXT, parse_command};
use crate::render::{render_board, status_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppReply {
    pub output: String,
    pub flow: Flow,
    pub difficulty_changed: Option<DifficultyLevel>,
}

impl AppReply {
    fn text(output: String) -> Self {
        Self {
            output,
            flow: Flow::Continue,
            difficulty_changed: None,
        }
    }

    fn quit() -> Self {
        Self {
            output: "Bye!".to_string(),
            flow: Flow::Quit,
            difficulty_changed: None,
        }
    }
}

/// Terminal front end over one `GameSession`: turns typed lines into engine
/// calls and engine results into text.
pub struct App {
    session: GameSession,
    confirming_quit: bool,
}

impl App {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            confirming_quit: false,
        }
    }

    pub fn intro(&self) -> String {
        format!(
            "Tic-tac-toe: you are X, the computer is O ({} difficulty).\n\
             Type 'help' for commands.\n\n{}",
            self.session.difficulty(),
            self.board_and_status()
        )
    }

    pub fn handle_line(&mut self, line: &str) -> AppReply {
        if self.confirming_quit {
            return self.answer_quit(line);
        }

        match parse_command(line) {
            Ok(command) => self.handle_command(command),
            Err(message) => AppReply::text(message),
        }
    }

    fn handle_command(&mut self, command: Command) -> AppReply {
        match command {
            Command::Cell(index) => AppReply::text(self.play_cell(index)),
            Command::NewGame => {
                self.session.new_game();
                AppReply::text(self.board_and_status())
            }
            Command::Difficulty(difficulty) => {
                self.session.set_difficulty(difficulty);
                AppReply {
                    output: format!("Difficulty set to {}.", difficulty),
                    flow: Flow::Continue,
                    difficulty_changed: Some(difficulty),
                }
            }
            Command::Help => AppReply::text(HELP_TEXT.to_string()),
            Command::Quit => {
                self.confirming_quit = true;
                AppReply::text("Are you sure you want to quit? (y/n)".to_string())
            }
        }
    }

    /// Only an explicit yes leaves; any other answer goes back to the game.
    fn answer_quit(&mut self, line: &str) -> AppReply {
        self.confirming_quit = false;
        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => AppReply::quit(),
            _ => AppReply::text(format!("Back to the game.\n{}", self.board_and_status())),
        }
    }

    fn play_cell(&mut self, index: usize) -> String {
        match self.session.handle_cell_activated(index) {
            Ok(report) => {
                let mut output = String::new();
                if let Some(location) = report.computer_move
                    && let Some(position) = Position::from_index(location)
                {
                    output.push_str(&format!(
                        "Computer played cell {} (row {}, column {}).\n",
                        location + 1,
                        position.row + 1,
                        position.column + 1
                    ));
                }
                output.push_str(&self.board_and_status());
                output
            }
            Err(GameError::GameOver) => {
                "The game is over. Type 'new' to play again.".to_string()
            }
            Err(GameError::IllegalMove {
                location,
                reason: IllegalMoveReason::Occupied,
            }) => {
                format!("Cell {} is already taken, pick another one.", location + 1)
            }
            Err(err) => err.to_string(),
        }
    }

    fn board_and_status(&self) -> String {
        format!(
            "{}\n{}",
            render_board(self.session.board()),
            status_text(self.session.status())
        )
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }
}
