use tictactoe_engine::games::tictactoe::{BOARD_SIZE, BOARD_WIDTH, DifficultyLevel, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Cell(usize),
    NewGame,
    Difficulty(DifficultyLevel),
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  1-9                  play a cell (numbered left to right, top to bottom)
  <row> <col>          play a cell by row and column, each 1-3
  new, n               start a new game
  difficulty <level>   set difficulty: easy, harder or expert (alias: d)
  help, h              show this help
  quit, q              leave the game (asks to confirm)";

/// Turns one line of user input into a command. Cells are numbered from 1 for
/// the user and converted to zero-based indices here.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let words: Vec<&str> = line.split_whitespace().collect();

    match words.as_slice() {
        [] => Err("Enter a cell number 1-9, or 'help' for commands".to_string()),
        [word] => parse_single_word(word),
        ["difficulty" | "d", level] => level.parse().map(Command::Difficulty),
        ["difficulty" | "d", ..] => Err("Usage: difficulty <easy|harder|expert>".to_string()),
        [row, column] => parse_row_column(row, column),
        _ => Err(format!("Unknown command '{}'", line.trim())),
    }
}

fn parse_single_word(word: &str) -> Result<Command, String> {
    match word.to_ascii_lowercase().as_str() {
        "new" | "n" => Ok(Command::NewGame),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        "difficulty" | "d" => Err("Usage: difficulty <easy|harder|expert>".to_string()),
        other => match other.parse::<usize>() {
            Ok(number) if (1..=BOARD_SIZE).contains(&number) => Ok(Command::Cell(number - 1)),
            Ok(_) => Err(format!("Cell number must be between 1 and {}", BOARD_SIZE)),
            Err(_) => Err(format!("Unknown command '{}'", word)),
        },
    }
}

fn parse_row_column(row: &str, column: &str) -> Result<Command, String> {
    let parse = |value: &str| -> Result<usize, String> {
        match value.parse::<usize>() {
            Ok(number) if (1..=BOARD_WIDTH).contains(&number) => Ok(number - 1),
            _ => Err(format!(
                "Row and column must be numbers between 1 and {}",
                BOARD_WIDTH
            )),
        }
    };

    let position = Position::new(parse(row)?, parse(column)?);
    position
        .index()
        .map(Command::Cell)
        .ok_or_else(|| "Position is outside the board".to_string())
}
