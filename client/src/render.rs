use tictactoe_engine::games::tictactoe::{
    BOARD_WIDTH, Board, FinalOutcome, Line, Mark, Player, SessionStatus,
};

pub const HUMAN_SYMBOL: char = 'X';
pub const COMPUTER_SYMBOL: char = 'O';

fn cell_text(board: &Board, index: usize, highlight: Option<Line>) -> String {
    let symbol = match board.get(index) {
        Some(Mark::Human) => HUMAN_SYMBOL,
        Some(Mark::Computer) => COMPUTER_SYMBOL,
        _ => return format!(" {} ", index + 1),
    };

    if highlight.is_some_and(|line| line.contains(&index)) {
        format!("[{}]", symbol)
    } else {
        format!(" {} ", symbol)
    }
}

/// Draws the board with empty cells showing the number used to play them.
/// Cells on a completed line are bracketed.
pub fn render_board(board: &Board) -> String {
    let highlight = board.winning_line();

    (0..BOARD_WIDTH)
        .map(|row| {
            (0..BOARD_WIDTH)
                .map(|column| cell_text(board, row * BOARD_WIDTH + column, highlight))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

pub fn status_text(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::HumanGoesFirst => "You go first.",
        SessionStatus::HumanTurn => "Your turn.",
        SessionStatus::Finished(FinalOutcome::Tie) => "It's a tie!",
        SessionStatus::Finished(FinalOutcome::Win(Player::Human)) => "You won!",
        SessionStatus::Finished(FinalOutcome::Win(Player::Computer)) => "Computer won!",
    }
}
