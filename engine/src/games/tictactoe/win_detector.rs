use super::types::{BOARD_SIZE, GameOutcome, Mark, Player};

pub type Line = [usize; 3];

pub const WINNING_LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn line_owner(cells: &[Mark; BOARD_SIZE], line: &Line) -> Option<Player> {
    let mark = cells[line[0]];
    if mark == cells[line[1]] && mark == cells[line[2]] {
        mark.player()
    } else {
        None
    }
}

pub fn check_win(cells: &[Mark; BOARD_SIZE]) -> Option<Player> {
    check_win_with_line(cells).map(|(player, _)| player)
}

/// First completed line in `WINNING_LINES` order, with its owner.
pub fn check_win_with_line(cells: &[Mark; BOARD_SIZE]) -> Option<(Player, Line)> {
    WINNING_LINES
        .iter()
        .find_map(|line| line_owner(cells, line).map(|player| (player, *line)))
}

/// Win check restricted to the lines through `index`.
pub fn check_win_at(cells: &[Mark; BOARD_SIZE], index: usize) -> Option<Player> {
    WINNING_LINES
        .iter()
        .filter(|line| line.contains(&index))
        .find_map(|line| line_owner(cells, line))
}

pub fn evaluate(cells: &[Mark; BOARD_SIZE]) -> GameOutcome {
    if let Some(player) = check_win(cells) {
        return GameOutcome::win_for(player);
    }

    if cells.iter().all(|cell| !cell.is_empty()) {
        GameOutcome::Tie
    } else {
        GameOutcome::InProgress
    }
}
