use super::error::{GameError, IllegalMoveReason};
use super::types::{BOARD_SIZE, GameOutcome, Mark, Player};
use super::win_detector::{Line, check_win_with_line, evaluate};

/// The 3x3 grid, indexed 0..9 in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from raw cells. Used to set up positions directly.
    #[cfg(test)]
    pub(crate) fn from_cells(cells: [Mark; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn clear(&mut self) {
        self.cells = [Mark::Empty; BOARD_SIZE];
    }

    pub fn set_move(&mut self, player: Player, location: usize) -> Result<(), GameError> {
        if !is_valid_move(&self.cells, location) {
            let reason = if location >= BOARD_SIZE {
                IllegalMoveReason::OutOfRange
            } else {
                IllegalMoveReason::Occupied
            };
            return Err(GameError::IllegalMove { location, reason });
        }

        self.cells[location] = player.mark();
        Ok(())
    }

    pub fn get(&self, location: usize) -> Option<Mark> {
        self.cells.get(location).copied()
    }

    pub fn cells(&self) -> &[Mark; BOARD_SIZE] {
        &self.cells
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        get_available_moves(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn check_for_winner(&self) -> GameOutcome {
        evaluate(&self.cells)
    }

    pub fn winning_line(&self) -> Option<Line> {
        check_win_with_line(&self.cells).map(|(_, line)| line)
    }
}

pub fn get_available_moves(cells: &[Mark; BOARD_SIZE]) -> Vec<usize> {
    cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(cells: &[Mark; BOARD_SIZE], location: usize) -> bool {
    cells.get(location).is_some_and(|cell| cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_has_all_cells_empty_in_order() {
        let board = Board::new();

        assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_clear_resets_played_board() {
        let mut board = Board::new();
        board.set_move(Player::Human, 0).unwrap();
        board.set_move(Player::Computer, 4).unwrap();

        board.clear();

        assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());
        assert_eq!(board.check_for_winner(), GameOutcome::InProgress);
    }

    #[test]
    fn test_set_move_marks_cell() {
        let mut board = Board::new();

        board.set_move(Player::Computer, 7).unwrap();

        assert_eq!(board.get(7), Some(Mark::Computer));
        assert!(!board.empty_cells().contains(&7));
    }

    #[test]
    fn test_set_move_on_occupied_cell_is_rejected_without_change() {
        let mut board = Board::new();
        board.set_move(Player::Human, 3).unwrap();
        let before = board;

        for player in [Player::Human, Player::Computer] {
            let result = board.set_move(player, 3);

            assert_eq!(
                result,
                Err(GameError::IllegalMove {
                    location: 3,
                    reason: IllegalMoveReason::Occupied
                })
            );
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_set_move_out_of_range_is_rejected() {
        let mut board = Board::new();

        let result = board.set_move(Player::Human, 9);

        assert_eq!(
            result,
            Err(GameError::IllegalMove {
                location: 9,
                reason: IllegalMoveReason::OutOfRange
            })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        assert_eq!(Board::new().get(9), None);
    }

    #[test]
    fn test_outcome_never_regresses_along_a_game() {
        let mut board = Board::new();
        let moves = [
            (Player::Human, 0),
            (Player::Computer, 1),
            (Player::Human, 3),
            (Player::Computer, 4),
            (Player::Human, 6),
        ];
        let mut outcomes = Vec::new();

        for (player, location) in moves {
            board.set_move(player, location).unwrap();
            outcomes.push(board.check_for_winner());
        }

        assert_eq!(
            outcomes,
            vec![
                GameOutcome::InProgress,
                GameOutcome::InProgress,
                GameOutcome::InProgress,
                GameOutcome::InProgress,
                GameOutcome::HumanWin,
            ]
        );
        assert_eq!(board.winning_line(), Some([0, 3, 6]));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        for location in 0..9 {
            assert!(!board.is_full());
            let player = if location % 2 == 0 {
                Player::Human
            } else {
                Player::Computer
            };
            board.set_move(player, location).unwrap();
        }

        assert!(board.is_full());
    }
}
