use super::board::{Board, get_available_moves};
use super::error::GameError;
use super::types::{BOARD_SIZE, DifficultyLevel, Mark, Player};
use super::win_detector::check_win_at;
use crate::games::SessionRng;

/// Probability that the Harder tier plays the Expert rules on a given turn.
pub const HARDER_EXPERT_CHANCE: f64 = 0.8;

pub struct BotInput {
    pub board: Board,
    pub harder_expert_chance: f64,
}

impl BotInput {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            harder_expert_chance: HARDER_EXPERT_CHANCE,
        }
    }
}

pub fn calculate_move(
    difficulty: DifficultyLevel,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<usize, GameError> {
    match difficulty {
        DifficultyLevel::Easy => calculate_random_move(&input.board, rng),
        DifficultyLevel::Harder => {
            if rng.chance(input.harder_expert_chance) {
                calculate_expert_move(&input.board, rng)
            } else {
                calculate_random_move(&input.board, rng)
            }
        }
        DifficultyLevel::Expert => calculate_expert_move(&input.board, rng),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Result<usize, GameError> {
    let available_moves = board.empty_cells();
    rng.choose(&available_moves).ok_or(GameError::NoMovesAvailable)
}

/// Win if possible, otherwise block the human's win, otherwise play randomly.
/// Ties between qualifying cells go to the lowest index.
pub fn calculate_expert_move(board: &Board, rng: &mut SessionRng) -> Result<usize, GameError> {
    let mut cells = *board.cells();
    let available_moves = get_available_moves(&cells);

    if available_moves.is_empty() {
        return Err(GameError::NoMovesAvailable);
    }

    if let Some(location) = find_winning_move(&mut cells, Player::Computer, &available_moves) {
        return Ok(location);
    }

    if let Some(location) = find_winning_move(&mut cells, Player::Human, &available_moves) {
        return Ok(location);
    }

    calculate_random_move(board, rng)
}

fn find_winning_move(
    cells: &mut [Mark; BOARD_SIZE],
    player: Player,
    moves: &[usize],
) -> Option<usize> {
    for &location in moves {
        cells[location] = player.mark();
        let winner = check_win_at(cells, location);
        cells[location] = Mark::Empty;

        if winner == Some(player) {
            return Some(location);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const H: Mark = Mark::Human;
    const C: Mark = Mark::Computer;

    fn input(cells: [Mark; BOARD_SIZE]) -> BotInput {
        BotInput::new(Board::from_cells(cells))
    }

    #[test]
    fn test_expert_completes_own_line() {
        let input = input([C, C, E, E, E, E, E, E, E]);

        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);
            assert_eq!(calculate_move(DifficultyLevel::Expert, &input, &mut rng), Ok(2));
        }
    }

    #[test]
    fn test_expert_blocks_human_line() {
        let input = input([H, H, E, E, E, E, E, E, E]);

        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);
            assert_eq!(calculate_move(DifficultyLevel::Expert, &input, &mut rng), Ok(2));
        }
    }

    #[test]
    fn test_expert_prefers_winning_over_blocking() {
        let input = input([H, H, E, C, C, E, E, E, E]);
        let mut rng = SessionRng::new(3);

        assert_eq!(calculate_move(DifficultyLevel::Expert, &input, &mut rng), Ok(5));
    }

    #[test]
    fn test_expert_picks_lowest_index_among_wins() {
        let input = input([C, E, C, E, H, E, C, H, H]);
        let mut rng = SessionRng::new(8);

        assert_eq!(calculate_move(DifficultyLevel::Expert, &input, &mut rng), Ok(1));
    }

    #[test]
    fn test_expert_blocks_diagonal() {
        let input = input([H, C, E, E, H, E, E, E, E]);
        let mut rng = SessionRng::new(11);

        assert_eq!(calculate_move(DifficultyLevel::Expert, &input, &mut rng), Ok(8));
    }

    #[test]
    fn test_expert_without_threats_plays_an_empty_cell() {
        let input = input([H, E, E, E, C, E, E, E, E]);
        let empty = input.board.empty_cells();

        for seed in 0..50 {
            let mut rng = SessionRng::new(seed);
            let location = calculate_move(DifficultyLevel::Expert, &input, &mut rng).unwrap();
            assert!(empty.contains(&location));
        }
    }

    #[test]
    fn test_full_board_has_no_moves_for_any_difficulty() {
        let input = input([H, C, H, H, C, C, C, H, H]);
        let mut rng = SessionRng::new(1);

        for difficulty in DifficultyLevel::ALL {
            assert_eq!(
                calculate_move(difficulty, &input, &mut rng),
                Err(GameError::NoMovesAvailable)
            );
        }
    }

    #[test]
    fn test_easy_is_roughly_uniform() {
        let input = input([H, E, E, E, C, E, E, H, E]);
        let empty = input.board.empty_cells();
        let trials = 6000;
        let mut counts = [0usize; BOARD_SIZE];
        let mut rng = SessionRng::new(2024);

        for _ in 0..trials {
            let location = calculate_move(DifficultyLevel::Easy, &input, &mut rng).unwrap();
            counts[location] += 1;
        }

        let expected = trials / empty.len();
        for (location, &count) in counts.iter().enumerate() {
            if empty.contains(&location) {
                assert!(
                    count > expected * 8 / 10 && count < expected * 12 / 10,
                    "cell {} picked {} times, expected about {}",
                    location,
                    count,
                    expected
                );
            } else {
                assert_eq!(count, 0);
            }
        }
    }

    #[test]
    fn test_easy_ignores_winning_move_sometimes() {
        let input = input([C, C, E, H, H, E, E, E, E]);
        let mut rng = SessionRng::new(77);

        let picks: Vec<usize> = (0..200)
            .map(|_| calculate_move(DifficultyLevel::Easy, &input, &mut rng).unwrap())
            .collect();

        assert!(picks.iter().any(|&location| location != 2));
    }

    #[test]
    fn test_harder_with_full_chance_plays_like_expert() {
        let mut input = input([H, H, E, E, C, E, E, E, E]);
        input.harder_expert_chance = 1.0;

        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);
            assert_eq!(calculate_move(DifficultyLevel::Harder, &input, &mut rng), Ok(2));
        }
    }

    #[test]
    fn test_harder_mixes_expert_and_random_play() {
        let input = input([H, H, E, E, C, E, E, E, E]);
        let mut rng = SessionRng::new(4242);
        let trials = 2000;

        let blocks = (0..trials)
            .filter(|_| calculate_move(DifficultyLevel::Harder, &input, &mut rng) == Ok(2))
            .count();

        // Expert rules block every time; random play hits cell 2 one time in six.
        let expected = trials as f64 * (HARDER_EXPERT_CHANCE + (1.0 - HARDER_EXPERT_CHANCE) / 6.0);
        assert!((blocks as f64 - expected).abs() < trials as f64 * 0.05);
        assert!(blocks < trials);
    }
}
