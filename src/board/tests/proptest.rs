//! Property-based tests using proptest.

use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng as _;

use crate::board::{Game, GameStatus, Piece, Square, HILL_SQUARES};

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=60usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// All (from, to) pairs the side to move could legally play.
fn legal_moves(game: &Game) -> Vec<(Square, Square)> {
    let mut moves = Vec::new();
    for (from, color, _) in game.board().pieces() {
        if color != game.side_to_move() {
            continue;
        }
        for to in game.board().destinations(from) {
            moves.push((from, to));
        }
    }
    moves
}

fn pick_move(game: &Game, rng: &mut StdRng) -> Option<(Square, Square)> {
    let moves = legal_moves(game);
    if moves.is_empty() {
        None
    } else {
        Some(moves[rng.gen_range(0..moves.len())])
    }
}

proptest! {
    /// Property: a generated destination is always accepted, and every
    /// accepted move flips the side to move.
    #[test]
    fn prop_generated_moves_apply_and_flip_turn(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            if game.status().is_finished() {
                break;
            }
            let Some((from, to)) = pick_move(&game, &mut rng) else {
                break;
            };
            let mover = game.side_to_move();
            prop_assert!(game.try_move(&from.to_string(), &to.to_string()));
            prop_assert_eq!(game.side_to_move(), mover.opponent());
        }
    }

    /// Property: a rejected move leaves board, status, and side to move
    /// untouched.
    #[test]
    fn prop_rejected_moves_leave_state_unchanged(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
        from_row in 0..8usize, from_col in 0..8usize,
        to_row in 0..8usize, to_col in 0..8usize,
    ) {
        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            if game.status().is_finished() {
                break;
            }
            let Some((from, to)) = pick_move(&game, &mut rng) else {
                break;
            };
            game.try_move(&from.to_string(), &to.to_string());
        }

        let from = Square(from_row, from_col);
        let to = Square(to_row, to_col);
        let board_before = game.board().clone();
        let side_before = game.side_to_move();
        let status_before = game.status();

        if !game.try_move(&from.to_string(), &to.to_string()) {
            prop_assert_eq!(game.board(), &board_before);
            prop_assert_eq!(game.side_to_move(), side_before);
            prop_assert_eq!(game.status(), status_before);
        }
    }

    /// Property: the status only leaves `Unfinished` when the moved piece
    /// is a king landing on a hill square, or an enemy king is captured.
    #[test]
    fn prop_status_changes_only_on_king_events(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let Some((from, to)) = pick_move(&game, &mut rng) else {
                break;
            };
            let mover = game.side_to_move();
            let moved_piece = game.board().piece_at(from).map(|(_, p)| p);
            let captured = game.board().piece_at(to);
            let status_before = game.status();

            prop_assert!(game.try_move(&from.to_string(), &to.to_string()));

            if game.status() != status_before {
                let king_captured =
                    captured == Some((mover.opponent(), Piece::King));
                let king_on_hill =
                    moved_piece == Some(Piece::King) && HILL_SQUARES.contains(&to);
                prop_assert!(king_captured || king_on_hill);
                prop_assert_eq!(game.status(), GameStatus::win_for(mover));
                break;
            }
        }
    }

    /// Property: once finished, every further attempt is rejected and the
    /// board never changes again.
    #[test]
    fn prop_terminal_status_is_absorbing(seed in seed_strategy()) {
        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);

        // Play until the game ends or goes quiet.
        for _ in 0..300 {
            if game.status().is_finished() {
                break;
            }
            let Some((from, to)) = pick_move(&game, &mut rng) else {
                break;
            };
            game.try_move(&from.to_string(), &to.to_string());
        }

        if game.status().is_finished() {
            let board_before = game.board().clone();
            for _ in 0..10 {
                let from = Square(rng.gen_range(0..8), rng.gen_range(0..8));
                let to = Square(rng.gen_range(0..8), rng.gen_range(0..8));
                prop_assert!(!game.try_move(&from.to_string(), &to.to_string()));
            }
            prop_assert_eq!(game.board(), &board_before);
        }
    }

    /// Property: slider destinations never pass the first occupied square
    /// along a ray, and that square is included only when it holds an
    /// opponent piece.
    #[test]
    fn prop_slider_destinations_respect_blockers(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            if game.status().is_finished() {
                break;
            }
            let Some((from, to)) = pick_move(&game, &mut rng) else {
                break;
            };
            game.try_move(&from.to_string(), &to.to_string());
        }

        let board = game.board();
        let sliders: Vec<_> = board
            .pieces()
            .filter(|&(_, _, piece)| piece.is_slider())
            .collect();
        for (from, color, _) in sliders {
            for to in board.destinations(from) {
                let dr = (to.row() as isize - from.row() as isize).signum();
                let dc = (to.col() as isize - from.col() as isize).signum();

                // Every square strictly between must be empty.
                let mut sq = from.offset(dr, dc).unwrap();
                while sq != to {
                    prop_assert!(board.is_empty(sq), "{from} -> {to} passes {sq}");
                    sq = sq.offset(dr, dc).unwrap();
                }

                // The destination itself is empty or an opponent.
                if let Some((occupant, _)) = board.piece_at(to) {
                    prop_assert_ne!(occupant, color);
                }
            }
        }
    }
}
