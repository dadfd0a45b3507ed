//! Perft node counting over the legal move generator.
//!
//! All walkers use make/undo on a single `GameState`; the multi-threaded
//! variant gives each root move its own clone.

use std::thread;

use log::debug;

use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf count at `depth` plies.
pub fn perft(game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game_state.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        game_state.apply_move(mv);
        nodes += perft(game_state, depth - 1);
        game_state.undo_last();
    }
    nodes
}

/// Leaf count plus per-leaf classification of the move that reached it.
pub fn perft_detailed(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in game_state.legal_moves() {
        game_state.apply_move(mv);
        if depth == 1 {
            total.merge(classify_leaf(game_state, &mv));
        } else {
            total.merge(perft_detailed(game_state, depth - 1));
        }
        game_state.undo_last();
    }
    total
}

fn classify_leaf(game_state: &mut GameState, mv: &Move) -> PerftCounts {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };

    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.is_promotion() {
        counts.promotions += 1;
    }
    if game_state.is_in_check() {
        counts.checks += 1;
        if game_state.legal_moves().is_empty() {
            counts.checkmates += 1;
        }
    }

    counts
}

/// Per-root-move leaf counts, in generation order.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut divided = Vec::new();
    for mv in game_state.legal_moves() {
        game_state.apply_move(mv);
        divided.push((mv, perft(game_state, depth - 1)));
        game_state.undo_last();
    }
    divided
}

/// Same count as `perft`, with each root move searched on its own scoped
/// thread.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> u64 {
    if depth <= 1 {
        return perft(&mut game_state.clone(), depth);
    }

    let root_moves = game_state.clone().legal_moves();
    debug!("perft fan-out over {} root moves", root_moves.len());

    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .into_iter()
            .map(|mv| {
                let mut local = game_state.clone();
                scope.spawn(move || {
                    local.apply_move(mv);
                    perft(&mut local, depth - 1)
                })
            })
            .collect();

        // A worker can only fail by panicking; re-raise it here.
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .sum()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Square;

    const ENDGAME_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    const PROMOTION_FEN: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";

    #[test]
    fn starting_position_node_counts() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&mut game, 0), 1);
        assert_eq!(perft(&mut game, 1), 20);
        assert_eq!(perft(&mut game, 2), 400);
        assert_eq!(perft(&mut game, 3), 8_902);
        // Walking the tree leaves the state untouched.
        assert_eq!(game.get_fen(), GameState::new_game().get_fen());
    }

    #[test]
    fn endgame_position_node_counts() {
        let mut game = GameState::from_fen(ENDGAME_FEN).expect("FEN should parse");
        assert_eq!(perft(&mut game, 1), 14);
        assert_eq!(perft(&mut game, 2), 191);
    }

    #[test]
    fn checked_position_has_six_replies() {
        let mut game = GameState::from_fen(PROMOTION_FEN).expect("FEN should parse");
        assert!(game.is_in_check());
        assert_eq!(perft(&mut game, 1), 6);
    }

    #[test]
    fn detailed_counts_classify_leaves() {
        let mut game = GameState::new_game();
        let counts = perft_detailed(&mut game, 3);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 8_902,
                captures: 34,
                promotions: 0,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn detailed_counts_include_promotions() {
        // a8=Q is screened from the king by the b8 knight; axb8=Q gives check.
        let mut game = GameState::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        let counts = perft_detailed(&mut game, 1);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 7,
                captures: 1,
                promotions: 2,
                checks: 1,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn starting_position_depth_four() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&mut game, 4), 197_281);
    }

    #[test]
    fn fools_mate_is_counted_as_checkmate() {
        // After 1.f3 e5 2.g4, black has exactly one mating reply.
        let mut game = GameState::from_fen(
            "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2",
        )
        .expect("FEN should parse");
        let counts = perft_detailed(&mut game, 1);
        assert_eq!(counts.checkmates, 1);
        assert_eq!(counts.nodes, 30);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut game = GameState::new_game();
        let divided = perft_divide(&mut game, 2);
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(divided.iter().map(|(_, nodes)| nodes).sum::<u64>(), 400);

        let (first, _) = divided[0];
        assert_eq!(first.from(), Square::new(6, 0));
    }

    #[test]
    fn multi_threaded_matches_single_threaded() {
        let game = GameState::from_fen(ENDGAME_FEN).expect("FEN should parse");
        assert_eq!(perft_multi_threaded(&game, 2), 191);
        assert_eq!(perft_multi_threaded(&GameState::new_game(), 3), 8_902);
        assert_eq!(perft_multi_threaded(&game, 1), 14);
    }
}
