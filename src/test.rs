#[cfg(test)]
pub mod test {
    use anyhow::Result;
    use std::time::Instant;

    use crate::search::{alphabeta, minimax, Algorithm};
    use crate::state::{Score, Side, State, Status};
    use crate::{bitboard::cell_mask, HEIGHT, WIDTH};

    #[test]
    pub fn pruning_never_explores_more() -> Result<()> {
        let positions = [
            ("", Side::Ai),
            ("171617", Side::Ai),
            ("717161", Side::Ai),
            ("4453", Side::Opponent),
            ("334455", Side::Opponent),
        ];
        for &(moves, first_mover) in positions.iter() {
            let state = State::from_moves(moves, first_mover)?;
            for depth in 1..=4 {
                let pruned = alphabeta::search(&state, first_mover, depth).unwrap();
                let full = minimax::search(&state, first_mover, depth).unwrap();
                assert!(
                    pruned.metrics.nodes_explored <= full.metrics.nodes_explored,
                    "{} at depth {}: {:?} vs {:?}",
                    moves,
                    depth,
                    pruned.metrics,
                    full.metrics
                );
                assert_eq!(full.metrics.nodes_pruned, 0);
            }
        }
        Ok(())
    }

    #[test]
    pub fn empty_board_depth_5() {
        let root = State::new();

        let start = Instant::now();
        let pruned = Algorithm::AlphaBeta.search(&root, Side::Ai, 5).unwrap();
        let pruned_time = start.elapsed();

        let start = Instant::now();
        let full = Algorithm::Minimax.search(&root, Side::Ai, 5).unwrap();
        let full_time = start.elapsed();

        assert_eq!(pruned.score, full.score);
        assert_eq!(root.column_to(&pruned.best), root.column_to(&full.best));
        assert_eq!(root.column_to(&pruned.best), Some(3));
        // transpositions are only expanded once
        assert!(pruned.metrics.nodes_explored < full.metrics.nodes_explored);

        println!(
            "AlphaBeta: {} nodes, {} pruned, {:.3}ms\nPlain Minimax: {} nodes, {:.3}ms",
            pruned.metrics.nodes_explored,
            pruned.metrics.nodes_pruned,
            pruned_time.as_secs_f64() * 1000.0,
            full.metrics.nodes_explored,
            full_time.as_secs_f64() * 1000.0
        );
    }

    #[test]
    pub fn both_take_the_win() -> Result<()> {
        let state = State::from_moves("171617", Side::Ai)?;
        for depth in 1..=4 {
            for &algorithm in [Algorithm::AlphaBeta, Algorithm::Minimax].iter() {
                let outcome = algorithm.search(&state, Side::Ai, depth).unwrap();
                assert_eq!(state.column_to(&outcome.best), Some(0));
                assert_eq!(outcome.score, Score::Finite(19));
            }
        }
        Ok(())
    }

    #[test]
    pub fn loss_threat_inside_horizon() -> Result<()> {
        // the opponent has three stones stacked in the first column
        let state = State::from_moves("717161", Side::Ai)?;
        assert!(state.is_ai_turn(Side::Ai));

        for &algorithm in [Algorithm::AlphaBeta, Algorithm::Minimax].iter() {
            // the winning reply is past the horizon
            let shallow = algorithm.search(&state, Side::Ai, 1).unwrap();
            assert_eq!(shallow.score, Score::MinusInfinity);

            // the reply on ply 8 scores -(22 - 4)
            let deep = algorithm.search(&state, Side::Ai, 2).unwrap();
            assert_eq!(deep.score, Score::Finite(-18));
            assert_eq!(state.column_to(&deep.best), Some(3));
        }
        Ok(())
    }

    #[test]
    pub fn no_move_only_on_full_board() -> Result<()> {
        // pairs of rows alternate owners, columns alternate owners
        let mut ai_stones = 0;
        let mut occupied = 0;
        for column in 0..WIDTH {
            for row in 0..HEIGHT {
                occupied |= cell_mask(column, row);
                if (column + row / 2) % 2 == 0 {
                    ai_stones |= cell_mask(column, row);
                }
            }
        }
        let full = State::from_masks(ai_stones, occupied, WIDTH * HEIGHT);
        assert_eq!(full.evaluate_terminal(), Some(Status::Draw));
        assert!(Algorithm::AlphaBeta.search(&full, Side::Ai, 0).is_none());
        assert!(Algorithm::Minimax.search(&full, Side::Ai, 0).is_none());

        // a won board that still has room keeps producing children
        let won = State::from_moves("1212121", Side::Ai)?;
        assert!(won.is_terminal());
        assert!(Algorithm::AlphaBeta.search(&won, Side::Ai, 0).is_some());
        assert!(Algorithm::Minimax.search(&won, Side::Ai, 0).is_some());
        Ok(())
    }
}
