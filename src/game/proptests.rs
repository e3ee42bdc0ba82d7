//! Property-based tests for the game core
//!
//! These pin the toggle rule's flip set, its self-inverse property, and
//! the store's session lifecycle across arbitrary boards and indices.

use super::board::{Board, CELLS};
use super::store::{GameStore, MoveOutcome};
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(0u8..=1).prop_map(Board::from_cells)
}

fn arb_index() -> impl Strategy<Value = usize> {
    0..CELLS
}

/// The set of cells `toggle(index)` must flip: the target plus in-bounds
/// orthogonal neighbors. Computed independently of the engine, from grid
/// coordinates.
fn expected_flip_set(index: usize) -> Vec<usize> {
    let (row, col) = (index / 3, index % 3);
    let mut flips = vec![index];
    if row > 0 {
        flips.push(index - 3);
    }
    if row < 2 {
        flips.push(index + 3);
    }
    if col > 0 {
        flips.push(index - 1);
    }
    if col < 2 {
        flips.push(index + 1);
    }
    flips
}

// ============================================================================
// Board Engine Properties
// ============================================================================

proptest! {
    /// toggle flips exactly the target cell plus its in-bounds orthogonal
    /// neighbors, and nothing else.
    #[test]
    fn toggle_flips_exactly_the_plus_shape(board in arb_board(), index in arb_index()) {
        let mut toggled = board;
        toggled.toggle(index);

        let flips = expected_flip_set(index);
        for cell in 0..CELLS {
            if flips.contains(&cell) {
                prop_assert_eq!(toggled.cells()[cell], board.cells()[cell] ^ 1);
            } else {
                prop_assert_eq!(toggled.cells()[cell], board.cells()[cell]);
            }
        }
    }

    /// Corner clicks flip 3 cells, edge clicks 4, the center click 5.
    #[test]
    fn flip_count_matches_cell_position(index in arb_index()) {
        let expected = match index {
            0 | 2 | 6 | 8 => 3,
            4 => 5,
            _ => 4,
        };
        prop_assert_eq!(expected_flip_set(index).len(), expected);
    }

    /// Toggling the same index twice restores the board exactly.
    #[test]
    fn toggle_is_self_inverse(board in arb_board(), index in arb_index()) {
        let mut toggled = board;
        toggled.toggle(index);
        toggled.toggle(index);
        prop_assert_eq!(toggled, board);
    }

    /// Toggle order between distinct indices does not matter (each cell is
    /// an independent XOR).
    #[test]
    fn toggles_commute(board in arb_board(), a in arb_index(), b in arb_index()) {
        let mut ab = board;
        ab.toggle(a);
        ab.toggle(b);

        let mut ba = board;
        ba.toggle(b);
        ba.toggle(a);

        prop_assert_eq!(ab, ba);
    }

    /// is_solved is true iff all cells agree.
    #[test]
    fn solved_means_monochrome(board in arb_board()) {
        let monochrome = board.cells().iter().all(|&c| c == board.cells()[0]);
        prop_assert_eq!(board.is_solved(), monochrome);
    }
}

// ============================================================================
// Session Store Properties
// ============================================================================

proptest! {
    /// A move with no prior session behaves like start-then-move on the
    /// dealt board: afterwards the stored board (if any) is one toggle
    /// away from some deal, and Won implies the session is gone.
    #[test]
    fn implicit_start_matches_explicit_start(user in any::<i64>(), index in arb_index()) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        rt.block_on(async {
            let store = GameStore::new();
            match store.apply_move(user, index).await.unwrap() {
                MoveOutcome::Continuing(board) => {
                    // The session now holds exactly the returned board,
                    // which by construction is not solved.
                    prop_assert_eq!(store.get_session(user).await, Some(board));
                    prop_assert!(!board.is_solved());
                }
                MoveOutcome::Won => {
                    prop_assert_eq!(store.get_session(user).await, None);
                }
            }
            Ok(())
        })?;
    }

    /// start_session always installs the board it returns, replacing any
    /// prior session.
    #[test]
    fn start_session_installs_returned_board(user in any::<i64>()) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        rt.block_on(async {
            let store = GameStore::new();
            store.start_session(user).await;
            let second = store.start_session(user).await;
            prop_assert_eq!(store.get_session(user).await, Some(second));
            Ok(())
        })?;
    }
}
