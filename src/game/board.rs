//! Board representation and the Lights Out toggle rule

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of cells on the board (3×3).
pub const CELLS: usize = 9;

/// Grid side length.
const SIDE: usize = 3;

/// A single Lights Out board: 9 binary cells in row-major order.
///
/// `Board` is a plain value type; cloning it is a 9-byte copy and two
/// boards with the same cells are the same board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board([u8; CELLS]);

impl Board {
    /// Deal a new board with each cell independently uniform in {0, 1}.
    ///
    /// Any of the 512 states is a legal deal, including an already-solved
    /// one. Solved-ness is deliberately not checked here; see
    /// [`GameStore::start_session`](crate::game::GameStore::start_session).
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut cells = [0u8; CELLS];
        for cell in &mut cells {
            *cell = u8::from(rng.gen_bool(0.5));
        }
        Self(cells)
    }

    /// Construct a board from explicit cell values. Intended for tests.
    ///
    /// # Panics
    /// Panics if any cell is not 0 or 1.
    #[must_use]
    pub fn from_cells(cells: [u8; CELLS]) -> Self {
        assert!(
            cells.iter().all(|&c| c <= 1),
            "board cells must be 0 or 1"
        );
        Self(cells)
    }

    /// The raw cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[u8; CELLS] {
        &self.0
    }

    /// Apply the toggle rule at `index`: flip the target cell and each
    /// orthogonal neighbor that exists on the 3×3 grid. Diagonals never
    /// flip and edges never wrap.
    ///
    /// A center cell flips 5 cells, an edge cell 4, a corner cell 3.
    ///
    /// Callers must validate `index < 9`; range checking is the store's
    /// job (see [`MoveError`](crate::game::MoveError)).
    pub fn toggle(&mut self, index: usize) {
        debug_assert!(index < CELLS, "toggle index out of range: {index}");

        let row = index / SIDE;
        let col = index % SIDE;

        self.0[index] ^= 1;
        if row > 0 {
            self.0[index - SIDE] ^= 1;
        }
        if row < SIDE - 1 {
            self.0[index + SIDE] ^= 1;
        }
        if col > 0 {
            self.0[index - 1] ^= 1;
        }
        if col < SIDE - 1 {
            self.0[index + 1] ^= 1;
        }
    }

    /// True iff the board is monochrome: every cell equals cell 0.
    ///
    /// Exactly two boards qualify, all-zeros and all-ones, and both count
    /// as a win.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&cell| cell == self.0[0])
    }
}
