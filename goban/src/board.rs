mod point_set;

pub use point_set::*;

use crate::{Cell, Color, IllegalPlacement, InvalidFlatBoard};

/// The size of one side of the game board.
pub const BOARD_SIZE: u8 = 9;

const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

// Cell encoding in the flat persisted form.
const FLAT_EMPTY: i8 = -1;
const FLAT_BLACK: i8 = 0;
const FLAT_WHITE: i8 = 1;

/// A 9×9 board and the placement, liberty and capture rules that operate on it.
///
/// The board only stores cell occupancy. Groups are computed on demand by
/// flood fill, never cached, because every capture changes connectivity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Row-major: `cells[y * BOARD_SIZE + x]`.
    cells: [Cell; CELL_COUNT],
}

/// One maximal group of same-colored, 4-connected stones, together with its
/// distinct liberties.
///
/// A liberty shared by two stones of the group is in the set once, so
/// `liberties.len()` never double counts.
#[derive(Clone, Copy, Debug)]
pub struct Chain {
    pub stones: PointSet,
    pub liberties: PointSet,
}

/// The effects of a committed placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The opposing stones removed by this placement.
    pub captured: PointSet,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Returns the contents of the cell, or `None` if the coordinate is
    /// outside the board.
    pub fn get(&self, x: u8, y: u8) -> Option<Cell> {
        let idx = arr_idx(x, y)?;
        Some(self.cells[idx])
    }

    /// Flood-fills the maximal connected group containing the stone at
    /// `(x, y)` and collects its distinct liberties.
    ///
    /// Returns `None` if the coordinate is out of bounds or the cell is
    /// empty.
    pub fn chain_at(&self, x: u8, y: u8) -> Option<Chain> {
        let color = self.get(x, y)?.color()?;
        Some(self.flood_fill(x, y, color))
    }

    /// Attempts to occupy an empty cell for `color`.
    ///
    /// All adjacent opposing chains that lose their last liberty are captured
    /// together, and the placed chain's own liberties are evaluated after
    /// those captures are applied, so a capturing move is never suicide.
    /// On error the board is exactly as it was before the call.
    pub fn place_stone(
        &mut self,
        x: u8,
        y: u8,
        color: Color,
    ) -> Result<Placement, IllegalPlacement> {
        let idx = arr_idx(x, y).ok_or(IllegalPlacement::OutOfBounds { x, y })?;
        if let Some(occupant) = self.cells[idx].color() {
            return Err(IllegalPlacement::CellOccupied { x, y, occupant });
        }

        // Tentative placement, reverted below if the move turns out to be suicide.
        self.cells[idx] = Cell::from(color);

        let mut captured = PointSet::new();
        for (nx, ny) in neighbors(x, y) {
            if let Some(n_idx) = arr_idx(nx, ny) {
                if self.cells[n_idx].color() == Some(color.opponent()) && !captured.contains(nx, ny)
                {
                    let chain = self.flood_fill(nx, ny, color.opponent());
                    if chain.liberties.is_empty() {
                        captured |= chain.stones;
                    }
                }
            }
        }
        for (cx, cy) in captured {
            self.cells[flat(cx, cy)] = Cell::Empty;
        }

        // Any capture vacated a cell next to the new stone, which is a liberty
        // for its chain. Only a capture-less placement can be suicide.
        if captured.is_empty() {
            let own = self.flood_fill(x, y, color);
            if own.liberties.is_empty() {
                self.cells[idx] = Cell::Empty;
                return Err(IllegalPlacement::Suicide { x, y });
            }
        }

        Ok(Placement { captured })
    }

    /// Full-board sweep: removes every chain of `color` that has no liberties
    /// left and returns the removed stones.
    ///
    /// A chain is resolved once no matter how many of its member cells the
    /// scan passes through, so a multi-stone group is neither removed nor
    /// counted twice. The removal is simultaneous: liberties are judged
    /// against the board as it was when the sweep started.
    pub fn capture_all_dead(&mut self, color: Color) -> PointSet {
        let mut seen = PointSet::new();
        let mut dead = PointSet::new();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                if self.cells[flat(x, y)].color() != Some(color) || seen.contains(x, y) {
                    continue;
                }
                let chain = self.flood_fill(x, y, color);
                seen |= chain.stones;
                if chain.liberties.is_empty() {
                    dead |= chain.stones;
                }
            }
        }
        for (x, y) in dead {
            self.cells[flat(x, y)] = Cell::Empty;
        }
        dead
    }

    /// Flattens the board into its persisted form: 81 cells in row-major
    /// order, `-1` empty, `0` black, `1` white.
    pub fn to_flat_array(&self) -> [i8; CELL_COUNT] {
        let mut array = [FLAT_EMPTY; CELL_COUNT];
        for (idx, cell) in self.cells.iter().enumerate() {
            array[idx] = match cell {
                Cell::Empty => FLAT_EMPTY,
                Cell::Black => FLAT_BLACK,
                Cell::White => FLAT_WHITE,
            };
        }
        array
    }

    /// Rebuilds a board from the flat form produced by
    /// [`Self::to_flat_array()`]. Round-tripping reproduces the occupancy
    /// grid exactly.
    pub fn from_flat_array(flat: &[i8]) -> Result<Self, InvalidFlatBoard> {
        if flat.len() != CELL_COUNT {
            return Err(InvalidFlatBoard::WrongLength { len: flat.len() });
        }
        let mut board = Self::new();
        for (idx, &value) in flat.iter().enumerate() {
            board.cells[idx] = match value {
                FLAT_EMPTY => Cell::Empty,
                FLAT_BLACK => Cell::Black,
                FLAT_WHITE => Cell::White,
                _ => return Err(InvalidFlatBoard::UnknownCell { index: idx, value }),
            };
        }
        Ok(board)
    }

    // Flood fill over same-colored, 4-connected cells. The start cell must
    // hold a stone of `color`. Visited markers are fresh per call.
    fn flood_fill(&self, x: u8, y: u8, color: Color) -> Chain {
        debug_assert_eq!(self.get(x, y), Some(Cell::from(color)));
        let mut stones = PointSet::new().insert(x, y);
        let mut liberties = PointSet::new();
        let mut stack = vec![(x, y)];
        while let Some((cx, cy)) = stack.pop() {
            for (nx, ny) in neighbors(cx, cy) {
                if let Some(idx) = arr_idx(nx, ny) {
                    match self.cells[idx].color() {
                        None => liberties = liberties.insert(nx, ny),
                        Some(c) if c == color => {
                            if !stones.contains(nx, ny) {
                                stones = stones.insert(nx, ny);
                                stack.push((nx, ny));
                            }
                        }
                        Some(_) => {}
                    }
                }
            }
        }
        Chain { stones, liberties }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

// Check that the 2D coordinate is on the board and convert it into a flat
// array index.
fn arr_idx(x: u8, y: u8) -> Option<usize> {
    if x < BOARD_SIZE && y < BOARD_SIZE {
        Some(flat(x, y))
    } else {
        None
    }
}

// Flat index for a coordinate already known to be on the board.
fn flat(x: u8, y: u8) -> usize {
    debug_assert!(x < BOARD_SIZE);
    debug_assert!(y < BOARD_SIZE);
    usize::from(y) * usize::from(BOARD_SIZE) + usize::from(x)
}

// The 4 orthogonal neighbor coordinates. Off-board results (including the
// wrapped 255s) are rejected by `arr_idx`.
fn neighbors(x: u8, y: u8) -> [(u8, u8); 4] {
    [
        (x.wrapping_sub(1), y),
        (x + 1, y),
        (x, y.wrapping_sub(1)),
        (x, y + 1),
    ]
}
