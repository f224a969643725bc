use crate::Color;

/// The error type for [`Board::place_stone()`](crate::Board::place_stone), i.e. for attempting
/// a single placement.
///
/// All three variants are expected, recoverable outcomes: the move is rejected, the board is
/// left exactly as it was, and the caller decides whether to prompt for another move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalPlacement {
    OutOfBounds { x: u8, y: u8 },
    CellOccupied { x: u8, y: u8, occupant: Color },
    Suicide { x: u8, y: u8 },
}

impl std::error::Error for IllegalPlacement {}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::OutOfBounds { x, y } => {
                write!(f, "Coordinate ({}, {}) is outside the board", x, y)
            }
            IllegalPlacement::CellOccupied { x, y, occupant } => {
                write!(f, "Cell ({}, {}) is already occupied by {}", x, y, occupant)
            }
            IllegalPlacement::Suicide { x, y } => write!(
                f,
                "Placing at ({}, {}) would leave the group without liberties and captures nothing",
                x, y
            ),
        }
    }
}

/// The error type for [`Board::from_flat_array()`](crate::Board::from_flat_array).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidFlatBoard {
    WrongLength { len: usize },
    UnknownCell { index: usize, value: i8 },
}

impl std::error::Error for InvalidFlatBoard {}

impl std::fmt::Display for InvalidFlatBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidFlatBoard::WrongLength { len } => {
                write!(f, "Flat board has {} cells, expected 81", len)
            }
            InvalidFlatBoard::UnknownCell { index, value } => {
                write!(f, "Cell {} holds {}, which is not a known cell state", index, value)
            }
        }
    }
}
