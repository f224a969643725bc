use crate::{Board, Color, BOARD_SIZE};

/// A board produced by a random sequence of legal placements, so every
/// generated position satisfies the invariants real play guarantees.
#[derive(Clone, Debug)]
pub struct ReachableBoard(pub Board);

impl quickcheck::Arbitrary for ReachableBoard {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut board = Board::new();
        let mut to_move = Color::Black;
        let num_attempts = usize::arbitrary(g) % 70;
        for _ in 0..num_attempts {
            let x = u8::arbitrary(g) % BOARD_SIZE;
            let y = u8::arbitrary(g) % BOARD_SIZE;
            // Rejected placements (occupied, suicide) are simply skipped.
            if board.place_stone(x, y, to_move).is_ok() {
                to_move = to_move.opponent();
            }
        }
        ReachableBoard(board)
    }
}

impl quickcheck::Arbitrary for Color {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Color::Black, Color::White]).unwrap()
    }
}
