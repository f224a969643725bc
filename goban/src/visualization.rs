use crate::{Board, Cell, BOARD_SIZE};

/// Renders the board as a box-drawn grid with coordinate headers, for
/// terminal display. Pure function, no I/O.
pub fn visualize_board(board: &Board) -> String {
    let mut result = String::from("    ");
    for x in 0..BOARD_SIZE {
        result += &format!("{} ", x);
    }
    result += "\n   ╭";
    for _ in 0..BOARD_SIZE {
        result += "──";
    }
    result += "─╮\n";

    for y in 0..BOARD_SIZE {
        result += &format!("{:>2} │ ", y);
        for x in 0..BOARD_SIZE {
            result += match board.get(x, y) {
                Some(Cell::Black) => "● ",
                Some(Cell::White) => "○ ",
                _ => "· ",
            };
        }
        result += "│\n";
    }

    result += "   ╰";
    for _ in 0..BOARD_SIZE {
        result += "──";
    }
    result += "─╯";
    result
}
