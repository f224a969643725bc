use crate::{Board, Color, IllegalPlacement, MoveLog, MoveRecord, PointSet};

/// Payload for the capture notification hook: which stones vanished beyond
/// the placed cell, and who captured them.
#[derive(Clone, Copy, Debug)]
pub struct CaptureEvent {
    pub captured: PointSet,
    pub by: Color,
}

/// Summarizes one successful call to [`Game::play_turn()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Opponent stones removed by this move, targeted captures and
    /// confirmation sweep combined.
    pub stones_captured: usize,
}

/// Tracks whose turn it is, invokes the board operations in the right order,
/// and keeps the capture tallies and the move log.
///
/// One `Game` is one session with a single caller; every call runs to
/// completion before the next. Callers on several threads must serialize
/// access around each [`Self::play_turn()`] themselves.
pub struct Game {
    board: Board,
    /// Number of successful placements so far. Black moves on even counts.
    turn: usize,
    prisoners_taken_by_black: usize,
    prisoners_taken_by_white: usize,
    log: MoveLog,
    capture_hook: Option<Box<dyn FnMut(&CaptureEvent)>>,
}

impl Game {
    /// Starts a session on an empty board, Black to move.
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Resumes a session from a restored board.
    ///
    /// Tallies and history do not survive the flat persisted form, so the
    /// log starts empty and Black moves next.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            turn: 0,
            prisoners_taken_by_black: 0,
            prisoners_taken_by_white: 0,
            log: MoveLog::new(),
            capture_hook: None,
        }
    }

    /// Registers a callback fired whenever a move changes more of the board
    /// than the placed cell, so a front end knows to redraw.
    ///
    /// The core has no idea how the front end redraws; the event only says
    /// what vanished.
    pub fn set_capture_hook(&mut self, hook: impl FnMut(&CaptureEvent) + 'static) {
        self.capture_hook = Some(Box::new(hook));
    }

    pub fn to_move(&self) -> Color {
        if self.turn % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Number of opponent stones this player has captured so far.
    pub fn captures_by(&self, color: Color) -> usize {
        match color {
            Color::Black => self.prisoners_taken_by_black,
            Color::White => self.prisoners_taken_by_white,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> &[MoveRecord] {
        self.log.records()
    }

    /// The side to move attempts to occupy `(x, y)`.
    ///
    /// On success the turn passes to the opponent. A rejected placement
    /// (out of bounds, occupied cell, suicide) changes neither the board nor
    /// whose turn it is.
    pub fn play_turn(&mut self, x: u8, y: u8) -> Result<TurnOutcome, IllegalPlacement> {
        let color = self.to_move();
        let placement = self.board.place_stone(x, y, color)?;

        // Confirmation sweep. place_stone already removed the opposing
        // chains adjacent to the new stone; sweeping the whole board keeps
        // the local and global liberty views from ever diverging.
        let mut captured = placement.captured;
        captured |= self.board.capture_all_dead(color.opponent());

        let stones_captured = captured.len();
        match color {
            Color::Black => self.prisoners_taken_by_black += stones_captured,
            Color::White => self.prisoners_taken_by_white += stones_captured,
        }

        self.log.push(x, y, color);
        if !captured.is_empty() {
            self.log.mark_captured(captured);
            let event = CaptureEvent { captured, by: color };
            if let Some(hook) = self.capture_hook.as_mut() {
                hook(&event);
            }
        }

        self.turn += 1;
        Ok(TurnOutcome { stones_captured })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("turn", &self.turn)
            .field("prisoners_taken_by_black", &self.prisoners_taken_by_black)
            .field("prisoners_taken_by_white", &self.prisoners_taken_by_white)
            .field("log", &self.log)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::Cell;

    #[test]
    fn fresh_game_starts_empty_with_black_to_move() {
        let game = Game::new();
        assert_eq!(game.to_move(), Color::Black);
        assert_eq!(game.captures_by(Color::Black), 0);
        assert_eq!(game.captures_by(Color::White), 0);
        assert!(game.moves().is_empty());
        assert_eq!(game.board().get(4, 4), Some(Cell::Empty));
    }

    #[test]
    fn turns_alternate_only_on_success() {
        let mut game = Game::new();
        game.play_turn(4, 4).unwrap();
        assert_eq!(game.to_move(), Color::White);
        // Two consecutive failed attempts at the same occupied cell.
        assert!(game.play_turn(4, 4).is_err());
        assert!(game.play_turn(4, 4).is_err());
        assert_eq!(game.to_move(), Color::White);
    }

    #[test]
    fn single_capture_scenario() {
        let mut game = Game::new();
        for (x, y) in [(3, 0), (6, 0), (2, 1), (3, 1), (4, 1), (6, 1)] {
            game.play_turn(x, y).unwrap();
        }
        let outcome = game.play_turn(3, 2).unwrap();
        assert_eq!(outcome.stones_captured, 1);
        assert_eq!(game.board().get(3, 1), Some(Cell::Empty));
        assert_eq!(game.captures_by(Color::Black), 1);
        assert_eq!(game.captures_by(Color::White), 0);
        assert_eq!(game.to_move(), Color::White);
    }

    #[test]
    fn suicide_scenario_is_rejected() {
        let mut game = Game::new();
        for (x, y) in [(1, 0), (2, 0), (0, 1), (1, 1), (8, 0), (0, 2)] {
            game.play_turn(x, y).unwrap();
        }
        assert_eq!(game.to_move(), Color::Black);
        assert_eq!(
            game.play_turn(0, 0),
            Err(IllegalPlacement::Suicide { x: 0, y: 0 })
        );
        assert_eq!(game.board().get(0, 0), Some(Cell::Empty));
        assert_eq!(game.to_move(), Color::Black);
        assert_eq!(game.captures_by(Color::Black), 0);
    }

    #[test]
    fn two_stone_capture_is_tallied_exactly_twice() {
        let mut game = Game::new();
        // Black builds the cage, white builds the doomed pair plus three
        // idle stones in the far corner.
        for (x, y) in [
            (3, 4),
            (4, 4),
            (4, 3),
            (5, 4),
            (5, 3),
            (0, 0),
            (6, 4),
            (0, 1),
            (4, 5),
            (0, 2),
        ] {
            game.play_turn(x, y).unwrap();
        }
        let outcome = game.play_turn(5, 5).unwrap();
        assert_eq!(outcome.stones_captured, 2);
        assert_eq!(game.captures_by(Color::Black), 2);
        assert_eq!(game.board().get(4, 4), Some(Cell::Empty));
        assert_eq!(game.board().get(5, 4), Some(Cell::Empty));
    }

    #[test]
    fn capture_hook_fires_only_when_stones_vanish() {
        let events: Rc<RefCell<Vec<(usize, Color)>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let mut game = Game::new();
        game.set_capture_hook(move |event| {
            sink.borrow_mut().push((event.captured.len(), event.by));
        });

        for (x, y) in [(3, 0), (6, 0), (2, 1), (3, 1), (4, 1), (6, 1)] {
            game.play_turn(x, y).unwrap();
        }
        assert!(events.borrow().is_empty());

        game.play_turn(3, 2).unwrap();
        assert_eq!(*events.borrow(), vec![(1, Color::Black)]);
    }

    #[test]
    fn captured_stone_record_flips_to_dead() {
        let mut game = Game::new();
        for (x, y) in [(3, 0), (6, 0), (2, 1), (3, 1), (4, 1), (6, 1)] {
            game.play_turn(x, y).unwrap();
        }
        game.play_turn(3, 2).unwrap();
        let records = game.moves();
        assert_eq!(records.len(), 7);
        let white_stone = &records[3];
        assert_eq!((white_stone.x, white_stone.y), (3, 1));
        assert!(!white_stone.alive);
        // Every other stone is still on the board.
        assert!(records
            .iter()
            .filter(|record| record.number != 3)
            .all(|record| record.alive));
    }

    #[test]
    fn resumed_session_continues_from_the_restored_board() {
        let mut game = Game::new();
        game.play_turn(4, 4).unwrap();
        let flat = game.board().to_flat_array();

        let restored = Board::from_flat_array(&flat).unwrap();
        let mut resumed = Game::from_board(restored);
        assert_eq!(resumed.board().get(4, 4), Some(Cell::Black));
        // History is gone, Black moves next by convention.
        assert!(resumed.moves().is_empty());
        resumed.play_turn(3, 3).unwrap();
        assert_eq!(resumed.to_move(), Color::White);
    }

    #[test]
    fn out_of_bounds_is_surfaced_not_clamped() {
        let mut game = Game::new();
        assert_eq!(
            game.play_turn(9, 9),
            Err(IllegalPlacement::OutOfBounds { x: 9, y: 9 })
        );
        assert_eq!(game.to_move(), Color::Black);
    }
}
