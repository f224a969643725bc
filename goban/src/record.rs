use serde::{Deserialize, Serialize};

use crate::{Color, PointSet};

/// One entry in the move log.
///
/// When a stone is captured its record is not deleted: the `alive` flag flips
/// to `false` instead, so an annotated rendering can still show the full
/// history of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub x: u8,
    pub y: u8,
    pub color: Color,
    /// Position of this move in the game, starting at 0.
    pub number: usize,
    pub alive: bool,
}

/// Append-only log of every stone played in one game.
///
/// The log exists for display and recording only; legality never depends
/// on it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveLog {
    records: Vec<MoveRecord>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn push(&mut self, x: u8, y: u8, color: Color) {
        let number = self.records.len();
        self.records.push(MoveRecord {
            x,
            y,
            color,
            number,
            alive: true,
        });
    }

    // Flip the records of the removed stones to dead. Only a live record at a
    // coordinate matches: a cell can be re-played after a capture, and the
    // earlier record must stay dead.
    pub(crate) fn mark_captured(&mut self, captured: PointSet) {
        for record in self.records.iter_mut() {
            if record.alive && captured.contains(record.x, record.y) {
                record.alive = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_sequential_numbers() {
        let mut log = MoveLog::new();
        log.push(3, 0, Color::Black);
        log.push(6, 0, Color::White);
        assert_eq!(log.records()[0].number, 0);
        assert_eq!(log.records()[1].number, 1);
        assert!(log.records().iter().all(|record| record.alive));
    }

    #[test]
    fn capture_flips_alive_instead_of_deleting() {
        let mut log = MoveLog::new();
        log.push(3, 1, Color::White);
        log.mark_captured(PointSet::new().insert(3, 1));
        assert_eq!(log.len(), 1);
        assert!(!log.records()[0].alive);
    }

    #[test]
    fn replayed_cell_gets_a_fresh_live_record() {
        let mut log = MoveLog::new();
        log.push(3, 1, Color::White);
        log.mark_captured(PointSet::new().insert(3, 1));
        log.push(3, 1, Color::Black);
        // Capturing the black stone later must not resurrect-and-kill the
        // white record again.
        log.mark_captured(PointSet::new().insert(3, 1));
        let records = log.records();
        assert_eq!(records.len(), 2);
        assert!(!records[0].alive);
        assert!(!records[1].alive);
        assert_eq!(records[1].color, Color::Black);
    }
}
