use serde::{Deserialize, Serialize};

use crate::point::Point;

/// The inverse operation replayed when a history entry is popped.
///
/// An entry tagged [`StrokeOp::Remove`] was recorded after points were drawn,
/// so undoing it removes those points; [`StrokeOp::Add`] was recorded after
/// points were erased, so undoing it puts them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeOp {
    Add,
    Remove,
}

/// One reversible point-set mutation, scoped to the frame it was recorded on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub op: StrokeOp,
    pub points: Vec<Point>,
}

impl HistoryEntry {
    /// Entry whose undo re-adds `points` (recorded after an erase).
    pub fn add(points: Vec<Point>) -> Self {
        Self {
            op: StrokeOp::Add,
            points,
        }
    }

    /// Entry whose undo removes `points` (recorded after a draw).
    pub fn remove(points: Vec<Point>) -> Self {
        Self {
            op: StrokeOp::Remove,
            points,
        }
    }
}

/// Paired undo/redo stacks of reversible point-set mutations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrokeHistory {
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
}

impl StrokeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a fresh mutation. Any pending redo sequence is lost.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.undo_stack.push(entry);
        self.redo_stack.clear();
    }

    /// Replays the most recent undo entry against `points` and returns the
    /// updated bag. A no-op when the undo stack is empty.
    pub fn undo(&mut self, points: Vec<Point>) -> Vec<Point> {
        let Some(entry) = self.undo_stack.pop() else {
            return points;
        };
        let (points, inverse) = apply_entry(points, entry);
        self.redo_stack.push(inverse);
        points
    }

    /// Replays the most recent redo entry against `points` and returns the
    /// updated bag. A no-op when the redo stack is empty.
    pub fn redo(&mut self, points: Vec<Point>) -> Vec<Point> {
        let Some(entry) = self.redo_stack.pop() else {
            return points;
        };
        let (points, inverse) = apply_entry(points, entry);
        self.undo_stack.push(inverse);
        points
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

/// Applies one entry to the bag and builds the entry that reverses it.
fn apply_entry(mut points: Vec<Point>, entry: HistoryEntry) -> (Vec<Point>, HistoryEntry) {
    match entry.op {
        StrokeOp::Remove => {
            // Each occurrence in the entry removes one structurally equal
            // point from the bag.
            for target in &entry.points {
                if let Some(found) = points.iter().position(|p| p == target) {
                    points.remove(found);
                }
            }
            (points, HistoryEntry::add(entry.points))
        }
        StrokeOp::Add => {
            points.extend(entry.points.iter().copied());
            (points, HistoryEntry::remove(entry.points))
        }
    }
}
