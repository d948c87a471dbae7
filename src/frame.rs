use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::point::Point;

/// A single animation cel: an insertion-ordered, semantically unordered bag
/// of committed points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Unique identifier, stable across edits to the frame's content
    pub id: Uuid,
    pub points: Vec<Point>,
}

impl Frame {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            points: Vec::new(),
        }
    }

    pub fn with_points(points: Vec<Point>) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
        }
    }

    /// Deep copy of the point bag under a fresh identity.
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            points: self.points.clone(),
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

/// The ordered frame sequence. Holds at least one frame at all times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameStore {
    frames: Vec<Frame>,
}

impl FrameStore {
    /// Creates a store holding a single empty frame.
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::new()],
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn insert_at(&mut self, index: usize, frame: Frame) {
        let index = index.min(self.frames.len());
        self.frames.insert(index, frame);
    }

    /// Removes the frame at `index`. Refused when it would leave the
    /// sequence empty or the index is out of range.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if self.frames.len() <= 1 || index >= self.frames.len() {
            return false;
        }
        self.frames.remove(index);
        true
    }

    /// Deep-copies the frame at `index` into a new frame inserted directly
    /// after it.
    pub fn duplicate_at(&mut self, index: usize) -> bool {
        let Some(copy) = self.frames.get(index).map(Frame::duplicate) else {
            return false;
        };
        self.frames.insert(index + 1, copy);
        true
    }

    /// Swaps out the point bag of the frame at `index`, keeping its identity.
    pub fn replace_at(&mut self, index: usize, points: Vec<Point>) {
        if let Some(frame) = self.frames.get_mut(index) {
            frame.points = points;
        }
    }

    /// Resets the sequence to a single empty frame.
    pub fn clear_all(&mut self) {
        self.frames = vec![Frame::new()];
    }
}

impl Default for FrameStore {
    fn default() -> Self {
        Self::new()
    }
}
