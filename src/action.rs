use serde::{Deserialize, Serialize};

use crate::point::Color;
use crate::state::Tool;

/// User intents consumed by the editor, dispatched with exhaustive matching.
///
/// Coordinates arrive already resolved by the gesture layer; invalid intents
/// (out-of-range indices, edits while playback is active) are ignored rather
/// than errored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Action {
    SelectTool(Tool),
    DrawPoint { x: i32, y: i32 },
    DrawLineSegment { start: (i32, i32), end: (i32, i32) },
    DragEnd,
    ErasePoint { x: i32, y: i32 },
    EraseLineSegment { start: (i32, i32), end: (i32, i32) },
    Undo,
    Redo,
    NewFrame,
    RemoveCurrentFrame,
    DuplicateCurrentFrame,
    SelectFrame(usize),
    RemoveAllFrames,
    /// Appends `count` duplicates of the active frame after it.
    GenerateFrames(usize),
    PickColor(Color),
    ToggleExtraPalette,
    SetPlaybackSpeed(usize),
    Play,
    Stop,
}
