use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::frame::FrameStore;
use crate::history::StrokeHistory;
use crate::point::{Color, Line, Point};

/// Tool selection. The picker variants suspend drawing input while their
/// menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    Pen,
    Eraser,
    ColorPicker,
    SpeedPicker,
}

/// Time one frame stays on screen at the 1x multiplier.
pub const BASE_FRAME_INTERVAL: Duration = Duration::from_millis(700);

/// The fixed playback speed menu: display label and interval multiplier.
pub const PLAYBACK_SPEEDS: [(&str, f32); 4] =
    [("0.5x", 2.0), ("1x", 1.0), ("2x", 0.5), ("4x", 0.25)];

/// Index of the 1x entry in [`PLAYBACK_SPEEDS`].
pub const DEFAULT_SPEED_INDEX: usize = 1;

/// Brush radius used for previews and export, in canvas units.
pub const DEFAULT_BRUSH_RADIUS: f32 = 5.0;

/// The full editor state. Every accepted transition produces a new value;
/// mutation happens only through the editor's dispatch entry point.
///
/// Transient fields (in-progress buffers, menu flags, playback bookkeeping)
/// are skipped during serialization and reset on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingState {
    pub active_frame: usize,
    pub tool: Tool,
    pub color: Color,
    pub brush_radius: f32,
    pub frames: FrameStore,
    /// Undo/redo stacks, scoped to the active frame.
    pub history: StrokeHistory,
    /// Pen segments accumulated during the active drag.
    #[serde(skip)]
    pub current_lines: Vec<Line>,
    /// Points removed during the active eraser drag, pending one coalesced
    /// history entry at drag end.
    #[serde(skip)]
    pub pending_erased: Vec<Point>,
    #[serde(skip)]
    pub palette_open: bool,
    #[serde(skip)]
    pub extra_palette_open: bool,
    #[serde(skip)]
    pub speed_menu_open: bool,
    pub speed_index: usize,
    #[serde(skip)]
    pub playing: bool,
    /// Point bag of the frame currently shown by the playback preview.
    #[serde(skip)]
    pub animation_points: Vec<Point>,
    /// Next frame index the playback scheduler will publish.
    #[serde(skip)]
    pub playback_cursor: usize,
}

impl DrawingState {
    pub fn new() -> Self {
        Self {
            active_frame: 0,
            tool: Tool::Pen,
            color: Color::BLUE,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            frames: FrameStore::new(),
            history: StrokeHistory::new(),
            current_lines: Vec::new(),
            pending_erased: Vec::new(),
            palette_open: false,
            extra_palette_open: false,
            speed_menu_open: false,
            speed_index: DEFAULT_SPEED_INDEX,
            playing: false,
            animation_points: Vec::new(),
            playback_cursor: 0,
        }
    }

    /// The committed point bag of the active frame.
    pub fn active_points(&self) -> &[Point] {
        self.frames
            .get(self.active_frame)
            .map(|frame| frame.points.as_slice())
            .unwrap_or_default()
    }

    /// Interval between playback ticks at the selected speed.
    pub fn frame_interval(&self) -> Duration {
        let multiplier = PLAYBACK_SPEEDS
            .get(self.speed_index)
            .map(|(_, multiplier)| *multiplier)
            .unwrap_or(1.0);
        BASE_FRAME_INTERVAL.mul_f32(multiplier)
    }
}

impl Default for DrawingState {
    fn default() -> Self {
        Self::new()
    }
}
