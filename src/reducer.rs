//! The pure transition function behind [`crate::Editor`].
//!
//! Every intent maps an immutable [`DrawingState`] to the next one. Invalid
//! intents return the state unchanged instead of failing: empty-stack
//! undo/redo, removing the sole frame, erasing nothing, out-of-range frame
//! or speed indices, and any edit arriving while playback is active.

use crate::action::Action;
use crate::frame::Frame;
use crate::geometry::{self, ERASER_RADIUS};
use crate::history::HistoryEntry;
use crate::point::{Line, Point};
use crate::state::{DrawingState, PLAYBACK_SPEEDS, Tool};

/// Computes the successor state for one intent.
pub(crate) fn reduce(state: &DrawingState, action: Action) -> DrawingState {
    let mut next = state.clone();

    if next.playing && !matches!(action, Action::Play | Action::Stop | Action::SetPlaybackSpeed(_))
    {
        log::debug!("playback active, ignoring {action:?}");
        return next;
    }

    // An open color palette swallows the next unrelated intent into a
    // revert-to-pen before that intent is processed.
    if next.palette_open && !matches!(action, Action::PickColor(_) | Action::ToggleExtraPalette) {
        next.tool = Tool::Pen;
        next.palette_open = false;
        next.extra_palette_open = false;
    }

    match action {
        Action::SelectTool(tool) => select_tool(&mut next, tool),
        Action::DrawPoint { x, y } => draw_point(&mut next, (x, y)),
        Action::DrawLineSegment { start, end } => {
            if next.tool == Tool::Pen {
                next.current_lines.push(Line::new(start, end));
            }
        }
        Action::DragEnd => commit_drag(&mut next),
        Action::ErasePoint { x, y } => erase_point(&mut next, (x, y)),
        Action::EraseLineSegment { start, end } => erase_line(&mut next, start, end),
        Action::Undo => {
            let points = next.history.undo(next.active_points().to_vec());
            next.frames.replace_at(next.active_frame, points);
        }
        Action::Redo => {
            let points = next.history.redo(next.active_points().to_vec());
            next.frames.replace_at(next.active_frame, points);
        }
        Action::NewFrame => {
            let index = next.active_frame + 1;
            next.frames.insert_at(index, Frame::new());
            next.active_frame = index;
            reset_frame_scope(&mut next);
        }
        Action::RemoveCurrentFrame => {
            if next.frames.remove_at(next.active_frame) {
                next.active_frame = next.active_frame.saturating_sub(1);
                reset_frame_scope(&mut next);
            }
        }
        Action::DuplicateCurrentFrame => {
            if next.frames.duplicate_at(next.active_frame) {
                next.active_frame += 1;
                reset_frame_scope(&mut next);
            }
        }
        Action::SelectFrame(index) => {
            if index != next.active_frame && index < next.frames.len() {
                next.active_frame = index;
                reset_frame_scope(&mut next);
            }
        }
        Action::RemoveAllFrames => {
            next.frames.clear_all();
            next.active_frame = 0;
            reset_frame_scope(&mut next);
        }
        Action::GenerateFrames(count) => {
            if count > 0 {
                for offset in 0..count {
                    next.frames.duplicate_at(next.active_frame + offset);
                }
                next.active_frame += count;
                reset_frame_scope(&mut next);
            }
        }
        Action::PickColor(color) => {
            next.color = color;
            next.tool = Tool::Pen;
            next.palette_open = false;
            next.extra_palette_open = false;
        }
        Action::ToggleExtraPalette => {
            next.extra_palette_open = !next.extra_palette_open;
        }
        Action::SetPlaybackSpeed(index) => {
            if index < PLAYBACK_SPEEDS.len() {
                next.speed_index = index;
                next.speed_menu_open = false;
                if next.tool == Tool::SpeedPicker {
                    next.tool = Tool::Pen;
                }
            } else {
                log::warn!("ignoring out-of-range speed index {index}");
            }
        }
        Action::Play => play(&mut next),
        Action::Stop => stop(&mut next),
    }

    next
}

/// Advances the playback cursor by one frame. Applied by the scheduler
/// through the same entry point user intents go through; once `playing` has
/// been cleared by a stop, a late tick falls through unchanged.
pub(crate) fn playback_tick(state: &DrawingState) -> DrawingState {
    if !state.playing {
        return state.clone();
    }

    let mut next = state.clone();
    let cursor = next.playback_cursor % next.frames.len();
    next.animation_points = next
        .frames
        .get(cursor)
        .map(|frame| frame.points.clone())
        .unwrap_or_default();
    next.playback_cursor = (cursor + 1) % next.frames.len();
    next
}

fn select_tool(state: &mut DrawingState, tool: Tool) {
    // Switching between pen and eraser commits whatever the outgoing tool
    // buffered, exactly like a drag end would.
    match tool {
        Tool::Pen => commit_pending_erase(state),
        Tool::Eraser => commit_stroke_buffer(state),
        Tool::ColorPicker | Tool::SpeedPicker => {}
    }

    state.tool = tool;
    state.palette_open = tool == Tool::ColorPicker;
    state.speed_menu_open = tool == Tool::SpeedPicker;
    if tool != Tool::ColorPicker {
        state.extra_palette_open = false;
    }
}

fn draw_point(state: &mut DrawingState, pos: (i32, i32)) {
    if state.tool != Tool::Pen {
        return;
    }

    let point = Point::new(pos, state.color);
    let mut points = state.active_points().to_vec();
    points.push(point);
    state.frames.replace_at(state.active_frame, points);
    state.history.record(HistoryEntry::remove(vec![point]));
}

fn erase_point(state: &mut DrawingState, pos: (i32, i32)) {
    if state.tool != Tool::Eraser {
        return;
    }

    let (kept, removed) =
        geometry::split_in_radius(state.active_points().to_vec(), pos, ERASER_RADIUS);
    if removed.is_empty() {
        return;
    }

    state.frames.replace_at(state.active_frame, kept);
    state.history.record(HistoryEntry::add(removed));
}

fn erase_line(state: &mut DrawingState, start: (i32, i32), end: (i32, i32)) {
    if state.tool != Tool::Eraser {
        return;
    }

    let mut kept = state.active_points().to_vec();
    let mut removed = Vec::new();
    for center in geometry::rasterize_segment(start, end) {
        let (surviving, hit) = geometry::split_in_radius(kept, center, ERASER_RADIUS);
        kept = surviving;
        removed.extend(hit);
    }

    if removed.is_empty() {
        return;
    }

    state.frames.replace_at(state.active_frame, kept);
    state.pending_erased.extend(removed);
}

fn commit_drag(state: &mut DrawingState) {
    match state.tool {
        Tool::Pen => commit_stroke_buffer(state),
        Tool::Eraser => commit_pending_erase(state),
        Tool::ColorPicker | Tool::SpeedPicker => {}
    }
}

/// Rasterizes the buffered pen segments into the active frame and records
/// one history entry covering the whole stroke.
fn commit_stroke_buffer(state: &mut DrawingState) {
    if state.current_lines.is_empty() {
        return;
    }

    let stroke = geometry::rasterize_lines(&state.current_lines, state.color);
    state.current_lines.clear();

    let mut points = state.active_points().to_vec();
    points.extend(stroke.iter().copied());
    state.frames.replace_at(state.active_frame, points);
    state.history.record(HistoryEntry::remove(stroke));
}

/// Folds the points removed over a whole eraser drag into one history entry.
fn commit_pending_erase(state: &mut DrawingState) {
    if state.pending_erased.is_empty() {
        return;
    }

    let removed = std::mem::take(&mut state.pending_erased);
    state.history.record(HistoryEntry::add(removed));
}

/// History and in-flight buffers do not span frames; every change of the
/// active index abandons both.
fn reset_frame_scope(state: &mut DrawingState) {
    state.history.clear();
    state.current_lines.clear();
    state.pending_erased.clear();
}

fn play(state: &mut DrawingState) {
    if state.playing {
        return;
    }
    if state.frames.len() < 2 {
        log::debug!("not starting playback with a single frame");
        return;
    }

    state.playing = true;
    // Frame 0 shows immediately; the first scheduled tick advances past it.
    state.animation_points = state
        .frames
        .get(0)
        .map(|frame| frame.points.clone())
        .unwrap_or_default();
    state.playback_cursor = 1;
}

fn stop(state: &mut DrawingState) {
    if !state.playing {
        return;
    }

    state.playing = false;
    state.animation_points.clear();
    state.playback_cursor = 0;
}
