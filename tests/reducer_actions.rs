use flipbook::geometry::ERASER_RADIUS;
use flipbook::{Action, Color, Editor, Tool};

#[test]
fn draw_point_commits_to_the_active_frame() {
    let mut editor = Editor::new();
    let state = editor.dispatch(Action::DrawPoint { x: 10, y: 20 });

    assert_eq!(state.active_points().len(), 1);
    assert_eq!(state.active_points()[0].pos, (10, 20));
    assert_eq!(state.active_points()[0].color, state.color);
}

#[test]
fn drag_buffers_segments_until_drag_end() {
    let mut editor = Editor::new();
    editor.dispatch(Action::DrawLineSegment {
        start: (0, 0),
        end: (10, 0),
    });

    let mid_drag = editor.state();
    assert!(mid_drag.active_points().is_empty());
    assert_eq!(mid_drag.current_lines.len(), 1);

    editor.dispatch(Action::DrawLineSegment {
        start: (10, 0),
        end: (10, 5),
    });
    let committed = editor.dispatch(Action::DragEnd);

    // 11 points for the first segment, 6 for the second; shared corner
    // appears once per segment since frames are bags
    assert_eq!(committed.active_points().len(), 17);
    assert!(committed.current_lines.is_empty());

    // the whole drag undoes as one step
    let undone = editor.dispatch(Action::Undo);
    assert!(undone.active_points().is_empty());
}

#[test]
fn erase_point_removes_only_points_inside_the_radius() {
    let mut editor = Editor::new();
    editor.dispatch(Action::DrawPoint {
        x: ERASER_RADIUS as i32,
        y: 0,
    });
    editor.dispatch(Action::DrawPoint {
        x: ERASER_RADIUS as i32 - 1,
        y: 0,
    });

    editor.dispatch(Action::SelectTool(Tool::Eraser));
    let state = editor.dispatch(Action::ErasePoint { x: 0, y: 0 });

    assert_eq!(state.active_points().len(), 1);
    assert_eq!(state.active_points()[0].pos, (ERASER_RADIUS as i32, 0));
}

#[test]
fn erase_with_no_hits_records_no_history_entry() {
    let mut editor = Editor::new();
    editor.dispatch(Action::DrawPoint { x: 500, y: 500 });
    editor.dispatch(Action::SelectTool(Tool::Eraser));
    editor.dispatch(Action::ErasePoint { x: 0, y: 0 });

    // the only undoable step is the original draw
    let undone = editor.dispatch(Action::Undo);
    assert!(undone.active_points().is_empty());
}

#[test]
fn eraser_drag_coalesces_into_one_undo_step() {
    let mut editor = Editor::new();
    editor.dispatch(Action::DrawPoint { x: 0, y: 0 });
    editor.dispatch(Action::DrawPoint { x: 50, y: 0 });

    editor.dispatch(Action::SelectTool(Tool::Eraser));
    let mid_drag = editor.dispatch(Action::EraseLineSegment {
        start: (0, 0),
        end: (50, 0),
    });
    assert!(mid_drag.active_points().is_empty());
    assert_eq!(mid_drag.pending_erased.len(), 2);

    editor.dispatch(Action::DragEnd);
    let restored = editor.dispatch(Action::Undo);

    assert_eq!(restored.active_points().len(), 2);
    assert!(restored.pending_erased.is_empty());
}

#[test]
fn switching_to_eraser_commits_the_buffered_stroke() {
    let mut editor = Editor::new();
    editor.dispatch(Action::DrawLineSegment {
        start: (0, 0),
        end: (4, 0),
    });

    let state = editor.dispatch(Action::SelectTool(Tool::Eraser));
    assert_eq!(state.tool, Tool::Eraser);
    assert_eq!(state.active_points().len(), 5);
    assert!(state.current_lines.is_empty());

    // the commit shows up as a single undoable step
    let undone = editor.dispatch(Action::Undo);
    assert!(undone.active_points().is_empty());
}

#[test]
fn switching_to_pen_commits_a_pending_erase() {
    let mut editor = Editor::new();
    editor.dispatch(Action::DrawPoint { x: 0, y: 0 });
    editor.dispatch(Action::SelectTool(Tool::Eraser));
    editor.dispatch(Action::EraseLineSegment {
        start: (0, 0),
        end: (1, 0),
    });

    let state = editor.dispatch(Action::SelectTool(Tool::Pen));
    assert!(state.pending_erased.is_empty());

    let restored = editor.dispatch(Action::Undo);
    assert_eq!(restored.active_points().len(), 1);
}

#[test]
fn picker_selections_close_their_menu_and_revert_to_pen() {
    let mut editor = Editor::new();
    editor.dispatch(Action::SelectTool(Tool::ColorPicker));
    let state = editor.dispatch(Action::PickColor(Color::BLACK));
    assert_eq!(state.tool, Tool::Pen);

    editor.dispatch(Action::SelectTool(Tool::SpeedPicker));
    let state = editor.dispatch(Action::SetPlaybackSpeed(0));
    assert_eq!(state.tool, Tool::Pen);
    assert_eq!(state.speed_index, 0);
    assert!(!state.speed_menu_open);
}

#[test]
fn speed_picker_suspends_drawing_input() {
    let mut editor = Editor::new();
    editor.dispatch(Action::SelectTool(Tool::SpeedPicker));

    let state = editor.dispatch(Action::DrawPoint { x: 1, y: 1 });

    assert!(state.active_points().is_empty());
    assert_eq!(state.tool, Tool::SpeedPicker);
}

#[test]
fn unrelated_intent_reverts_an_open_palette_to_pen() {
    let mut editor = Editor::new();
    let opened = editor.dispatch(Action::SelectTool(Tool::ColorPicker));
    assert!(opened.palette_open);

    let state = editor.dispatch(Action::NewFrame);
    assert_eq!(state.tool, Tool::Pen);
    assert!(!state.palette_open);
    assert!(!state.extra_palette_open);
}

#[test]
fn extra_palette_toggle_keeps_the_picker_open() {
    let mut editor = Editor::new();
    editor.dispatch(Action::SelectTool(Tool::ColorPicker));
    let state = editor.dispatch(Action::ToggleExtraPalette);

    assert_eq!(state.tool, Tool::ColorPicker);
    assert!(state.palette_open);
    assert!(state.extra_palette_open);
}

#[test]
fn pick_color_sets_the_brush_and_closes_the_palette() {
    let mut editor = Editor::new();
    editor.dispatch(Action::SelectTool(Tool::ColorPicker));
    let state = editor.dispatch(Action::PickColor(Color::RED));

    assert_eq!(state.color, Color::RED);
    assert_eq!(state.tool, Tool::Pen);
    assert!(!state.palette_open);

    let drawn = editor.dispatch(Action::DrawPoint { x: 1, y: 1 });
    assert_eq!(drawn.active_points()[0].color, Color::RED);
}

#[test]
fn out_of_range_speed_index_is_ignored() {
    let mut editor = Editor::new();
    let before = editor.state();
    let state = editor.dispatch(Action::SetPlaybackSpeed(42));

    assert_eq!(state.speed_index, before.speed_index);
}
