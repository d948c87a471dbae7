use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

use parking_lot::Mutex;

use flipbook::{Action, Editor, Tool};

/// Builds an editor with `count` frames, each holding one marker point whose
/// x coordinate identifies the frame.
fn editor_with_frames(count: usize) -> Editor {
    let mut editor = Editor::new();
    editor.dispatch(Action::DrawPoint { x: 0, y: 0 });
    for index in 1..count {
        editor.dispatch(Action::NewFrame);
        editor.dispatch(Action::DrawPoint {
            x: index as i32 * 100,
            y: 0,
        });
    }
    editor
}

#[test]
fn play_with_a_single_frame_is_a_noop() {
    let mut editor = Editor::new();
    editor.dispatch(Action::DrawPoint { x: 1, y: 1 });

    let state = editor.dispatch(Action::Play);

    assert!(!state.playing);
    assert!(state.animation_points.is_empty());
}

#[test]
fn play_shows_the_first_frame_and_stop_clears_the_preview() {
    let mut editor = editor_with_frames(2);

    let playing = editor.dispatch(Action::Play);
    assert!(playing.playing);
    assert_eq!(playing.animation_points.len(), 1);
    assert_eq!(playing.animation_points[0].pos, (0, 0));

    // starting again while playing changes nothing
    let again = editor.dispatch(Action::Play);
    assert!(again.playing);

    let stopped = editor.dispatch(Action::Stop);
    assert!(!stopped.playing);
    assert!(stopped.animation_points.is_empty());
    assert_eq!(stopped.frames.len(), 2);

    // stopping while stopped stays a no-op
    let still = editor.dispatch(Action::Stop);
    assert!(!still.playing);
}

#[test]
fn edits_are_ignored_while_playing() {
    let mut editor = editor_with_frames(2);
    editor.dispatch(Action::Play);
    let before = editor.state();

    editor.dispatch(Action::DrawPoint { x: 9, y: 9 });
    editor.dispatch(Action::SelectTool(Tool::Eraser));
    editor.dispatch(Action::NewFrame);
    editor.dispatch(Action::Undo);

    let after = editor.state();
    assert_eq!(after.frames, before.frames);
    assert_eq!(after.tool, Tool::Pen);

    editor.dispatch(Action::Stop);
}

#[test]
fn playback_cycles_through_frames_and_wraps() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut editor = editor_with_frames(3);
    editor.dispatch(Action::SetPlaybackSpeed(3)); // 4x, 175 ms per tick

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    editor.subscribe(move |state| {
        if state.playing && !state.animation_points.is_empty() {
            sink.lock().push(state.animation_points[0].pos.0);
        }
    });

    editor.dispatch(Action::Play);
    sleep(Duration::from_millis(1000));
    editor.dispatch(Action::Stop);

    let seen = seen.lock();
    assert!(seen.len() >= 4, "expected at least 4 published frames, saw {seen:?}");
    assert_eq!(seen[0], 0, "playback starts at frame 0");
    assert_eq!(seen[1], 100);
    assert_eq!(seen[2], 200);
    assert_eq!(seen[3], 0, "playback wraps back to frame 0");
}

#[test]
fn stop_wins_against_an_inflight_tick() {
    let mut editor = editor_with_frames(2);
    editor.dispatch(Action::SetPlaybackSpeed(3));
    editor.dispatch(Action::Play);
    sleep(Duration::from_millis(300));

    let stopped = editor.dispatch(Action::Stop);
    assert!(!stopped.playing);

    // no tick may apply once stop has returned
    sleep(Duration::from_millis(400));
    assert_eq!(editor.state(), stopped);
}

#[test]
fn speed_change_mid_playback_keeps_playing() {
    let mut editor = editor_with_frames(2);
    editor.dispatch(Action::Play);

    let state = editor.dispatch(Action::SetPlaybackSpeed(3));

    assert!(state.playing);
    assert_eq!(state.speed_index, 3);

    editor.dispatch(Action::Stop);
}
