use segkit::{run_session, Config, SegmentId, StopReason};
use std::io::Cursor;
use tempfile::TempDir;

fn session_config() -> Config {
    let mut config = Config::default();
    config.timing.input_poll_ms = 1;
    config.timing.frame_interval_ms = 1;
    config
}

#[test]
fn test_session_applies_console_keys() {
    let config = session_config();
    let summary = run_session(&config, Cursor::new("dd\nw\nz\n")).unwrap();

    assert_eq!(summary.stop_reason, StopReason::Shutdown);
    assert_eq!(summary.commands_applied, 3);
    assert_eq!(summary.selected, SegmentId::A);
}

#[test]
fn test_session_switches_and_moves_b() {
    let dir = TempDir::new().unwrap();
    let snapshot = dir.path().join("out.png");
    let mut config = session_config();
    config.snapshot_path = Some(snapshot.clone());

    let summary = run_session(&config, Cursor::new("click 450 300\nq\n")).unwrap();
    assert_eq!(summary.selection_changes, 1);
    assert_eq!(summary.selected, SegmentId::B);

    let frame = image::open(&snapshot).unwrap().to_rgb8();
    assert_eq!(frame.get_pixel(450, 300).0, [0, 255, 0]);
    assert_eq!(frame.get_pixel(100, 100).0, [255, 255, 0]);
}

#[test]
fn test_session_frame_limit() {
    let mut config = session_config();
    config.timing.max_frames = Some(3);

    let summary = run_session(&config, Cursor::new("")).unwrap();
    assert!(summary.frames <= 3);
}
