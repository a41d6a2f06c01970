use segkit::{feed_console, ScriptedInput, ShutdownHandle};
use std::io::Cursor;
use std::time::Duration;

#[test]
fn test_feed_stops_at_quit() {
    let input = ScriptedInput::new();
    let shutdown = ShutdownHandle::new();
    // Drain the queue the way a worker would, so the feeder can finish
    let consumer = {
        let input = input.clone();
        let shutdown = shutdown.clone();
        std::thread::spawn(move || {
            let mut keys = String::new();
            let mut clicks = Vec::new();
            while !shutdown.is_requested() {
                if let Some(key) = input.pop_key() {
                    keys.push(key);
                } else if let Some(click) = input.pop_double_click() {
                    clicks.push(click);
                } else {
                    std::thread::sleep(Duration::from_millis(1));
                }
            }
            (keys, clicks)
        })
    };

    let text = "wasd\n\nclick 10 20\nq\n++\n";
    let lines = feed_console(Cursor::new(text), &input, &shutdown, Duration::from_millis(1))
        .unwrap();

    assert_eq!(lines, 4);
    assert!(shutdown.is_requested());
    let (keys, clicks) = consumer.join().unwrap();
    assert_eq!(keys, "wasd");
    assert_eq!(clicks, vec![(10, 20)]);
}

#[test]
fn test_feed_returns_when_shutdown_already_requested() {
    let input = ScriptedInput::new();
    let shutdown = ShutdownHandle::new();
    shutdown.request();

    let lines = feed_console(Cursor::new("dddd\n"), &input, &shutdown, Duration::from_millis(1))
        .unwrap();
    assert_eq!(lines, 1);
    assert_eq!(input.pending_keys(), 4);
}
