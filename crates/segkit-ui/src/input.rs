//! Scripted input and console line parsing.
//!
//! [`ScriptedInput`] is a cloneable handle to one shared queue of key presses
//! and double-clicks. Producers (a console reader, a test) push events; a
//! surface pops them when polled.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

#[derive(Debug, Default)]
struct InputQueue {
    keys: VecDeque<char>,
    double_clicks: VecDeque<(i32, i32)>,
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: Arc<Mutex<InputQueue>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_key(&self, key: char) {
        self.queue.lock().keys.push_back(key);
    }

    pub fn push_keys(&self, keys: &str) {
        self.queue.lock().keys.extend(keys.chars());
    }

    pub fn push_double_click(&self, x: i32, y: i32) {
        self.queue.lock().double_clicks.push_back((x, y));
    }

    pub fn pop_key(&self) -> Option<char> {
        self.queue.lock().keys.pop_front()
    }

    pub fn pop_double_click(&self) -> Option<(i32, i32)> {
        self.queue.lock().double_clicks.pop_front()
    }

    pub fn pending_keys(&self) -> usize {
        self.queue.lock().keys.len()
    }

    pub fn pending_double_clicks(&self) -> usize {
        self.queue.lock().double_clicks.len()
    }

    /// True once every queued event has been consumed.
    pub fn is_idle(&self) -> bool {
        let queue = self.queue.lock();
        queue.keys.is_empty() && queue.double_clicks.is_empty()
    }
}

/// One line typed on the console.
///
/// - `q` or `quit` stops the program
/// - `click X Y` (or `dbl X Y`) queues a double-click
/// - anything else is a sequence of key presses, one per character
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleLine {
    Keys(String),
    DoubleClick(i32, i32),
    Quit,
    Empty,
}

impl ConsoleLine {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if trimmed == "q" || trimmed == "quit" {
            return Self::Quit;
        }

        let mut parts = trimmed.split_whitespace();
        if let Some("click" | "dbl") = parts.next() {
            let coords: Vec<_> = parts.map(str::parse::<i32>).collect();
            if let [Ok(x), Ok(y)] = coords.as_slice() {
                return Self::DoubleClick(*x, *y);
            }
            tracing::warn!("Ignoring malformed click line {:?}", trimmed);
            return Self::Empty;
        }

        Self::Keys(trimmed.chars().filter(|c| !c.is_whitespace()).collect())
    }

    /// Queues this line's events. Returns `false` for [`ConsoleLine::Quit`].
    pub fn feed(&self, input: &ScriptedInput) -> bool {
        match self {
            Self::Keys(keys) => input.push_keys(keys),
            Self::DoubleClick(x, y) => input.push_double_click(*x, *y),
            Self::Quit => return false,
            Self::Empty => {}
        }
        true
    }
}
