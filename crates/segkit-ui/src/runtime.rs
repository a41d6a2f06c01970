//! Input worker and render loop.
//!
//! ```text
//!  input worker thread                     render loop (Runtime::run)
//!  ───────────────────                     ──────────────────────────
//!  poll_keyboard ──► KeyBindings ──► mpsc ──► apply all pending commands
//!  sleep when idle                           poll_double_click ──► try_select
//!                                            render_scene ──► present
//!                                            sleep frame interval
//! ```
//!
//! The scene lives on the render loop's thread and is never shared. The
//! surface is shared behind a mutex; the worker holds the lock for a single
//! keyboard poll, the render loop for one click poll or one frame.

use parking_lot::Mutex;
use segkit_core::{Error, Result};
use segkit_designer::{KeyBindings, Scene, SceneCommand, SegmentId};
use segkit_settings::{Config, TimingSettings};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::render::{render_scene, SegmentColors};
use crate::surface::DisplaySurface;

/// Requests a running [`Runtime`] to stop from any thread.
#[derive(Debug, Clone, Default)]
pub struct ShutdownHandle {
    flag: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Loop timing for [`Runtime::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeOptions {
    /// Sleep between keyboard polls when no key was pending
    pub input_poll: Duration,
    /// Sleep between frames
    pub frame_interval: Duration,
    /// Stop after this many frames
    pub max_frames: Option<u64>,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self::from(&TimingSettings::default())
    }
}

impl From<&TimingSettings> for RuntimeOptions {
    fn from(timing: &TimingSettings) -> Self {
        Self {
            input_poll: timing.input_poll_interval(),
            frame_interval: timing.frame_interval(),
            max_frames: timing.max_frames,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A [`ShutdownHandle`] was triggered
    Shutdown,
    /// `max_frames` frames were rendered
    FrameLimit,
}

/// Counters reported when [`Runtime::run`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub commands_applied: u64,
    pub selection_changes: u64,
    pub selected: SegmentId,
    pub stop_reason: StopReason,
}

#[derive(Debug, Default)]
struct Counters {
    frames: u64,
    commands_applied: u64,
    selection_changes: u64,
}

pub struct Runtime<S> {
    surface: Arc<Mutex<S>>,
    scene: Scene,
    bindings: KeyBindings,
    colors: SegmentColors,
    options: RuntimeOptions,
    shutdown: ShutdownHandle,
}

impl<S> Runtime<S>
where
    S: DisplaySurface + Send + 'static,
{
    /// Builds a runtime with the scene, bindings, colors and timing from
    /// `config`.
    pub fn new(surface: S, config: &Config) -> Self {
        Self::from_parts(
            Arc::new(Mutex::new(surface)),
            config.build_scene(),
            config.key_bindings(),
            SegmentColors::from(&config.segments),
            RuntimeOptions::from(&config.timing),
        )
    }

    pub fn from_parts(
        surface: Arc<Mutex<S>>,
        scene: Scene,
        bindings: KeyBindings,
        colors: SegmentColors,
        options: RuntimeOptions,
    ) -> Self {
        Self {
            surface,
            scene,
            bindings,
            colors,
            options,
            shutdown: ShutdownHandle::new(),
        }
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }

    pub fn surface(&self) -> Arc<Mutex<S>> {
        Arc::clone(&self.surface)
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn options(&self) -> &RuntimeOptions {
        &self.options
    }

    /// Runs one frame without the input worker: applies `commands` in
    /// order, handles at most one pending double-click, then draws and
    /// presents. Returns whether the selection changed.
    pub fn step<I>(&mut self, commands: I) -> Result<bool>
    where
        I: IntoIterator<Item = SceneCommand>,
    {
        for command in commands {
            self.scene.apply(&command);
        }
        let changed = self.handle_double_click();
        self.render()?;
        Ok(changed)
    }

    /// Starts the input worker and renders frames until shutdown is
    /// requested or the frame limit is reached.
    ///
    /// On shutdown, key presses the worker already forwarded are applied
    /// and, if there were any, one final frame is rendered so the surface
    /// shows the final state. On reaching the frame limit, leftover
    /// commands are applied to the scene but not drawn.
    pub fn run(&mut self) -> Result<RunSummary> {
        let (tx, rx) = mpsc::channel();
        let worker_stop = Arc::new(AtomicBool::new(false));
        let worker = spawn_input_worker(
            Arc::clone(&self.surface),
            self.bindings,
            tx,
            Arc::clone(&worker_stop),
            self.shutdown.clone(),
            self.options.input_poll,
        )?;

        tracing::info!(
            "Render loop started (frame interval {:?}, frame limit {:?})",
            self.options.frame_interval,
            self.options.max_frames
        );

        let mut counters = Counters::default();
        let loop_result = self.frame_loop(&rx, &mut counters);

        worker_stop.store(true, Ordering::SeqCst);
        let joined = worker
            .join()
            .map_err(|_| Error::other("Input worker thread panicked"));

        joined?;
        let stop_reason = loop_result?;

        let leftovers = self.drain_commands(&rx, &mut counters);
        if stop_reason == StopReason::Shutdown && leftovers > 0 {
            self.render()?;
            counters.frames += 1;
        }

        let summary = RunSummary {
            frames: counters.frames,
            commands_applied: counters.commands_applied,
            selection_changes: counters.selection_changes,
            selected: self.scene.selected_id(),
            stop_reason,
        };
        tracing::info!(
            "Render loop stopped ({:?}): {} frames, {} commands, {} selection changes",
            summary.stop_reason,
            summary.frames,
            summary.commands_applied,
            summary.selection_changes
        );
        Ok(summary)
    }

    fn frame_loop(
        &mut self,
        rx: &Receiver<SceneCommand>,
        counters: &mut Counters,
    ) -> Result<StopReason> {
        loop {
            if self.shutdown.is_requested() {
                return Ok(StopReason::Shutdown);
            }
            if let Some(max) = self.options.max_frames {
                if counters.frames >= max {
                    return Ok(StopReason::FrameLimit);
                }
            }

            loop {
                match rx.try_recv() {
                    Ok(command) => {
                        self.scene.apply(&command);
                        counters.commands_applied += 1;
                    }
                    Err(TryRecvError::Empty) => break,
                    // The worker also exits on shutdown and may drop its end first.
                    Err(TryRecvError::Disconnected) if self.shutdown.is_requested() => {
                        return Ok(StopReason::Shutdown);
                    }
                    Err(TryRecvError::Disconnected) => return Err(Error::ChannelClosed),
                }
            }

            if self.handle_double_click() {
                counters.selection_changes += 1;
            }

            self.render()?;
            counters.frames += 1;

            thread::sleep(self.options.frame_interval);
        }
    }

    fn drain_commands(&mut self, rx: &Receiver<SceneCommand>, counters: &mut Counters) -> u64 {
        let mut applied = 0;
        while let Ok(command) = rx.try_recv() {
            self.scene.apply(&command);
            applied += 1;
        }
        counters.commands_applied += applied;
        applied
    }

    fn handle_double_click(&mut self) -> bool {
        let click = self.surface.lock().poll_double_click();
        match click {
            Some((x, y)) => self.scene.try_select(x, y),
            None => false,
        }
    }

    fn render(&self) -> Result<()> {
        let mut surface = self.surface.lock();
        render_scene(&self.scene, &self.colors, &mut *surface)
    }
}

fn spawn_input_worker<S>(
    surface: Arc<Mutex<S>>,
    bindings: KeyBindings,
    tx: Sender<SceneCommand>,
    stop: Arc<AtomicBool>,
    shutdown: ShutdownHandle,
    poll_interval: Duration,
) -> Result<thread::JoinHandle<()>>
where
    S: DisplaySurface + Send + 'static,
{
    let handle = thread::Builder::new()
        .name("input-poll".to_string())
        .spawn(move || {
            tracing::debug!("Input worker started");
            while !stop.load(Ordering::SeqCst) && !shutdown.is_requested() {
                let key = surface.lock().poll_keyboard();
                let Some(key) = key else {
                    thread::sleep(poll_interval);
                    continue;
                };
                let Some(command) = bindings.map_key(key) else {
                    continue;
                };
                if tx.send(command).is_err() {
                    tracing::debug!("Render loop gone, input worker exiting");
                    break;
                }
            }
            tracing::debug!("Input worker stopped");
        })?;
    Ok(handle)
}
