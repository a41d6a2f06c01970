//! Headless session: console lines drive a framebuffer-backed runtime.

use anyhow::Context;
use segkit_settings::Config;
use segkit_ui::{
    ConsoleLine, FramebufferSurface, RunSummary, Runtime, ScriptedInput, ShutdownHandle, StopReason,
};
use std::io::BufRead;
use std::thread;
use std::time::Duration;

/// Feeds console lines into `input` until `q` or end of input, then waits
/// for the queued input to be consumed and requests shutdown.
///
/// Returns the number of lines read.
pub fn feed_console<R: BufRead>(
    reader: R,
    input: &ScriptedInput,
    shutdown: &ShutdownHandle,
    drain_poll: Duration,
) -> std::io::Result<usize> {
    let mut lines = 0;
    for line in reader.lines() {
        let line = line?;
        lines += 1;
        let parsed = ConsoleLine::parse(&line);
        if !parsed.feed(input) {
            tracing::debug!("Quit requested on console line {}", lines);
            break;
        }
    }

    while !input.is_idle() && !shutdown.is_requested() {
        thread::sleep(drain_poll);
    }
    // Let the worker hand over the last key it popped
    thread::sleep(drain_poll * 4);
    shutdown.request();
    Ok(lines)
}

/// Runs a full session over `reader` with `config`, saving the last frame
/// to `config.snapshot_path` when set.
pub fn run_session<R>(config: &Config, reader: R) -> anyhow::Result<RunSummary>
where
    R: BufRead + Send + 'static,
{
    let input = ScriptedInput::new();
    let surface = FramebufferSurface::new(
        config.canvas.width,
        config.canvas.height,
        config.canvas.background,
        input.clone(),
    );
    let mut runtime = Runtime::new(surface, config);
    let shutdown = runtime.shutdown_handle();
    let drain_poll = runtime.options().input_poll;

    let feeder = thread::Builder::new()
        .name("console".to_string())
        .spawn(move || feed_console(reader, &input, &shutdown, drain_poll))
        .context("Failed to spawn console reader")?;

    let summary = runtime.run().context("Render loop failed")?;

    // A frame limit can end the run while the console is still open; the
    // reader is left blocked on its input rather than joined.
    if summary.stop_reason == StopReason::FrameLimit {
        runtime.shutdown_handle().request();
        if !feeder.is_finished() {
            tracing::warn!("Frame limit reached before console input ended");
        }
    } else {
        let lines = feeder
            .join()
            .map_err(|_| anyhow::anyhow!("Console reader thread panicked"))?
            .context("Failed to read console input")?;
        tracing::debug!("Console reader finished after {} lines", lines);
    }

    if let Some(path) = &config.snapshot_path {
        runtime
            .surface()
            .lock()
            .save_png(path)
            .with_context(|| format!("Failed to save snapshot to {}", path.display()))?;
    }

    Ok(summary)
}
