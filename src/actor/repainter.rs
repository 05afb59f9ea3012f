//! Repaint Actor: Dedicated thread that owns the output stream.
//!
//! The actor wakes on a fixed tick, locks the shared display state, and
//! rewrites the status region from the top-left corner. It is the only
//! code that writes to the output, so producers never touch the terminal.

use crate::state::DisplayState;
use crate::terminal::OutputBuffer;
use crossbeam_channel::{bounded, select, tick, Receiver, Sender};
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Output stream the repaint thread writes frames to.
pub type BoxedWriter = Box<dyn Write + Send>;

/// Repaint actor that periodically redraws the status region.
pub struct RepaintActor {
    /// Handle to the repaint thread.
    handle: Option<JoinHandle<()>>,
    /// Dropping this closes the stop channel.
    stop_tx: Option<Sender<()>>,
    /// Completed repaint ticks.
    frames: Arc<AtomicU64>,
}

impl RepaintActor {
    /// Spawn the repaint thread.
    ///
    /// # Arguments
    ///
    /// * `state` - Shared display state, read under its lock on every tick.
    /// * `writer` - Output stream; owned exclusively by the repaint thread.
    /// * `interval` - Time between repaints.
    /// * `thread_name` - Name given to the OS thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS fails to spawn the thread.
    pub fn spawn(
        state: Arc<Mutex<DisplayState>>,
        writer: BoxedWriter,
        interval: Duration,
        thread_name: String,
    ) -> io::Result<Self> {
        let (stop_tx, stop_rx) = bounded::<()>(0);
        let frames = Arc::new(AtomicU64::new(0));
        let frames_clone = frames.clone();

        let handle = thread::Builder::new().name(thread_name).spawn(move || {
            Self::run_loop(&state, writer, &stop_rx, &frames_clone, interval);
        })?;

        Ok(Self {
            handle: Some(handle),
            stop_tx: Some(stop_tx),
            frames,
        })
    }

    /// Shared frame counter, readable after the actor is gone.
    pub fn frame_counter(&self) -> Arc<AtomicU64> {
        self.frames.clone()
    }

    /// Signal the repaint thread to stop and wait for it to exit.
    ///
    /// When this returns the cursor has been restored.
    pub fn join(mut self) {
        self.stop_tx.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!("repaint thread panicked");
            }
        }
    }

    /// Main repaint loop.
    fn run_loop(
        state: &Mutex<DisplayState>,
        mut writer: BoxedWriter,
        stop_rx: &Receiver<()>,
        frames: &AtomicU64,
        interval: Duration,
    ) {
        tracing::debug!(?interval, "repaint thread started");

        let mut output = OutputBuffer::new();
        output.clear_screen();
        output.cursor_hide();
        Self::flush(&output, &mut writer);

        let ticker = tick(interval);
        loop {
            select! {
                recv(stop_rx) -> _ => break,
                recv(ticker) -> _ => {
                    output.clear();
                    let guard = state.lock().unwrap_or_else(PoisonError::into_inner);
                    guard.render_into(&mut output);
                    Self::flush(&output, &mut writer);
                    drop(guard);

                    let frame = frames.fetch_add(1, Ordering::AcqRel) + 1;
                    tracing::trace!(frame, bytes = output.len(), "repainted");
                }
            }
        }

        output.clear();
        output.cursor_show();
        Self::flush(&output, &mut writer);
        tracing::debug!(frames = frames.load(Ordering::Acquire), "repaint thread stopped");
    }

    /// Best-effort write: a broken terminal must not take the producers down.
    fn flush(output: &OutputBuffer, writer: &mut BoxedWriter) {
        if let Err(e) = output.flush_to(writer.as_mut()) {
            tracing::warn!(error = %e, "failed to write status frame");
        }
    }
}

impl Drop for RepaintActor {
    fn drop(&mut self) {
        self.stop_tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
