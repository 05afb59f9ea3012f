//! Status display: the producer-facing handle.
//!
//! `StatusDisplay` owns the shared state and the repaint actor. Producers
//! call [`StatusDisplay::log`] and [`StatusDisplay::update_line`] from any
//! thread; the repaint actor picks up their changes on its next tick.

use crate::actor::{BoxedWriter, RepaintActor};
use crate::state::{DisplayState, Snapshot, DEFAULT_MAX_MESSAGES};
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Configuration for a [`StatusDisplay`].
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Time between repaints.
    pub tick_interval: Duration,
    /// Number of messages kept in the tail.
    pub max_messages: usize,
    /// Name of the repaint thread.
    pub thread_name: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(500),
            max_messages: DEFAULT_MAX_MESSAGES,
            thread_name: "tailboard-repaint".to_string(),
        }
    }
}

/// A live, in-place status region: header lines, a separator, and the
/// most recent log messages.
///
/// The terminal is cleared and the cursor hidden as soon as the display is
/// created. Call [`stop`](Self::stop) (or drop the display) to restore the
/// cursor. Nothing else in the process should write to the same output
/// stream while the display is running.
///
/// # Example
///
/// ```rust,no_run
/// use tailboard::StatusDisplay;
///
/// let display = StatusDisplay::new("--------", &["jobs: 0", "errors: 0"])?;
/// display.log("worker 1 started");
/// display.update_line(1, "jobs: 1");
/// display.stop();
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct StatusDisplay {
    /// Header lines and tail, guarded by the only lock in the system.
    state: Arc<Mutex<DisplayState>>,
    /// Repaint actor, taken on the first `stop`.
    repainter: Mutex<Option<RepaintActor>>,
    /// Repaint tick count, kept after the actor is joined.
    frames: Arc<AtomicU64>,
}

impl StatusDisplay {
    /// Create a display on stdout with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the repaint thread cannot be spawned.
    pub fn new<S: AsRef<str>>(separator: &str, header_lines: &[S]) -> io::Result<Self> {
        Self::with_config(DisplayConfig::default(), separator, header_lines)
    }

    /// Create a display on stdout with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the repaint thread cannot be spawned.
    pub fn with_config<S: AsRef<str>>(
        config: DisplayConfig,
        separator: &str,
        header_lines: &[S],
    ) -> io::Result<Self> {
        Self::with_writer(config, io::stdout(), separator, header_lines)
    }

    /// Create a display that renders to an arbitrary writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the repaint thread cannot be spawned.
    pub fn with_writer<W, S>(
        config: DisplayConfig,
        writer: W,
        separator: &str,
        header_lines: &[S],
    ) -> io::Result<Self>
    where
        W: Write + Send + 'static,
        S: AsRef<str>,
    {
        let state = Arc::new(Mutex::new(DisplayState::new(
            separator,
            header_lines,
            config.max_messages,
        )));

        let interval = config.tick_interval.max(Duration::from_millis(1));
        let writer: BoxedWriter = Box::new(writer);
        let repainter = RepaintActor::spawn(state.clone(), writer, interval, config.thread_name)?;
        let frames = repainter.frame_counter();

        tracing::debug!(
            headers = header_lines.len(),
            max_messages = config.max_messages,
            ?interval,
            "status display created"
        );

        Ok(Self {
            state,
            repainter: Mutex::new(Some(repainter)),
            frames,
        })
    }

    fn lock_state(&self) -> MutexGuard<'_, DisplayState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a message to the top of the tail.
    ///
    /// The oldest message is dropped once the tail is full.
    pub fn log(&self, message: impl Into<String>) {
        let message = message.into();
        self.lock_state().push_message(message);
    }

    /// Replace header line `line_number` (1-based).
    ///
    /// Out-of-range line numbers, including 0, are ignored.
    pub fn update_line(&self, line_number: usize, content: impl Into<String>) {
        let content = content.into();
        if !self.lock_state().set_header(line_number, content) {
            tracing::trace!(line_number, "ignoring update for missing header line");
        }
    }

    /// Copy the state the next repaint would draw.
    pub fn snapshot(&self) -> Snapshot {
        self.lock_state().snapshot()
    }

    /// Number of header lines.
    pub fn header_count(&self) -> usize {
        self.lock_state().header_count()
    }

    /// Number of repaints completed so far.
    pub fn frames_rendered(&self) -> u64 {
        self.frames.load(Ordering::Acquire)
    }

    /// Whether the repaint thread is still running.
    pub fn is_running(&self) -> bool {
        self.repainter
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Stop repainting and restore the cursor.
    ///
    /// Blocks until the repaint thread has exited. Calling this more than
    /// once is a no-op, but a call that overlaps a running stop still waits
    /// for the cursor to be restored. Messages logged afterwards are kept
    /// but never drawn.
    pub fn stop(&self) {
        // Held across the join so concurrent callers queue behind it.
        let mut repainter = self
            .repainter
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(repainter) = repainter.take() {
            repainter.join();
        }
    }
}

impl Drop for StatusDisplay {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for StatusDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusDisplay")
            .field("state", &*self.lock_state())
            .field("running", &self.is_running())
            .field("frames", &self.frames_rendered())
            .finish()
    }
}
