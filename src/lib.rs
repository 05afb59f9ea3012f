//! # Tailboard
//!
//! An in-place terminal status display.
//!
//! Tailboard draws a fixed set of header lines, a separator, and the ten
//! most recent log messages, repainting the region from the top-left
//! corner every 500ms so it appears to update live without scrolling.
//!
//! ## Core Concepts
//!
//! - **Single lock**: header lines and the message tail share one mutex,
//!   so every repaint shows a consistent view
//! - **Actor model**: one repaint thread is the only writer to the terminal
//! - **Clean shutdown**: `stop` blocks until the cursor has been restored
//!
//! ## Example
//!
//! ```rust,no_run
//! use tailboard::StatusDisplay;
//!
//! let display = StatusDisplay::new("----", &["downloaded: 0", "failed: 0"])?;
//! display.log("fetching index");
//! display.update_line(1, "downloaded: 12");
//! display.stop();
//! # Ok::<(), std::io::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod display;
pub mod state;
pub mod terminal;

// Re-exports for convenience
pub use display::{DisplayConfig, StatusDisplay};
pub use state::{Snapshot, DEFAULT_MAX_MESSAGES};
pub use terminal::OutputBuffer;
