//! Actor Model: the background thread that owns the terminal.
//!
//! Producers never write to the output stream. They mutate shared state
//! under a lock, and a single repaint actor redraws from that state on a
//! fixed tick:
//!
//! ```text
//! ┌──────────────┐   log / update_line   ┌────────────────────┐
//! │  Producers   │ ────────────────────▶ │ Mutex<DisplayState>│
//! └──────────────┘                       └────────────────────┘
//!                                                  │ lock + render
//!        tick / stop (crossbeam select!)           ▼
//!                                        ┌────────────────────┐
//!                                        │   Repaint Thread   │ ──▶ stdout
//!                                        └────────────────────┘
//! ```

mod repainter;

pub use repainter::{BoxedWriter, RepaintActor};
