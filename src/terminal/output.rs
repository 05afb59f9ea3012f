//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.

use crossterm::{cursor, queue, terminal};
use std::io::{self, Write};

/// Pre-allocated buffer for building one frame of terminal output.
///
/// A repaint is accumulated here, then flushed in a single `write()` call
/// so the terminal never shows a half-drawn frame.
#[derive(Debug)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical status region (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Write a string followed by a line terminator.
    #[inline]
    pub fn write_line(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
        self.data.push(b'\n');
    }

    /// Move the cursor to the top-left corner without clearing.
    ///
    /// Emitted as the bare `CSI H` rather than crossterm's `MoveTo(0, 0)`,
    /// which spells out `CSI 1;1H`.
    #[inline]
    pub fn cursor_home(&mut self) {
        self.data.extend_from_slice(b"\x1b[H");
    }

    /// Hide cursor.
    #[inline]
    pub fn cursor_hide(&mut self) {
        // Writes into a Vec cannot fail.
        let _ = queue!(self, cursor::Hide);
    }

    /// Show cursor.
    #[inline]
    pub fn cursor_show(&mut self) {
        let _ = queue!(self, cursor::Show);
    }

    /// Clear the entire screen.
    #[inline]
    pub fn clear_screen(&mut self) {
        let _ = queue!(self, terminal::Clear(terminal::ClearType::All));
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
