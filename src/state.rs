//! Display state: header lines, separator, and the rolling message tail.
//!
//! The state is plain data. All concurrency lives one level up: the
//! display wraps a single `DisplayState` in one mutex, so header and tail
//! changes are always observed together by a repaint.

use crate::terminal::OutputBuffer;
use std::collections::VecDeque;

/// Default number of messages retained in the tail.
pub const DEFAULT_MAX_MESSAGES: usize = 10;

/// A consistent copy of everything a repaint would draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Header lines in display order.
    pub headers: Vec<String>,
    /// Line printed between the headers and the tail.
    pub separator: String,
    /// Tail messages, newest first.
    pub messages: Vec<String>,
}

/// Mutable state shared between producers and the repaint thread.
#[derive(Debug)]
pub struct DisplayState {
    /// Fixed-length header slots.
    headers: Vec<String>,
    /// Immutable after construction.
    separator: String,
    /// Newest message at the front.
    messages: VecDeque<String>,
    /// Maximum number of messages to retain.
    max_messages: usize,
}

impl DisplayState {
    /// Create a new state, copying the given header lines.
    pub fn new<S: AsRef<str>>(separator: &str, headers: &[S], max_messages: usize) -> Self {
        Self {
            headers: headers.iter().map(|h| h.as_ref().to_owned()).collect(),
            separator: separator.to_owned(),
            messages: VecDeque::with_capacity(max_messages.min(DEFAULT_MAX_MESSAGES) + 1),
            max_messages,
        }
    }

    /// Number of header slots.
    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    /// Header lines in display order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Tail messages, newest first.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    /// Push a message to the front of the tail, evicting the oldest
    /// entries beyond the cap.
    pub fn push_message(&mut self, message: String) {
        self.messages.push_front(message);
        self.messages.truncate(self.max_messages);
    }

    /// Overwrite a header slot (1-based).
    ///
    /// Returns `false` and leaves the state untouched when `line_number`
    /// is out of range.
    pub fn set_header(&mut self, line_number: usize, content: String) -> bool {
        match line_number
            .checked_sub(1)
            .and_then(|index| self.headers.get_mut(index))
        {
            Some(slot) => {
                *slot = content;
                true
            }
            None => false,
        }
    }

    /// Copy the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            headers: self.headers.clone(),
            separator: self.separator.clone(),
            messages: self.messages.iter().cloned().collect(),
        }
    }

    /// Compose one repaint frame: home, headers, separator, tail.
    pub fn render_into(&self, out: &mut OutputBuffer) {
        out.cursor_home();
        for header in &self.headers {
            out.write_line(header);
        }
        out.write_line(&self.separator);
        for message in &self.messages {
            out.write_line(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(headers: &[&str]) -> DisplayState {
        DisplayState::new("----", headers, DEFAULT_MAX_MESSAGES)
    }

    #[test]
    fn test_tail_is_newest_first_and_capped() {
        let mut s = state(&[]);
        for c in 'a'..='k' {
            s.push_message(c.to_string());
        }

        let tail: Vec<&str> = s.messages().collect();
        assert_eq!(tail, ["k", "j", "i", "h", "g", "f", "e", "d", "c", "b"]);
    }

    #[test]
    fn test_tail_cap_boundary() {
        let mut s = state(&[]);
        for c in 'a'..='j' {
            s.push_message(c.to_string());
        }
        assert_eq!(s.messages().count(), 10);
        assert_eq!(s.messages().last(), Some("a"));

        s.push_message("k".to_string());
        assert_eq!(s.messages().count(), 10);
        assert_eq!(s.messages().next(), Some("k"));
        assert_eq!(s.messages().last(), Some("b"));
    }

    #[test]
    fn test_custom_cap() {
        let mut s = DisplayState::new("", &["h"], 2);
        s.push_message("1".into());
        s.push_message("2".into());
        s.push_message("3".into());
        assert_eq!(s.messages().collect::<Vec<_>>(), ["3", "2"]);
    }

    #[test]
    fn test_unbounded_cap_does_not_overflow() {
        let mut s = DisplayState::new("--", &["h"], usize::MAX);
        for i in 0..25 {
            s.push_message(i.to_string());
        }
        assert_eq!(s.messages().count(), 25);
        assert_eq!(s.messages().next(), Some("24"));
    }

    #[test]
    fn test_header_bounds() {
        let mut s = state(&["one", "two", "three"]);

        assert!(!s.set_header(0, "x".into()));
        assert!(!s.set_header(4, "x".into()));
        assert_eq!(s.headers(), ["one", "two", "three"]);

        assert!(s.set_header(2, "x".into()));
        assert_eq!(s.headers(), ["one", "x", "three"]);
    }

    #[test]
    fn test_headers_are_copied() {
        let mut caller = vec!["H1".to_string(), "H2".to_string()];
        let s = DisplayState::new("--", &caller, DEFAULT_MAX_MESSAGES);
        caller[0].push_str(" changed");

        assert_eq!(s.headers(), ["H1", "H2"]);
        assert_eq!(s.header_count(), 2);
    }

    #[test]
    fn test_render_frame_layout() {
        let mut s = state(&["H1", "H2"]);
        s.push_message("old".into());
        s.push_message("new".into());

        let mut out = OutputBuffer::new();
        s.render_into(&mut out);
        assert_eq!(out.as_bytes(), b"\x1b[HH1\nH2\n----\nnew\nold\n");
    }

    #[test]
    fn test_render_initial_state() {
        let s = state(&["H1", "H2"]);
        let snap = s.snapshot();
        assert_eq!(snap.headers, ["H1", "H2"]);
        assert_eq!(snap.separator, "----");
        assert!(snap.messages.is_empty());

        let mut out = OutputBuffer::new();
        s.render_into(&mut out);
        assert_eq!(out.as_bytes(), b"\x1b[HH1\nH2\n----\n");
    }
}
