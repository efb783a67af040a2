//! Pattern buffer with tail-search prompt detection.
//!
//! Only the last N bytes of accumulated output are searched for the
//! prompt, so detection stays cheap even on large command outputs
//! (a full running-config, for instance).

use regex::bytes::Regex;

/// Buffer for accumulating session output and searching for prompts.
#[derive(Debug)]
pub struct PatternBuffer {
    /// The accumulated output buffer.
    buffer: Vec<u8>,

    /// How many bytes from the end to search for patterns.
    search_depth: usize,
}

impl PatternBuffer {
    /// Create a new pattern buffer with the specified search depth.
    pub fn new(search_depth: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(4096),
            search_depth,
        }
    }

    /// Extend the buffer with new data, stripping ANSI escape codes.
    pub fn extend(&mut self, data: &[u8]) {
        let cleaned = strip_ansi_escapes::strip(data);
        self.buffer.extend_from_slice(&cleaned);
    }

    /// Search only the tail of the buffer for the pattern.
    pub fn search_tail(&self, pattern: &Regex) -> Option<regex::bytes::Match<'_>> {
        let start = self.buffer.len().saturating_sub(self.search_depth);
        pattern.find(&self.buffer[start..])
    }

    /// Check if the tail contains a pattern match.
    pub fn tail_contains(&self, pattern: &Regex) -> bool {
        self.search_tail(pattern).is_some()
    }

    /// Take ownership of the buffer contents and reset.
    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buffer)
    }

    /// Get the buffer contents as a string (lossy UTF-8 conversion).
    pub fn as_str_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.buffer)
    }

    /// Get the current buffer length.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for PatternBuffer {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_and_take() {
        let mut buffer = PatternBuffer::new(100);
        buffer.extend(b"show system\r\nSerial Number : ABC\r\n");
        assert!(!buffer.is_empty());
        let data = buffer.take();
        assert!(data.starts_with(b"show system"));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_ansi_stripping() {
        let mut buffer = PatternBuffer::new(100);
        buffer.extend(b"\x1b[32mSwitch# \x1b[0m");
        assert_eq!(buffer.take(), b"Switch# ");
    }

    #[test]
    fn test_tail_search() {
        let mut buffer = PatternBuffer::new(20);
        buffer.extend(&[b'x'; 200]);
        buffer.extend(b"\nSwitch# ");

        let pattern = Regex::new(r"#\s*$").unwrap();
        assert!(buffer.tail_contains(&pattern));
    }

    #[test]
    fn test_tail_search_ignores_old_data() {
        let mut buffer = PatternBuffer::new(10);
        buffer.extend(b"Switch# ");
        buffer.extend(&[b'x'; 100]);

        // Prompt fell outside the search window.
        let pattern = Regex::new(r"Switch#").unwrap();
        assert!(!buffer.tail_contains(&pattern));
    }
}
