//! UI Session State
//!
//! Plain state machine behind the inline editors: at most one item is
//! being edited at a time.

/// Inline edit of at most one item at a time
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession<K> {
    target: Option<K>,
    buffer: String,
}

impl<K: Copy + PartialEq> EditSession<K> {
    pub fn new() -> Self {
        Self { target: None, buffer: String::new() }
    }

    /// Start editing `key`, abandoning any other edit in progress
    pub fn begin(&mut self, key: K, text: &str) {
        self.target = Some(key);
        self.buffer = text.to_string();
    }

    pub fn is_editing(&self, key: K) -> bool {
        self.target == Some(key)
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, text: String) {
        if self.target.is_some() {
            self.buffer = text;
        }
    }

    /// Discard the buffer; the item keeps its prior text
    pub fn cancel(&mut self) {
        self.target = None;
        self.buffer.clear();
    }

    /// End the edit and hand back what to apply
    pub fn confirm(&mut self) -> Option<(K, String)> {
        let key = self.target.take()?;
        Some((key, std::mem::take(&mut self.buffer)))
    }
}
