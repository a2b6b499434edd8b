//! Back/forward navigation history
//!
//! An ordered list of visited locations with a cursor. Advancing drops any
//! entries ahead of the cursor before appending, like a browser.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavHistory<T> {
    entries: Vec<T>,
    cursor: usize,
}

impl<T> NavHistory<T> {
    /// History whose only entry is `start`
    #[must_use]
    pub fn new(start: T) -> Self {
        Self {
            entries: vec![start],
            cursor: 0,
        }
    }

    #[must_use]
    pub fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    /// Visit `entry`, discarding forward history
    pub fn advance(&mut self, entry: T) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor += 1;
    }

    /// Step back; `None` at the oldest entry
    pub fn back(&mut self) -> Option<&T> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward; `None` at the newest entry
    pub fn forward(&mut self) -> Option<&T> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    #[must_use]
    pub const fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a history holds at least its starting entry
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
