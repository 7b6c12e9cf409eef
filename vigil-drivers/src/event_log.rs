//! Stored-event ring buffer

use heapless::{Deque, String};

use vigil_core::traits::{EventLog, EVENT_TEXT_LEN};

/// Bounded event log
///
/// Holds the newest `N` entries; recording into a full log evicts the
/// oldest one. Index 0 is the oldest stored entry.
#[derive(Debug)]
pub struct RingEventLog<const N: usize> {
    entries: Deque<String<EVENT_TEXT_LEN>, N>,
}

impl<const N: usize> Default for RingEventLog<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RingEventLog<N> {
    /// Create an empty log
    pub fn new() -> Self {
        Self {
            entries: Deque::new(),
        }
    }
}

impl<const N: usize> EventLog for RingEventLog<N> {
    fn stored_events(&self) -> usize {
        self.entries.len()
    }

    fn event_text(&self, index: usize) -> Option<String<EVENT_TEXT_LEN>> {
        self.entries.iter().nth(index).cloned()
    }

    fn record(&mut self, text: &str) {
        if self.entries.is_full() {
            let _ = self.entries.pop_front();
        }

        // Longer lines are cut at the storage width.
        let mut entry = String::new();
        for ch in text.chars() {
            if entry.push(ch).is_err() {
                break;
            }
        }
        let _ = self.entries.push_back(entry);
    }
}
