// One history plus a cursor into it

use crate::snapshot::{History, Snapshot};

/// Exclusive owner of a [`History`] and the replay cursor
#[derive(Debug)]
pub struct Session {
    id: u64,
    history: History,
    cursor: usize,
}

impl Session {
    pub fn new(id: u64, history: History) -> Self {
        Session {
            id,
            history,
            cursor: 0,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn into_history(self) -> History {
        self.history
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> &Snapshot {
        // cursor never leaves 0..len and a history is never empty
        &self.history.snapshots()[self.cursor]
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.history.last_index()
    }

    /// Move the cursor forward by one; false if already at the last index
    pub fn advance(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.cursor += 1;
        true
    }
}
