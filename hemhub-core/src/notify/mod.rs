//! Transient notification board.
//!
//! Every entry walks the fixed phase sequence entering → visible →
//! exiting before removal. The board owns entry state only; the timing of
//! each transition belongs to the session driving it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a live notification entry, unique per board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Styling class of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPhase {
    Entering,
    Visible,
    Exiting,
}

impl NotificationPhase {
    /// The only legal successor, or `None` once exiting.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Entering => Some(Self::Visible),
            Self::Visible => Some(Self::Exiting),
            Self::Exiting => None,
        }
    }
}

/// A transient, timed UI message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEntry {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: NotificationPhase,
}

/// Outcome of a push: the created entry, plus the oldest entry evicted to
/// stay under the live cap, if any.
#[derive(Debug, Clone)]
pub struct Pushed {
    pub entry: NotificationEntry,
    pub evicted: Option<NotificationId>,
}

/// Owns all live notification entries in insertion order.
#[derive(Debug)]
pub struct NotificationBoard {
    entries: Vec<NotificationEntry>,
    next_id: u64,
    max_live: usize,
}

impl NotificationBoard {
    pub fn new(max_live: usize) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            max_live: max_live.max(1),
        }
    }

    /// Creates an entry in the entering phase. When the board is at
    /// capacity the oldest live entry is evicted first.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> Pushed {
        let evicted = if self.entries.len() >= self.max_live {
            let oldest = self.entries.remove(0);
            tracing::debug!(id = oldest.id.0, "Evicting oldest notification at live cap");
            Some(oldest.id)
        } else {
            None
        };

        let id = NotificationId(self.next_id);
        self.next_id += 1;
        let entry = NotificationEntry {
            id,
            message: message.into(),
            kind,
            phase: NotificationPhase::Entering,
        };
        self.entries.push(entry.clone());
        Pushed { entry, evicted }
    }

    /// Moves an entry to its next phase and returns the updated snapshot.
    /// `None` when the entry is gone (evicted) or already exiting.
    pub fn advance(&mut self, id: NotificationId) -> Option<NotificationEntry> {
        let entry = self.entries.iter_mut().find(|e| e.id == id)?;
        entry.phase = entry.phase.next()?;
        Some(entry.clone())
    }

    /// Removes an entry entirely. `None` when it was already gone.
    pub fn remove(&mut self, id: NotificationId) -> Option<NotificationEntry> {
        let idx = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(idx))
    }

    pub fn get(&self, id: NotificationId) -> Option<&NotificationEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Live entries in insertion order.
    pub fn live(&self) -> &[NotificationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
