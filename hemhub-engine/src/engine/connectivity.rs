//! Environment connectivity signal.
//!
//! The dashboard treats reachability as an external boolean feed: the
//! embedding environment flips it on online/offline transitions and the
//! probe polls it on demand.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub trait ConnectivitySignal: Send {
    fn is_online(&self) -> bool;
}

/// Shared flag with handle semantics: clone one side into the session,
/// keep the other to push online/offline transitions from outside.
#[derive(Debug, Clone)]
pub struct SharedConnectivity {
    online: Arc<AtomicBool>,
}

impl SharedConnectivity {
    pub fn new(online: bool) -> Self {
        Self {
            online: Arc::new(AtomicBool::new(online)),
        }
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::Release);
    }
}

impl ConnectivitySignal for SharedConnectivity {
    fn is_online(&self) -> bool {
        self.online.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushed_transitions_are_visible_through_clones() {
        let signal = SharedConnectivity::new(true);
        let handle = signal.clone();
        assert!(signal.is_online());

        handle.set_online(false);
        assert!(!signal.is_online());
    }
}
