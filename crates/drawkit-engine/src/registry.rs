//! Process-wide registry of live GPU contexts.
//!
//! Backends register a context from their post-init hook and unregister it from
//! their pre-dispose hook, so the registry stays balanced no matter how far a
//! chain got before failing.

use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Identity of one context instance, unique for the lifetime of the process.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ContextId(u64);

impl ContextId {
    /// Allocates a fresh id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ctx#{}", self.0)
    }
}

static LIVE: LazyLock<Mutex<HashSet<ContextId>>> = LazyLock::new(|| Mutex::new(HashSet::new()));

fn live() -> MutexGuard<'static, HashSet<ContextId>> {
    // A panic while holding the lock cannot leave the set half-updated.
    LIVE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Records `id` as live. Returns `false` if it was already registered.
pub fn register(id: ContextId) -> bool {
    let inserted = live().insert(id);
    if inserted {
        log::debug!("registered {id}");
    } else {
        log::warn!("{id} registered twice");
    }
    inserted
}

/// Removes `id`. Returns `false` if it was not registered.
pub fn unregister(id: ContextId) -> bool {
    let removed = live().remove(&id);
    if removed {
        log::debug!("unregistered {id}");
    } else {
        log::warn!("{id} unregistered without being registered");
    }
    removed
}

pub fn is_registered(id: ContextId) -> bool {
    live().contains(&id)
}

/// Number of contexts currently registered.
pub fn live_count() -> usize {
    live().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = ContextId::next();
        let b = ContextId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn register_then_unregister() {
        let id = ContextId::next();
        assert!(!is_registered(id));
        assert!(register(id));
        assert!(is_registered(id));
        assert!(!register(id));
        assert!(unregister(id));
        assert!(!unregister(id));
        assert!(!is_registered(id));
    }
}
