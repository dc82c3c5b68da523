//! Newtype identifier for container children.
//!
//! Measurement caches are keyed per child entry rather than through any
//! shared global table, so each entry needs an identity that is stable for
//! its whole lifetime and never reused within a process.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CHILD_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a child entry within a layout container.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ChildId(u64);

impl ChildId {
    /// Allocates a fresh process-unique id.
    pub fn next() -> Self {
        Self(NEXT_CHILD_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "child#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_ordered() {
        let a = ChildId::next();
        let b = ChildId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }
}
