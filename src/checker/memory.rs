//! In-process membership store.

use std::collections::HashSet;

use crate::checker::DupeChecker;
use crate::error::Result;

/// Key set held in a `HashSet`, scoped to one run.
///
/// The default backend for single-shard batches: nothing to connect
/// to, and the set vanishes with the process.
#[derive(Debug, Default)]
pub struct MemoryChecker {
    seen: HashSet<String>,
}

impl MemoryChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct keys claimed so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl DupeChecker for MemoryChecker {
    fn is_new(&mut self, key: &str) -> Result<bool> {
        Ok(self.seen.insert(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_claim_wins() {
        let mut checker = MemoryChecker::new();
        assert!(checker.is_new("k1").unwrap());
        assert!(!checker.is_new("k1").unwrap());
        assert!(!checker.is_new("k1").unwrap());
    }

    #[test]
    fn test_distinct_keys_are_independent() {
        let mut checker = MemoryChecker::new();
        assert!(checker.is_new("k1").unwrap());
        assert!(checker.is_new("k2").unwrap());
        assert_eq!(checker.len(), 2);
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let mut a = MemoryChecker::new();
        let mut b = MemoryChecker::new();
        assert!(a.is_new("k1").unwrap());
        assert!(b.is_new("k1").unwrap());
    }
}
