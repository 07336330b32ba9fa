//! Request generation guard
//!
//! Each fetch takes the next generation number; only the most recently
//! issued generation may commit its result. A slow early response can
//! never clobber a newer one, however the completions interleave.

use std::sync::atomic::{AtomicU64, Ordering};

/// Latest-wins guard for overlapping fetches
#[derive(Debug, Default)]
pub struct GenerationGuard {
    issued: AtomicU64,
    committed: AtomicU64,
}

impl GenerationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch; returns its generation
    pub fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Attempt to commit a completed fetch. Succeeds only for the most
    /// recently issued generation, and only once.
    pub fn try_commit(&self, generation: u64) -> bool {
        if generation != self.issued.load(Ordering::SeqCst) {
            return false;
        }
        let previous = self.committed.swap(generation, Ordering::SeqCst);
        previous < generation
    }

    /// Generation of the last committed fetch (0 = none yet)
    pub fn committed(&self) -> u64 {
        self.committed.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_generation_wins() {
        let guard = GenerationGuard::new();
        let g1 = guard.begin();
        let g2 = guard.begin();

        // Newest completes first and commits
        assert!(guard.try_commit(g2));
        // The stale earlier fetch is rejected
        assert!(!guard.try_commit(g1));
        assert_eq!(guard.committed(), g2);
    }

    #[test]
    fn test_in_order_completions_both_commit() {
        let guard = GenerationGuard::new();
        let g1 = guard.begin();
        assert!(guard.try_commit(g1));

        let g2 = guard.begin();
        assert!(guard.try_commit(g2));
        assert_eq!(guard.committed(), 2);
    }

    #[test]
    fn test_double_commit_rejected() {
        let guard = GenerationGuard::new();
        let g1 = guard.begin();
        assert!(guard.try_commit(g1));
        assert!(!guard.try_commit(g1));
    }
}
