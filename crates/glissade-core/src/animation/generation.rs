use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Monotonic transition tag shared between the coordinator and its animations.
///
/// Each transition takes a fresh tag with [`Generation::advance`]. Animations
/// started under an older tag see [`Generation::is_current`] turn false and
/// stop without writing their final position.
#[derive(Debug, Clone, Default)]
pub struct Generation(Arc<AtomicU64>);

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current tag
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::Acquire)
    }

    /// Supersede all outstanding work and return the new tag
    pub fn advance(&self) -> u64 {
        self.0.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub fn is_current(&self, tag: u64) -> bool {
        self.current() == tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_supersedes() {
        let generation = Generation::new();
        let first = generation.advance();
        assert!(generation.is_current(first));

        let shared = generation.clone();
        let second = shared.advance();
        assert!(second > first);
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
