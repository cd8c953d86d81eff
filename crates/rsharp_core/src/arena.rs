//! Arena allocation for syntax trees.
//!
//! Syntax nodes are allocated from a bump arena and borrowed for the lifetime
//! of the arena. Nodes are never mutated once built and never dropped
//! individually, so they must not own heap data.

use bumpalo::Bump;

/// Bump arena backing one or more syntax trees.
///
/// Freeing the arena frees every node in it at once.
pub struct SyntaxArena {
    bump: Bump,
}

impl SyntaxArena {
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Create an arena with `capacity` bytes reserved up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Move a value into the arena.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Move the elements of a vector into an arena slice, preserving order.
    #[inline]
    pub fn alloc_vec<T>(&self, items: Vec<T>) -> &[T] {
        self.bump.alloc_slice_fill_iter(items)
    }

    /// Total bytes handed out by this arena so far.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

impl Default for SyntaxArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_vec_keeps_order() {
        let arena = SyntaxArena::new();
        let slice = arena.alloc_vec(vec![3, 1, 2]);
        assert_eq!(slice, &[3, 1, 2]);
    }

    #[test]
    fn test_alloc_empty_vec() {
        let arena = SyntaxArena::new();
        let slice: &[u32] = arena.alloc_vec(Vec::new());
        assert!(slice.is_empty());
    }

    #[test]
    fn test_allocated_bytes_grows() {
        let arena = SyntaxArena::with_capacity(64);
        let before = arena.allocated_bytes();
        for i in 0..1024u64 {
            arena.alloc(i);
        }
        assert!(arena.allocated_bytes() >= before);
    }
}
