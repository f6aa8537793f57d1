//! Arena allocation for syntax trees.
//!
//! AST nodes reference their children through `&'a` borrows of this arena.
//! Each child is allocated once and referenced by exactly one parent, so the
//! tree stays acyclic and is freed in one step when the arena is dropped.
//! Destructors of allocated values never run, so nodes hold only borrowed
//! data (`&'a str`, `&'a T`) and plain values.

use bumpalo::Bump;

/// Bump arena backing one compilation unit's AST.
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Move a node into the arena and return a shared reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Copy a string into the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Move every item of an exactly-sized iterator into one arena slice.
    pub fn alloc_slice<T, I>(&self, items: I) -> &[T]
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        self.bump.alloc_slice_fill_iter(items)
    }

    /// Returns the total bytes allocated in this arena.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Drop every node at once, keeping the memory for the next unit.
    pub fn reset(&mut self) {
        self.bump.reset();
    }
}

impl Default for AstArena {
    fn default() -> Self {
        Self::new()
    }
}
