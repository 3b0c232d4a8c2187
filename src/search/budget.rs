//! Node budget shared by every frame of one search

/// Default budget: child positions one search may create
pub const DEFAULT_BUDGET: u64 = 4_000_000;

/// Counter of child positions created during one top-level search.
///
/// A fresh budget is created per search and passed down the recursion by
/// mutable reference, so sibling subtrees draw from the same pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeBudget {
    limit: u64,
    created: u64,
}

impl NodeBudget {
    pub fn new(limit: u64) -> Self {
        Self { limit, created: 0 }
    }

    /// Children created so far
    #[inline]
    pub fn created(&self) -> u64 {
        self.created
    }

    #[inline]
    pub fn limit(&self) -> u64 {
        self.limit
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.created >= self.limit
    }

    /// Reserve one child. Returns false once the limit is reached.
    #[inline]
    pub fn try_take(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }
        self.created += 1;
        true
    }
}

impl Default for NodeBudget {
    fn default() -> Self {
        Self::new(DEFAULT_BUDGET)
    }
}
