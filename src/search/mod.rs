//! Search module for the isolation AI
//!
//! Contains:
//! - Node budget shared across one top-level search
//! - Exhaustive minimax with win/loss sentinels

pub mod budget;
pub mod minimax;

pub use budget::{NodeBudget, DEFAULT_BUDGET};
pub use minimax::{SearchResult, SearchStats, Searcher, Value};
