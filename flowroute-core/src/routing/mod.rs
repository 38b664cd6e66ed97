//! Pathfinding strategies and k-shortest-path enumeration
//!
//! All searches are read-only over the network. Expansion order is fixed by
//! the network's sorted neighbor enumeration and by insertion-ordered
//! frontiers, so results are reproducible across runs and platforms.

mod custom;
mod frontier;
mod informed;
pub mod ksp;
mod result;
mod scope;
mod strategy;
mod uninformed;

pub use ksp::{KspLimits, top_k};
pub use result::{PathResult, SearchOutcome};
pub use scope::SearchMask;
pub use strategy::Strategy;

pub(crate) use scope::{GoalSet, open_neighbors};
