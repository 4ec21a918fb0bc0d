pub mod heuristic;
pub mod selector;

pub use selector::{HeuristicSelector, MoveSelector};
