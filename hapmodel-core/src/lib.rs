pub mod cli;
pub mod compare;
pub mod logging;
pub mod models;
pub mod snapshot;

pub use compare::{Compare, CompareOptions, DiffNode, DiffResult, Entity};
