//! Structural comparison of configuration entities.
//!
//! Every entity describes its fields once, through [`Entity::walk`]. Both
//! [`Compare::equal_with`] and [`Compare::diff_with`] are folds over that single
//! walk, so the boolean answer and the structured report always agree:
//! a diff is empty exactly when the two values are equal.

mod diff;
mod entity;
mod field;
mod macros;
mod options;
pub mod primitives;
mod walker;

#[cfg(test)]
mod tests;

pub use diff::{Change, DiffNode, DiffResult};
pub use entity::{Compare, Entity};
pub use field::Field;
pub use options::CompareOptions;
pub use walker::{Sink, Walker};
