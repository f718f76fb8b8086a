mod fixtures;
pub mod tracing;

pub use fixtures::fixture;
pub use tracing::{CapturedEvent, capture_events};
