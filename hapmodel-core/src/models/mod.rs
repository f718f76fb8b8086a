//! Configuration entities of the data plane API.
//!
//! Every type derives serde for the wire format and implements
//! [`Entity`](crate::compare::Entity) through its field manifest.

mod acl;
mod backend;
mod balance;
mod bind;
mod configuration;
mod cookie;
mod forwardfor;
mod frontend;
mod http_request_rule;
mod kind;
mod server;
mod ssl;
mod stick_table;
mod types;

#[cfg(test)]
mod tests;

pub use acl::Acl;
pub use backend::Backend;
pub use balance::Balance;
pub use bind::Bind;
pub use configuration::Configuration;
pub use cookie::Cookie;
pub use forwardfor::Forwardfor;
pub use frontend::Frontend;
pub use http_request_rule::{HttpRequestRule, ReturnHeader};
pub use kind::EntityKind;
pub use server::{Server, ServerParams};
pub use ssl::SslOptions;
pub use stick_table::StickTable;
pub use types::*;
