//! Application layer: request dispatch and command/query handlers.
//!
//! - [`dispatch`] - the dispatcher routing each request type to its handler
//! - [`handlers`] - one handler per request type

pub mod dispatch;
pub mod handlers;
