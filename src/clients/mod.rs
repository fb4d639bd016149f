//! Client handles for talking to actors.

#[macro_use]
mod macros;
mod session_client;

pub use session_client::*;
