//! System orchestration, startup, and shutdown logic.

pub mod config;
pub mod storefront_system;
pub mod tracing;

pub use config::*;
pub use storefront_system::*;
pub use self::tracing::*;
