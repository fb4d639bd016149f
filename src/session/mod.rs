//! The storefront session actor: sole owner of the cart and the selected category.

mod service;
pub mod error;

pub use service::*;
pub use error::*;
