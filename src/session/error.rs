use thiserror::Error;
use crate::domain::ProductId;

/// Errors that can occur while handling a storefront session request.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("Product is out of stock: {0}")]
    OutOfStock(ProductId),
    #[error("Product not found: {0}")]
    UnknownProduct(ProductId),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
