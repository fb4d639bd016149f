//! # Mock Framework
//!
//! Utilities for testing session callers in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_add_to_cart`] or [`expect_update_quantity`] to assert behavior.

use tokio::sync::mpsc;
use crate::clients::SessionClient;
use crate::domain::ProductId;
use crate::messages::{ServiceResponse, SessionRequest};
use crate::session::SessionError;

/// Creates a client whose requests land on a receiver the test controls.
///
/// The test plays the session: it inspects each request and answers on the
/// oneshot sender, so success and failure replies are deterministic.
pub fn create_mock_client(buffer_size: usize) -> (SessionClient, mpsc::Receiver<SessionRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (SessionClient::new(sender), receiver)
}

/// Helper to verify that the next message is an AddToCart request
pub async fn expect_add_to_cart(
    receiver: &mut mpsc::Receiver<SessionRequest>,
) -> Option<(ProductId, ServiceResponse<(), SessionError>)> {
    match receiver.recv().await {
        Some(SessionRequest::AddToCart { product_id, respond_to }) => Some((product_id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an UpdateQuantity request
pub async fn expect_update_quantity(
    receiver: &mut mpsc::Receiver<SessionRequest>,
) -> Option<(ProductId, u32, ServiceResponse<(), SessionError>)> {
    match receiver.recv().await {
        Some(SessionRequest::UpdateQuantity { product_id, quantity, respond_to }) => {
            Some((product_id, quantity, respond_to))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move { client.add_to_cart(4).await });

        let (product_id, responder) = expect_add_to_cart(&mut receiver).await.expect("Expected AddToCart request");
        assert_eq!(product_id, 4);
        responder.send(Err(SessionError::OutOfStock(4))).unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result, Err(SessionError::OutOfStock(4)));
    }

    #[tokio::test]
    async fn test_dropped_responder_maps_to_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.add_to_cart(1).await });
        let (_, responder) = expect_add_to_cart(&mut receiver).await.unwrap();
        drop(responder);

        assert_eq!(
            task.await.unwrap(),
            Err(SessionError::ActorCommunicationError("Actor dropped".to_string()))
        );
    }

    #[tokio::test]
    async fn test_closed_channel_maps_to_communication_error() {
        let (client, receiver) = create_mock_client(1);
        drop(receiver);
        assert_eq!(
            client.total_price().await,
            Err(SessionError::ActorCommunicationError("Actor closed".to_string()))
        );
    }
}
