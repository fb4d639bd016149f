use tracing::{error, info, warn};
use crate::catalog::Catalog;
use crate::clients::SessionClient;
use crate::session::SessionService;
use super::StorefrontConfig;

/// Starts the session actor and hands out its client.
pub struct StorefrontSystem {
    pub session_client: SessionClient,
    handle: tokio::task::JoinHandle<()>,
}

impl StorefrontSystem {
    pub fn new(config: &StorefrontConfig) -> Self {
        info!(channel_buffer = config.channel_buffer, "Starting storefront system");
        let (session, session_client) = SessionService::new(config.channel_buffer, Catalog::storefront());
        let handle = tokio::spawn(session.run());
        Self { session_client, handle }
    }

    /// Asks the session to stop and joins its task.
    ///
    /// The task is joined even when the shutdown message cannot be delivered,
    /// so a session that died early reports its own failure.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        if let Err(e) = self.session_client.shutdown().await {
            warn!(error = %e, "Session already stopped before shutdown");
        }
        drop(self.session_client);

        if let Err(e) = self.handle.await {
            error!("Session task failed: {:?}", e);
            return Err(format!("Session task failed: {}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn from_parts(session_client: SessionClient, handle: tokio::task::JoinHandle<()>) -> Self {
        Self { session_client, handle }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_framework::create_mock_client;

    #[tokio::test]
    async fn test_shutdown_after_session_already_stopped() {
        let system = StorefrontSystem::new(&StorefrontConfig::default());
        let client = system.session_client.clone();
        client.shutdown().await.unwrap();

        // Let the session drain its Shutdown message and close the channel.
        while client.total_price().await.is_ok() {
            tokio::task::yield_now().await;
        }

        assert_eq!(system.shutdown().await, Ok(()));
    }

    #[tokio::test]
    async fn test_shutdown_reports_panicked_session() {
        let (client, receiver) = create_mock_client(1);
        let handle = tokio::spawn(async move {
            drop(receiver);
            panic!("session crashed");
        });
        let system = StorefrontSystem::from_parts(client, handle);

        let err = system.shutdown().await.unwrap_err();
        assert!(err.starts_with("Session task failed"), "{err}");
        assert!(err.contains("panicked"), "{err}");
    }
}
