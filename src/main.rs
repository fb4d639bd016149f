mod domain;
mod catalog;
mod cart;
mod filter;
mod view;
mod messages;
mod clients;
mod session;

mod app_system;

#[cfg(test)]
mod mock_framework;

use tracing::{info, warn, Instrument};
use crate::app_system::{setup_tracing, StorefrontConfig, StorefrontSystem};
use crate::domain::Category;
use crate::view::Controls;

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = StorefrontConfig::from_env();
    setup_tracing(&config.log_filter);

    info!("Starting storefront session");

    let system = StorefrontSystem::new(&config);
    let controls = Controls::new(system.session_client.clone());

    let span = tracing::info_span!("browsing");
    async {
        let view = controls.render().await?;
        info!("Initial page\n{view}");

        for card in view.products.iter().filter(|c| c.id == 1 || c.id == 6) {
            controls.click_add(card).await?;
        }

        // The drill's button is disabled, but the session guards it too.
        if let Err(e) = system.session_client.add_to_cart(6).await {
            warn!(error = %e, "Direct add rejected");
        }

        controls.click_category(Category::DryMixes).await?;
        let view = controls.render().await?;
        if let Some(cement) = view.products.first() {
            controls.click_add(cement).await?;
        }
        let view = controls.render().await?;
        info!("After picking dry mixes\n{view}");

        Ok::<_, crate::session::SessionError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("cart");
    async {
        let view = controls.render().await?;
        if let Some(line) = view.cart.lines.first() {
            controls.click_increment(line).await?;
        }
        // Each click works from the freshly rendered line, as the page does.
        let view = controls.render().await?;
        if let Some(line) = view.cart.lines.first() {
            controls.click_decrement(line).await?;
        }
        if let Some(line) = view.cart.lines.last().filter(|_| view.cart.line_count > 1) {
            controls.click_remove(line).await?;
        }
        let total = system.session_client.total_price().await?;
        info!(total, "Cart after quantity changes");
        let total = controls.click_place_order().await?;
        info!(total, "Order button pressed");
        let view = controls.render().await?;
        info!("Final page\n{view}");
        Ok::<_, crate::session::SessionError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    drop(controls);
    system.shutdown().await?;

    info!("Session finished");
    Ok(())
}
