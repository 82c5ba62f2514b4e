use crate::cart_actor;
use crate::catalog_actor;
use crate::clients::{CartClient, ProductClient};
use crate::config::ShopConfig;
use crate::engine::CartEngine;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::info;

#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("{failed} actor task(s) ended abnormally")]
    ActorTasks { failed: usize },
}

/// Owns the running shop: both tables, their clients and the engine.
pub struct ShopSystem {
    pub engine: CartEngine,
    pub cart_client: CartClient,
    pub product_client: ProductClient,
    handles: Vec<JoinHandle<()>>,
}

impl ShopSystem {
    /// Spawns the catalog and cart actors. Must be called inside a Tokio runtime.
    pub fn new(config: &ShopConfig) -> Self {
        let (catalog_actor, catalog_generic) = catalog_actor::new(config.buffer_size);
        let (cart_actor, cart_generic) = cart_actor::new(config.buffer_size);

        let catalog_handle = tokio::spawn(catalog_actor.run(()));
        let cart_handle = tokio::spawn(cart_actor.run(()));

        let product_client = ProductClient::new(catalog_generic);
        let cart_client = CartClient::new(cart_generic);
        let engine = CartEngine::new(cart_client.clone(), product_client.clone());

        info!(buffer_size = config.buffer_size, "Shop system started");
        Self {
            engine,
            cart_client,
            product_client,
            handles: vec![catalog_handle, cart_handle],
        }
    }

    /// Drops every client and waits for the actors to drain their mailboxes.
    ///
    /// Clones of the clients or the engine held elsewhere keep their actor alive, so drop them
    /// first.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        let Self {
            engine,
            cart_client,
            product_client,
            handles,
        } = self;
        drop(engine);
        drop(cart_client);
        drop(product_client);

        let mut failed = 0;
        for handle in handles {
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "Actor task failed");
                failed += 1;
            }
        }
        if failed > 0 {
            return Err(ShutdownError::ActorTasks { failed });
        }
        info!("Shop system stopped");
        Ok(())
    }
}
