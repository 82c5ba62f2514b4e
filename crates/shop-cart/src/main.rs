//! # Shop Cart Demo
//!
//! Registers a few products, fills a cart, hits a stock error, checks out and prints the
//! customer's history.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p shop-cart
//! ```

use rust_decimal::Decimal;
use shop_cart::config::ShopConfig;
use shop_cart::lifecycle::{setup_tracing, ShopSystem};
use shop_cart::model::{Category, ModelId, ProductCreate};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = ShopConfig::from_env()?;
    let system = ShopSystem::new(&config);

    let catalog = [
        ProductCreate::new("iPhone13", Category::Smartphone, Decimal::new(20000, 2), 5),
        ProductCreate::new("XPS13", Category::Laptop, Decimal::new(129999, 2), 1),
        ProductCreate::new("Fridge", Category::Appliance, Decimal::new(45000, 2), 0),
    ];
    for product in catalog {
        let model = system.product_client.create_product(product).await?;
        info!(%model, "Product registered");
    }

    let customer = "ana";
    let span = tracing::info_span!("shopping", customer);
    async {
        let engine = &system.engine;
        engine.add_to_cart(customer, &ModelId::from("iPhone13")).await?;
        engine.add_to_cart(customer, &ModelId::from("iPhone13")).await?;
        engine.add_to_cart(customer, &ModelId::from("XPS13")).await?;

        if let Err(e) = engine.add_to_cart(customer, &ModelId::from("Fridge")).await {
            warn!(code = e.code(), status = e.status(), error = %e, "Add refused");
        }

        let cart = engine.get_cart(customer).await?.into_cart();
        info!(total = %cart.total, lines = cart.products.len(), "Cart before checkout");

        engine.checkout(customer).await?;
        Ok::<_, shop_cart::error::CartError>(())
    }
    .instrument(span)
    .await?;

    for cart in system.engine.get_customer_carts(customer).await? {
        println!("{}", summary(&cart));
    }

    system.shutdown().await?;
    info!("Demo completed");
    Ok(())
}

fn summary(cart: &shop_cart::model::Cart) -> String {
    let date = cart
        .payment_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());
    let lines: Vec<String> = cart
        .products
        .iter()
        .map(|line| format!("{} x{} @ {}", line.model(), line.quantity(), line.price()))
        .collect();
    format!(
        "{} paid={} on {} total={} [{}]",
        cart.customer,
        cart.paid,
        date,
        cart.total,
        lines.join(", ")
    )
}
