//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
//! Without `RUST_LOG` the filter is `info`.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started` and `Shutdown` with the final table size.
//! - **Table requests**: `Create`, `Get`, `Find`, `Action`, `Delete`, `Purge`, each with
//!   `entity_type` and the record key.
//! - **Workflows**: one span per engine call (`add_to_cart{customer="ana" model=..}`), with
//!   the outcome logged at `info` and compensation at `warn`/`error`.
//!
//! ```bash
//! RUST_LOG=info cargo run      # outcomes only
//! RUST_LOG=debug cargo run     # every request and payload
//! ```
//!
//! With `RUST_LOG=info` a checkout reads:
//!
//! ```text
//! INFO checkout{customer="ana"}: Action ok entity_type="Product" id=iPhone13
//! INFO checkout{customer="ana"}: Action ok entity_type="CartRecord" id=cart_1
//! INFO checkout{customer="ana"}: Checked out id=cart_1 date=2024-05-02 total=400.00
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type already names the table
        .compact()
        .init();
}
