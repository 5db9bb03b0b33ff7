//! # rxpos-config: Host Settings for the List Engine
//!
//! Reads `listing.toml` and `RXPOS_*` overrides into per-view
//! [`ListOptions`](rxpos_core::ListOptions), and installs the tracing
//! subscriber. `rxpos-core` never touches files or the environment; this
//! crate does it on its behalf.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. logging::init_tracing()        EnvFilter, default info,rxpos=debug  │
//! │  2. ListingConfig::load_or_default(None)                                │
//! │  3. config.list_options(ViewId::Inventory)  ──►  views::inventory_view  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use rxpos_config::ListingConfig;
//! use rxpos_core::{views, ViewId};
//!
//! let config = ListingConfig::default();
//! let options = config.list_options(ViewId::PosProducts).unwrap();
//! let view = views::pos_product_view(options);
//! assert_eq!(view.info().page_size, 10);
//! ```

pub mod error;
pub mod listing;
pub mod logging;

pub use error::{ConfigError, ConfigResult};
pub use listing::{ListDefaults, ListingConfig, ViewOverride};
pub use logging::init_tracing;
