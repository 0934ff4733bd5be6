//! # Echo
//!
//! Where Minds Bloom - a mental-wellness community app. This crate is the
//! domain core shared by the WASM front end (`echo-ui`) and the bundle host.
//!
//! ## Modules
//!
//! - [`catalog`]: Record types and the built-in sample data
//! - [`filter`]: Query and facet filtering for listed screens
//! - [`session`]: One controller per screen, holding its local state
//! - [`routes`]: URL to screen mapping
//! - [`notice`] / [`error`]: What a handler reports back to the toast layer
//! - [`config`]: TOML and environment configuration
//! - `server` (feature `server`): Static bundle host with Axum
//!
//! ## Quick Start
//!
//! ```rust
//! use echo::config::CompanionConfig;
//! use echo::session::FinnSession;
//! use chrono::Utc;
//!
//! let mut finn = FinnSession::new(&CompanionConfig::default(), 42, Utc::now());
//! let notice = finn.buy_outfit("beach").unwrap();
//! assert_eq!(notice.message, "FINN loves the new Sunglasses! 🕶️ (-30 Seeds)");
//! assert_eq!(finn.seeds(), 226);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod notice;
pub mod routes;
pub mod session;

#[cfg(feature = "server")]
pub mod server;

pub use catalog::{BlogPost, Campaign, ChatMessage, Expert, Sender};
pub use config::{CompanionConfig, Config, ConfigError};
pub use error::{ActionError, ActionResult};
pub use filter::{FilterState, Selection};
pub use notice::{Notice, Tone};
pub use routes::Route;
