//! # API crate — the REST client behind every list view
//!
//! The views never talk HTTP themselves: they hold an [`ApiClient`] and go
//! through the [`records::RecordSource`] trait, so the `records` tests run the
//! same list logic against [`records::MemorySource`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `reqwest`-based [`ApiClient`]: URL building, JSON bodies, status handling. |
//! | [`config`] | Loads `recordbook.toml` and applies `API_BASE_URL` / `RECORDBOOK_SEARCH_MODE` overrides. |
//! | [`error`] | [`ConfigError`] and decoding of server error bodies into user-facing messages. |
//!
//! ## Requests
//!
//! | Operation | Request |
//! |-----------|---------|
//! | list | `GET {base}/{resource}?{filters}` |
//! | get | `GET {base}/{resource}/{id}` |
//! | create | `POST {base}/{resource}` |
//! | update | `PUT {base}/{resource}/{id}` |
//! | delete | `DELETE {base}/{resource}/{id}` |
//!
//! Non-2xx answers become [`records::SourceError::Status`] carrying the
//! server's message. Nothing is retried and no timeout is imposed.

pub mod client;
pub mod config;
pub mod error;

pub use client::ApiClient;
pub use config::load_config;
pub use error::{server_message, ConfigError};

pub use records::{AppConfig, RecordSource, SourceError};
