//! Client for the monday.com GraphQL API
//! https://developer.monday.com/api-reference/
//!
//! Queries are built as plain GraphQL strings from an [`Args`] map and a
//! [`Selection`] tree (see [`query`]), posted to the API, and the response is
//! either returned or classified into an [`ApiError`].
//!
//! ```no_run
//! # async fn run() -> monday::Result<()> {
//! use monday::{Args, Client};
//!
//! let client = Client::new("<api token>")?;
//! let args = Args::new()
//!     .arg("board_name", "Product roadmap")
//!     .arg("board_kind", "private");
//! let response = client.boards().create(&args, None).await?;
//! println!("{}", response.body());
//! # Ok(())
//! # }
//! ```

pub mod client;
mod config;
pub mod query;

pub use client::{ApiError, Client, ClientBuilder, Error, ErrorKind, Response, Result};
pub use config::{Config, ConfigError, DEFAULT_HOST};
pub use query::{ArgValue, Args, Selection};
