#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Typed Rust HTTP client for the exoplanet explorer API
//!
//! Exposes the query operation together with its wire shapes so
//! consumers import everything from one place

mod client;
pub mod error;
pub mod types;

pub use client::ExplorerClient;
pub use error::{ExplorerClientError, Result};
pub use types::*;
