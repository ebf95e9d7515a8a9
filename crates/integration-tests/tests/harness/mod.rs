//! Shared helpers for integration tests
//!
//! Not every test binary uses every helper.
#![allow(dead_code)]

pub mod config;
pub mod mock_backend;
pub mod server;
