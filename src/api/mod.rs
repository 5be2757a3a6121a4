//! API Client
//!
//! Typed HTTP client for the back-office REST API.

pub mod client;

pub use client::*;
