//! NGWAF (Signal Sciences) inventory adapter
//!
//! Implements the `ResourceInventory` trait on top of the dashboard API's
//! read-only listing endpoints.

pub mod client;
pub mod credentials;
pub mod errors;
pub mod inventory;
pub mod models;

pub use client::{SigSciClient, DEFAULT_API_URL};
pub use credentials::SigSciCredentials;
pub use errors::SigSciError;
