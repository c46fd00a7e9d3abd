//! # medscribe-core
//!
//! Core types and helpers shared by the medscribe crates.
//!
//! This crate provides the error type, centralized defaults, provider
//! credentials, and the media helpers that turn an upload into a data URI.

pub mod credentials;
pub mod defaults;
pub mod error;
pub mod media;
pub mod models;

// Re-export commonly used types at crate root
pub use credentials::{non_empty_var, ProviderCredentials};
pub use error::{Error, Result};
pub use media::{data_uri, guess_mime_type, sniff_mime_type};
pub use models::{DescriptionRequest, DescriptionResult};
