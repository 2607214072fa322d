//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: text-generation model identifiers
//! - [`question::Question`]: a validated question to decompose
//! - [`settings::GenerationSettings`]: model + temperature, fixed at startup
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod question;
pub mod settings;
