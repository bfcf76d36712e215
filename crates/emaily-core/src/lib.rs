//! emaily-core
//!
//! Pure domain types, validation rules and storage key conventions.
//! No AWS SDK dependency — this is the shared vocabulary of the Emaily system.

pub mod error;
pub mod keys;
pub mod models;
