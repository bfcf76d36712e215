//! emaily-storage
//!
//! The template store. A thin document layer over an S3-compatible object
//! store, plus an in-memory backend for local runs and tests.

pub mod client;
pub mod documents;
pub mod error;
pub mod memory;
pub mod objects;
pub mod s3;
pub mod store;

pub use memory::MemoryTemplateStore;
pub use s3::S3TemplateStore;
pub use store::TemplateStore;
