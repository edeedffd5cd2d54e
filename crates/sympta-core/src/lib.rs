//! sympta-core
//!
//! Pure domain types, the response-store trait, and S3 key conventions.
//! No AWS SDK dependency. This is the shared vocabulary of the Sympta system.

pub mod models;
pub mod s3_keys;
pub mod store;
