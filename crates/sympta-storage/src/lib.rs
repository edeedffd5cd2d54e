//! sympta-storage
//!
//! S3-backed response store: raw answers and score records persisted as
//! JSON objects, one per record, under per-respondent prefixes.

pub mod error;
pub mod objects;
pub mod store;
