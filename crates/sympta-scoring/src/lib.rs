//! sympta-scoring
//!
//! The two fallible entry points of the engine: scoring one completed
//! attempt, and rolling a respondent's score history up into a trend.
//! Both are stateless over the store; the only process-wide data is the
//! immutable factor catalog in sympta-instruments.

pub mod error;
pub mod scorer;
pub mod trend;
