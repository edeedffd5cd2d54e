//! sympta-instruments
//!
//! The SCL-90 instrument definition. Pure data and arithmetic, no storage
//! dependency. Defines the factor catalog, the answer validation rules,
//! and the score computation for one completed attempt.

pub mod scl90;
pub mod scoring;
