//! Flat-file data access
//!
//! The planner's seed data lives in two line-oriented text files. This
//! module defines their record formats and the reader that rewinds and
//! re-parses them before each generation pass.

pub mod record;
pub mod source;

pub use record::{ActivityRecord, LocationRecord};
pub use source::{Catalog, DataSource};
