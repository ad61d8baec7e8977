//! Common types and traits for all records

pub mod mock;
pub mod record;
pub mod status;
pub mod validation;

// Re-exports
pub use mock::ymd;
pub use record::Record;
pub use status::ActivityStatus;
