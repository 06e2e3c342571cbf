//! Extension traits, one module per extended type

/// `bool` to text and numbers
pub mod boolean;

/// Range checks and clamping
pub mod comparable;

/// Dictionary helpers
pub mod map;

/// Emptiness checks and chunking
pub mod iter;

/// Paging and conditional filtering
pub mod query;

/// Stream to byte buffer
pub mod stream;

/// Time-of-day arithmetic and formatting
pub mod time_of_day;

/// Cyclic weekday arithmetic
pub mod weekday;
