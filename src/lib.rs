//! # extkit
//!
//! Extension traits over standard library and `chrono` types.
//!
//! ```rust
//! use extkit::prelude::*;
//! use chrono::Weekday;
//!
//! # fn main() -> extkit::Result<()> {
//! assert_eq!(true.to_byte(), 1);
//! assert_eq!(15.limit(0, 10)?, 10);
//! assert_eq!(Weekday::Mon.add_days(-1), Weekday::Sun);
//!
//! let second_page: Vec<u32> = (1..=30).page(2, 10)?.collect();
//! assert_eq!(second_page.first(), Some(&11));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ext`]: the extension traits
//! - [`storage`]: defaults loaded from TOML and the environment
//! - [`utils`]: argument validation shared by the extensions
//! - [`error`]: error types
//!
//! Diagnostics go through the `log` facade; install any logger to see them.

pub use error::AppError;

/// Prelude module for convenient imports.
///
/// ```rust
/// use extkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Result;
    pub use crate::error::AppError;

    pub use crate::ext::boolean::BoolExt;
    pub use crate::ext::comparable::{Boundary, ComparableExt};
    pub use crate::ext::iter::{IterExt, OptionIterExt};
    pub use crate::ext::map::MapExt;
    pub use crate::ext::query::{QueryExt, SlicePageExt, page_count};
    pub use crate::ext::stream::{ToByteArray, ToByteArrayAsync};
    pub use crate::ext::time_of_day::TimeOfDayExt;
    pub use crate::ext::weekday::WeekdayExt;

    pub use crate::storage::config::Settings;
}

pub mod error; // Error handling
pub mod ext; // Extension traits
pub mod storage; // Persisted defaults
pub mod utils; // Shared validation and env helpers

pub type Result<T> = std::result::Result<T, AppError>;
