//! Environment overrides for configuration defaults

/// Environment variable configuration reader
pub struct EnvConfigReader;

impl EnvConfigReader {
    pub const PAGE_SIZE: &'static str = "EXTKIT_PAGE_SIZE";
    pub const TIME_FORMAT: &'static str = "EXTKIT_TIME_FORMAT";

    /// Read EXTKIT_PAGE_SIZE environment variable
    ///
    /// Zero and unparsable values are ignored.
    pub fn read_page_size() -> Option<usize> {
        std::env::var(Self::PAGE_SIZE)
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|size| *size > 0)
    }

    /// Read EXTKIT_TIME_FORMAT environment variable
    pub fn read_time_format() -> Option<String> {
        std::env::var(Self::TIME_FORMAT)
            .ok()
            .filter(|format| !format.is_empty())
    }
}
