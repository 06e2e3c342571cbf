use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("ArgumentError: {0}")]
    Argument(#[from] ArgumentError),
    #[error("TimeError: {0}")]
    Time(#[from] TimeError),
    #[error("StreamError: {0}")]
    Stream(#[from] StreamError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Argument '{parameter}' must be greater than 0")]
    NotPositive { parameter: &'static str },
    #[error("Argument '{parameter}' is out of range: {value}")]
    OutOfRange {
        parameter: &'static str,
        value: String,
    },
    #[error("Lower bound {lower} is greater than upper bound {upper}")]
    InvalidRange { lower: String, upper: String },
}

impl ArgumentError {
    /// Name of the offending parameter
    pub fn parameter(&self) -> &'static str {
        match self {
            ArgumentError::NotPositive { parameter } => parameter,
            ArgumentError::OutOfRange { parameter, .. } => parameter,
            ArgumentError::InvalidRange { .. } => "min",
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimeError {
    #[error("Adding {minutes} minutes to {time} leaves the day")]
    OutOfRange { time: String, minutes: i64 },
    #[error("Invalid time format '{format}'")]
    InvalidFormat { format: String },
}

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Failed to read stream: {source}")]
    Read { source: std::io::Error },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },
    #[error("Configuration serialize error: {message}")]
    ConfigSerialize { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    High,
    Medium,
    Low,
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Argument(_) => ErrorSeverity::Medium,
            AppError::Time(time_error) => match time_error {
                TimeError::InvalidFormat { .. } => ErrorSeverity::Medium,
                TimeError::OutOfRange { .. } => ErrorSeverity::Low,
            },
            AppError::Stream(_) => ErrorSeverity::High,
            AppError::Storage(storage_error) => match storage_error {
                StorageError::ConfigDirNotFound => ErrorSeverity::Low,
                _ => ErrorSeverity::Medium,
            },
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Time(TimeError::InvalidFormat { .. }) => {
                Some("Use chrono strftime specifiers such as %H:%M".to_string())
            }
            AppError::Time(TimeError::OutOfRange { .. }) => {
                Some("Use wrapping_add_minutes to wrap around midnight".to_string())
            }
            AppError::Storage(StorageError::ConfigParse { .. }) => {
                Some("Check the TOML syntax of the extkit config file".to_string())
            }
            _ => None,
        }
    }
}
