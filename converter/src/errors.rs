use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// HTTP-related errors raised while fetching a remote theme.
///
/// # Error Categories
///
/// - [`ClientCreation`] - HTTP client initialization failures
/// - [`RequestFailed`] - Network level failures with URL and reason
/// - [`Timeout`] - Request exceeded the configured timeout
/// - [`Status`] - Server answered with a non-success status code
///
/// # Examples
///
/// ```no_run
/// use converter::errors::HttpError;
///
/// fn log_http_error(error: &HttpError) {
///     match error {
///         HttpError::Timeout { url, seconds } => {
///             log::warn!("Theme download timed out: url={}, duration={}s", url, seconds);
///         }
///         HttpError::Status { url, status, .. } => {
///             log::error!("Theme download rejected: url={}, status={}", url, status);
///         }
///         _ => log::error!("HTTP error: {}", error),
///     }
/// }
/// ```
///
/// [`ClientCreation`]: HttpError::ClientCreation
/// [`RequestFailed`]: HttpError::RequestFailed
/// [`Timeout`]: HttpError::Timeout
/// [`Status`]: HttpError::Status
#[derive(Debug, Error)]
pub enum HttpError {
    /// HTTP client initialization failed, e.g. TLS backend setup.
    #[error("HTTP client creation failed: {reason}")]
    ClientCreation { reason: String },

    /// The request could not be sent or the body could not be read.
    #[error("Request failed: {url} - {reason}")]
    RequestFailed { url: String, reason: String },

    /// The request took longer than the configured timeout.
    #[error("Request timeout after {seconds}s: {url}")]
    Timeout { url: String, seconds: u64 },

    /// The server answered with a non-success status code.
    #[error("Unexpected status {status} from {url}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },
}

/// Where a theme document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    File,
    Url,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::File => f.write_str("file"),
            SourceKind::Url => f.write_str("URL"),
        }
    }
}

/// Fatal errors while reading a theme document.
///
/// A malformed or unreachable source stops the whole conversion; there is no
/// partial recovery. Every variant names whether a file or a URL failed.
#[derive(Debug, Error)]
pub enum ThemeLoadError {
    /// Input is neither an existing file nor an http(s) URL.
    #[error("Input file not found and not a valid URL: {input}")]
    NotFound { input: String },

    /// The local theme file could not be read.
    #[error("Failed to read theme file: {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The remote theme could not be downloaded.
    #[error("Failed to read theme URL: {source}")]
    Fetch {
        #[from]
        source: HttpError,
    },

    /// The document was read but is not valid JSON after cleanup.
    #[error("Failed to read theme {kind}: {location}: {source}")]
    Parse {
        kind: SourceKind,
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ThemeLoadError {
    pub fn source_kind(&self) -> SourceKind {
        match self {
            ThemeLoadError::NotFound { .. } | ThemeLoadError::FileRead { .. } => SourceKind::File,
            ThemeLoadError::Fetch { .. } => SourceKind::Url,
            ThemeLoadError::Parse { kind, .. } => *kind,
        }
    }
}

/// Errors from loading and validating a custom mapping file.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("Custom mappings file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read custom mappings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse custom mappings file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Unsupported custom mappings file extension for {path} (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid custom mapping #{index} ('{key}'): {reason}")]
    Invalid {
        index: usize,
        key: String,
        reason: String,
    },
}

/// Errors from rendering or writing the generated configuration.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to serialize Tailwind configuration: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Umbrella error for the converter library.
#[derive(Debug, Error)]
pub enum ConverterError {
    #[error(transparent)]
    Load(#[from] ThemeLoadError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Result type alias for converter operations
pub type ConverterResult<T> = Result<T, ConverterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_messages_name_source_kind() {
        let file_error = ThemeLoadError::FileRead {
            path: PathBuf::from("themes/dark.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(file_error.to_string().starts_with("Failed to read theme file"));
        assert_eq!(file_error.source_kind(), SourceKind::File);

        let url_error = ThemeLoadError::from(HttpError::Timeout {
            url: "https://example.com/theme.json".to_string(),
            seconds: 30,
        });
        assert!(url_error.to_string().starts_with("Failed to read theme URL"));
        assert!(url_error.to_string().contains("30s"));
        assert_eq!(url_error.source_kind(), SourceKind::Url);
    }

    #[test]
    fn test_parse_error_message() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = ThemeLoadError::Parse {
            kind: SourceKind::Url,
            location: "https://example.com/theme.json".to_string(),
            source,
        };
        assert!(
            error
                .to_string()
                .starts_with("Failed to read theme URL: https://example.com/theme.json")
        );
    }

    #[test]
    fn test_converter_error_is_transparent() {
        let error = ConverterError::from(MappingError::NotFound {
            path: PathBuf::from("mappings.json"),
        });
        assert_eq!(
            error.to_string(),
            "Custom mappings file not found: mappings.json"
        );
    }
}
