use std::fmt;

/// Result type for cardtrack-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result of a single backend request
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Backend request failed
    Fetch(FetchError),

    /// The frame could not tell which card or board it belongs to
    ContextMissing(ContextField),

    /// Settings store error
    Settings(cardtrack_core::Error),

    /// Configuration error
    Config(String),

    /// IO operation failed
    Io(std::io::Error),
}

/// The context value a frame needs but could not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextField {
    Card,
    Board,
}

impl ContextField {
    /// The message shown in place of the view
    pub fn missing_message(&self) -> &'static str {
        match self {
            ContextField::Card => "No card selected. Please open this popup from a card button.",
            ContextField::Board => {
                "Error: Board context not found. Please open this from a board button."
            }
        }
    }
}

/// A failed backend request, with the URL it was sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The backend answered with a non-success status
    Status { url: String, status: u16 },

    /// The request never produced a response
    Transport { url: String, message: String },

    /// The response body did not have the expected shape
    Decode { url: String, message: String },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Status { url, .. }
            | FetchError::Transport { url, .. }
            | FetchError::Decode { url, .. } => url,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status { url, status } => {
                write!(f, "HTTP error! status: {} ({})", status, url)
            }
            FetchError::Transport { url, message } => {
                write!(f, "request to {} failed: {}", url, message)
            }
            FetchError::Decode { url, message } => {
                write!(f, "unexpected response from {}: {}", url, message)
            }
        }
    }
}

impl std::error::Error for FetchError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Fetch(err) => write!(f, "Fetch error: {}", err),
            Error::ContextMissing(field) => write!(f, "{}", field.missing_message()),
            Error::Settings(err) => write!(f, "Settings error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Fetch(err) => Some(err),
            Error::Settings(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::ContextMissing(_) | Error::Config(_) => None,
        }
    }
}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<cardtrack_core::Error> for Error {
    fn from(err: cardtrack_core::Error) -> Self {
        Error::Settings(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
