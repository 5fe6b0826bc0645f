use std::fmt;

/// Failure reported by one of the external services.
#[derive(Debug)]
pub enum ServiceError {
    /// The request could not be sent or the connection failed.
    Http(reqwest::Error),

    /// The service answered with a non-success status.
    Status { status: u16, body: String },

    /// The requested record does not exist.
    NotFound,

    /// The response body could not be decoded.
    Decode(String),

    /// The upload exceeds the configured size limit.
    InvalidFileSize { max_bytes: usize },

    /// MIME type not accepted by the upload service.
    InvalidMimeType {
        received: String,
        allowed: Vec<String>,
    },

    /// The service is not reachable (in-memory stores only).
    Unavailable,

    Io(std::io::Error),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "Request failed: {}", e),
            Self::Status { status, body } if body.is_empty() => {
                write!(f, "Service responded with status {}", status)
            }
            Self::Status { status, body } => {
                write!(f, "Service responded with status {}: {}", status, body)
            }
            Self::NotFound => write!(f, "Record not found"),
            Self::Decode(msg) => write!(f, "Unexpected response from service: {}", msg),
            Self::InvalidFileSize { max_bytes } => {
                write!(f, "File exceeds maximum size of {} bytes", max_bytes)
            }
            Self::InvalidMimeType { received, allowed } => write!(
                f,
                "MIME type '{}' not allowed. Allowed types: {}",
                received,
                allowed.join(", ")
            ),
            Self::Unavailable => write!(f, "Service unavailable"),
            Self::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Http(e)
        }
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound | Self::Status { status: 404, .. })
    }
}
