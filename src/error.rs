use std::fmt;

#[derive(Debug)]
pub enum IvanError {
    ApiError {
        status: u16,
        message: String,
    },
    #[allow(dead_code)]
    ConfigError(String),
    NetworkError(reqwest::Error),
    Timeout,
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    EmptyResponse,
    Other(String),
}

impl fmt::Display for IvanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IvanError::ApiError { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            IvanError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            IvanError::NetworkError(e) => write!(f, "Network error: {}", e),
            IvanError::Timeout => write!(f, "Request timeout"),
            IvanError::IoError(e) => write!(f, "IO error: {}", e),
            IvanError::JsonError(e) => write!(f, "JSON error: {}", e),
            IvanError::EmptyResponse => write!(f, "Empty response from model"),
            IvanError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for IvanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IvanError::NetworkError(e) => Some(e),
            IvanError::IoError(e) => Some(e),
            IvanError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for IvanError {
    fn from(err: reqwest::Error) -> Self {
        IvanError::NetworkError(err)
    }
}

impl From<std::io::Error> for IvanError {
    fn from(err: std::io::Error) -> Self {
        IvanError::IoError(err)
    }
}

impl From<serde_json::Error> for IvanError {
    fn from(err: serde_json::Error) -> Self {
        IvanError::JsonError(err)
    }
}

impl From<anyhow::Error> for IvanError {
    fn from(err: anyhow::Error) -> Self {
        IvanError::Other(err.to_string())
    }
}

impl From<String> for IvanError {
    fn from(msg: String) -> Self {
        IvanError::Other(msg)
    }
}

impl From<&str> for IvanError {
    fn from(msg: &str) -> Self {
        IvanError::Other(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IvanError>;
