/// Errors surfaced by the networking layer. The payload formatter itself is
/// total and never produces one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    NetworkError(String),
    ApiError { status: u16, message: String },
    TimeoutError { after_ms: u32 },
    ValidationError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NetworkError(msg) => write!(f, "Network Error: {}", msg),
            AppError::ApiError { status, message } => {
                write!(f, "API Error: {} ({})", message, status)
            }
            AppError::TimeoutError { after_ms } => {
                write!(f, "Timeout Error: no response after {}ms", after_ms)
            }
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Convenience alias for fallible network calls
pub type NetworkResult<T> = Result<T, AppError>;
