use crate::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

pub fn report_error(err: &AppError) {
    match err {
        AppError::InvalidArgument(msg) => {
            eprintln!("❌ {}", OutputStyle::error(&format!("Invalid argument: {}", msg)));
        }
        AppError::Config(msg) => {
            eprintln!("⚠️  {}", OutputStyle::warning(&format!("Config: {}", msg)));
        }
        AppError::Io(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::InvalidArgument("division by zero".to_string());
        assert_eq!(err.to_string(), "Invalid argument: division by zero");

        let err = AppError::Config("bad precision".to_string());
        assert_eq!(err.to_string(), "Config error: bad precision");
    }
}
