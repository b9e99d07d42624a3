//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from standard library errors to [`AppError`].

use super::app_error::AppError;

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::invalid_argument("Invalid integer format").with_source(err)
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        match err {
            std::env::VarError::NotPresent => {
                AppError::invalid_argument("Environment variable not set").with_source(err)
            }
            std::env::VarError::NotUnicode(_) => {
                AppError::invalid_argument("Environment variable is not valid unicode")
                    .with_source(err)
            }
        }
    }
}
