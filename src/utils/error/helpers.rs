//! Helper functions for creating specific error types

use super::types::ViesError;

impl ViesError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn input<S: Into<String>>(message: S) -> Self {
        Self::Input(message.into())
    }

    pub fn output<S: Into<String>>(message: S) -> Self {
        Self::Output(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the error happened before any batch work could start
    pub fn is_startup_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::Input(_) | Self::Yaml(_) | Self::HttpClient(_)
        )
    }
}
