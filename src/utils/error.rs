use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuantumError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Any error that reaches the top level ends the session, so none map to 0.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl QuantumError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QuantumError::IoError(_) | QuantumError::SerializationError(_) => ErrorCategory::Io,
            QuantumError::ConfigError { .. }
            | QuantumError::ConfigValidationError { .. }
            | QuantumError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            QuantumError::ValidationError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Rejected input leaves state untouched; the shell just asks again.
            QuantumError::ValidationError { .. } => ErrorSeverity::Low,
            QuantumError::ConfigError { .. }
            | QuantumError::ConfigValidationError { .. }
            | QuantumError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            QuantumError::SerializationError(_) => ErrorSeverity::High,
            QuantumError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QuantumError::IoError(e) => format!("Could not read or write data: {}", e),
            QuantumError::SerializationError(e) => format!("Could not render output: {}", e),
            QuantumError::ConfigError { message } => format!("Configuration problem: {}", message),
            QuantumError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            QuantumError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for '{}': {}", value, field, reason),
            QuantumError::ValidationError { reason, .. } => reason.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the terminal or file is readable and try again",
            ErrorCategory::Configuration => {
                "Fix the configuration file or command-line flags and rerun"
            }
            ErrorCategory::Validation => "Enter a value inside the allowed range",
        }
    }
}

pub type Result<T> = std::result::Result<T, QuantumError>;
