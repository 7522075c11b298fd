use crate::utils::error::{QuantumError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(QuantumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(QuantumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QuantumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Inclusive range check. Values that do not compare (NaN) are rejected.
pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if !(value >= min && value <= max) {
        return Err(QuantumError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("{} must be between {} and {}", field_name, min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("stability", 0.0, 0.0, 100.0).is_ok());
        assert!(validate_range("stability", 100.0, 0.0, 100.0).is_ok());
        assert!(validate_range("stability", -0.1, 0.0, 100.0).is_err());
        assert!(validate_range("stability", 100.1, 0.0, 100.0).is_err());
        assert!(validate_range("stability", f64::NAN, 0.0, 100.0).is_err());
    }

    #[test]
    fn test_validate_range_message() {
        let err = validate_range("stability", 150.0, 0.0, 100.0).unwrap_err();
        match err {
            QuantumError::ValidationError { field, value, reason } => {
                assert_eq!(field, "stability");
                assert_eq!(value, "150");
                assert_eq!(reason, "stability must be between 0 and 100");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("objects[0].id", "AMB-001").is_ok());
        assert!(validate_non_empty_string("objects[0].id", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "session.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }
}
