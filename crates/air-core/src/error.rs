use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReadinessError {
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl ReadinessError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReadinessError>;

/// Rejects NaN and infinities, which would otherwise poison every clamp downstream.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ReadinessError::invalid(field, format!("expected a finite number, got {value}")))
    }
}
