// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient points for operation: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Invalid region: width {width} and height {height} must both be positive and finite")]
    InvalidRegion { width: f64, height: f64 },

    #[error("Triangulation failed: {reason}")]
    TriangulationFailed { reason: String },

    #[error("Geometric calculation failed: {operation}")]
    GeometricFailure { operation: String },
}

pub type MathResult<T> = Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = MathError::InvalidRegion {
            width: 0.0,
            height: 10.0,
        };
        assert!(err.to_string().contains("width 0"));

        let err = MathError::InsufficientPoints {
            expected: 1,
            actual: 0,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient points for operation: expected at least 1, got 0"
        );
    }
}
