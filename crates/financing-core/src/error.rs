use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinancingError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Computation overflow in {context}")]
    Overflow { context: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FinancingError {
    fn from(e: serde_json::Error) -> Self {
        FinancingError::SerializationError(e.to_string())
    }
}
