pub mod catalog;
pub mod error;
pub mod recommend;
pub mod scenario;
pub mod time_value;
pub mod types;

pub use error::FinancingError;
pub use types::*;

/// Standard result type for all financing operations
pub type FinancingResult<T> = Result<T, FinancingError>;
