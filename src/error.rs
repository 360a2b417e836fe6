use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FormatError {
    /// The magnitude to format was NaN or infinite.
    #[error("expected a finite number, got {0}")]
    InvalidInput(f64),
}
