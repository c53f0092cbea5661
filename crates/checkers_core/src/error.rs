use thiserror::Error;

/// Errors raised by the core board operations.
///
/// There are no retryable conditions here: an `OutOfRange` position is
/// caller misuse and is fatal to the current call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    #[error("position ({row}, {col}) is outside the 8x8 board")]
    OutOfRange { row: u8, col: u8 },
}
