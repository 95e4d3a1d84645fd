//! Error types for the checkout workflow.
//!
//! A declined payment is not an error; it is reported as `false` by
//! [`crate::CheckoutService::run_checkout`].

use thiserror::Error;

/// Result type alias for checkout operations
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Errors that can occur outside the payment flow itself.
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Failed to write output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
