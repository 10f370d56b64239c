//! Error types for the Raggaeirre site flows

use thiserror::Error;

/// A form or step input that failed validation.
///
/// These are always recoverable: the flow shows the message inline and the
/// user stays on the current step.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No preset chosen and the custom amount is empty, zero or non-numeric
    #[error("Please select or enter a donation amount.")]
    AmountRequired,

    /// Leaving the payment step without choosing a method
    #[error("Please select a payment method.")]
    PaymentMethodRequired,

    /// A required text field was left blank
    #[error("Please enter your {0}.")]
    MissingField(&'static str),

    /// Email does not look like `local@domain.tld`
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    /// Phone is not a Kenyan mobile number
    #[error("Please enter a valid Kenyan phone number (e.g. 0712345678).")]
    InvalidPhone,

    /// Amount text is not a positive number with at most two decimals
    #[error("Please enter a valid amount.")]
    InvalidAmount,
}

/// Main error type for site operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// User input rejected at a step transition or on submit
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The submission backend reported a failure
    #[error("Submission failed: {0}")]
    Submission(String),

    /// Gallery asked to show an item that does not exist
    #[error("Media index {index} out of range (gallery has {len} items)")]
    MediaIndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of items in the gallery
        len: usize,
    },

    /// Gallery has no items to show
    #[error("Media gallery is empty")]
    EmptyGallery,

    /// A step transition was requested from the wrong step
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// Payment method name not one of mpesa, paypal, bank
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// Configuration could not be loaded or is inconsistent
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error during JSON (de)serialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;
