//! Error types for MRZ operations

use crate::types::MrzLine;
use alloc::string::String;

/// Errors that can occur during MRZ encode, decode, or verification
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MrzError {
    /// Line length is not exactly 44 characters
    ///
    /// Unreachable through the normalizing entry points, which filler-pad
    /// and truncate before validating. Callers that validate raw input
    /// directly still rely on it.
    #[cfg_attr(
        feature = "std",
        error("{line} must be exactly 44 characters, got {length}")
    )]
    InvalidLength {
        /// Which of the two lines failed validation.
        line: MrzLine,
        /// The character count actually found.
        length: usize,
    },

    /// Check-digit input is not 7-bit ASCII after normalization
    ///
    /// All callers are expected to pass MRZ-alphabet text; hitting this is a
    /// caller contract violation, not a recoverable condition.
    #[cfg_attr(feature = "std", error("non-ASCII check-digit input: {0:?}"))]
    Encoding(String),
}
