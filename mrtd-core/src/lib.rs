//! # Mrtd Core
//!
//! Encoding, decoding, and check-digit verification for TD3 (two-line,
//! 44-character) machine-readable travel-document records.
//!
//! The check-digit scheme is a self-contained modulus-255 rolling checksum
//! folded to a decimal digit; it is internally consistent but deliberately
//! not the ICAO 9303 weighted algorithm. TD1/TD2 layouts are unsupported.
//!
//! ## Modules
//!
//! - `constants`: Line widths, field offsets, and the filler character
//! - `types`: Core types (DocumentFields, LinePair, MrzRecord)
//! - `checksum`: Rolling checksum and check-digit derivation
//! - `encoder`: Field-to-line encoding
//! - `decoder`: Line-to-record decoding
//! - `verifier`: Check-digit verification for line pairs and records
//! - `external`: No-op collaborator stubs (optical capture, database lookup)

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod checksum;
pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod external;
pub mod types;
pub mod verifier;

// Re-export commonly used types
pub use error::MrzError;
pub use types::{DocumentFields, Line1Fields, Line2Fields, LinePair, MrzLine, MrzRecord};
pub use verifier::{CheckedField, LineVerifyReport, VerifyReport};

/// Result type alias for MRZ operations
pub type Result<T> = core::result::Result<T, MrzError>;
