//! Core types for TD3 records and lines

use crate::constants::DEFAULT_DOCUMENT_TYPE;
use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Identifies one of the two MRZ lines, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MrzLine {
    /// The upper line (document type, issuing country, name zone)
    Line1,
    /// The lower line (numbers, dates, check digits)
    Line2,
}

impl fmt::Display for MrzLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MrzLine::Line1 => write!(f, "line 1"),
            MrzLine::Line2 => write!(f, "line 2"),
        }
    }
}

/// Caller-supplied document fields consumed by the encoder
///
/// Every field is coerced to its encoded width; nothing is ever rejected for
/// being too long or too short. Missing JSON keys take the [`Default`]
/// values: empty strings, except `document_type` which defaults to `"P"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentFields {
    /// Document type character, `"P"` for passports
    pub document_type: String,

    /// Issuing country code (3 letters)
    pub issuing_country: String,

    /// Primary identifier (surname)
    pub last_name: String,

    /// First given name
    pub first_name: String,

    /// Remaining given names, empty if none
    pub middle_name: String,

    /// Passport number (up to 9 characters)
    pub passport_number: String,

    /// Nationality code (3 letters)
    pub country_code: String,

    /// Birth date as YYMMDD
    pub birth_date: String,

    /// Sex, one character; only the first character is encoded
    pub sex: String,

    /// Expiration date as YYMMDD
    pub expiration_date: String,

    /// Personal number (up to 9 characters)
    pub personal_number: String,
}

impl Default for DocumentFields {
    fn default() -> Self {
        Self {
            document_type: String::from(DEFAULT_DOCUMENT_TYPE),
            issuing_country: String::new(),
            last_name: String::new(),
            first_name: String::new(),
            middle_name: String::new(),
            passport_number: String::new(),
            country_code: String::new(),
            birth_date: String::new(),
            sex: String::new(),
            expiration_date: String::new(),
            personal_number: String::new(),
        }
    }
}

/// The two encoded 44-character lines (wire form)
///
/// The core is delimiter-agnostic: storage and transport choose how the two
/// lines are joined (`;`, newline, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinePair {
    /// The upper line
    pub line1: String,
    /// The lower line
    pub line2: String,
}

/// Fields decoded from line 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line1Fields {
    /// Document type, character at offset 0
    pub document_type: char,

    /// Issuing country, offsets 2..5
    pub issuing_country: String,

    /// Surname segment of the name zone, fillers mapped to spaces and trimmed
    pub last_name: String,

    /// First given name, up to the first single filler after the separator
    pub first_name: String,

    /// Remaining given names, empty if the zone holds none
    pub middle_name: String,

    /// First, middle, and last name joined by single spaces, skipping empty
    /// components
    pub full_name: String,
}

/// Fields decoded from line 2 at fixed offsets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line2Fields {
    /// Passport number, offsets 0..9 (filler-padded as encoded)
    pub passport_number: String,

    /// Check digit at offset 9
    pub passport_number_check_digit: char,

    /// Nationality code, offsets 10..13
    pub country_code: String,

    /// Birth date, offsets 13..19
    pub birth_date: String,

    /// Check digit at offset 19
    pub birth_date_check_digit: char,

    /// Sex character at offset 20
    pub sex: char,

    /// Expiration date, offsets 21..27
    pub expiration_date: String,

    /// Check digit at offset 27
    pub expiration_date_check_digit: char,

    /// Personal number, offsets 28..37
    pub personal_number: String,

    /// Check digit at offset 43 (offsets 37..43 are filler)
    pub personal_number_check_digit: char,
}

/// A fully decoded TD3 record
///
/// Pure value object: built per call, immutable once returned. Decoding does
/// not verify check digits; see [`crate::verifier`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MrzRecord {
    /// Fields from the upper line
    pub line1: Line1Fields,
    /// Fields from the lower line
    pub line2: Line2Fields,
}
