//! Check-digit verification
//!
//! Two entry points with intentionally different coverage:
//!
//! - [`verify_lines`] takes the raw line pair and checks the passport
//!   number, birth date, and expiration date.
//! - [`verify_record`] takes an already-decoded record and additionally
//!   checks the personal number.
//!
//! Callers that need the wider check on wire data decode first and use
//! [`verify_record`]. A failed check is data, not an error: it shows up as
//! `false` in the report and clears the overall `valid` flag.

use crate::checksum::check_digit_char;
use crate::decoder::{decode, normalize_line, validate_length};
use crate::error::MrzError;
use crate::types::{LinePair, MrzLine, MrzRecord};
use alloc::collections::BTreeMap;
use core::fmt;
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::warn;

/// A field whose check digit can be verified
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckedField {
    /// Passport number (line 2, offsets 0..9)
    PassportNumber,
    /// Birth date (line 2, offsets 13..19)
    BirthDate,
    /// Expiration date (line 2, offsets 21..27)
    ExpirationDate,
    /// Personal number (line 2, offsets 28..37); only checked by
    /// [`verify_record`]
    PersonalNumber,
}

impl CheckedField {
    /// Stable snake_case name, matching the serialized form
    pub const fn as_str(&self) -> &'static str {
        match self {
            CheckedField::PassportNumber => "passport_number",
            CheckedField::BirthDate => "birth_date",
            CheckedField::ExpirationDate => "expiration_date",
            CheckedField::PersonalNumber => "personal_number",
        }
    }
}

impl fmt::Display for CheckedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of recomputing and comparing check digits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyReport {
    /// Logical AND of every per-field result in `details`
    pub valid: bool,

    /// Per-field pass/fail
    pub details: BTreeMap<CheckedField, bool>,

    /// Per-field recomputed check digit
    pub calculated: BTreeMap<CheckedField, char>,
}

impl VerifyReport {
    fn new() -> Self {
        Self {
            valid: true,
            details: BTreeMap::new(),
            calculated: BTreeMap::new(),
        }
    }
}

impl Default for VerifyReport {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`VerifyReport`] plus the normalized lines and decoded record
///
/// Produced by [`verify_lines`]; the extra fields let callers show exactly
/// what was verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineVerifyReport {
    /// The verification outcome
    pub report: VerifyReport,

    /// The lines after filler-padding and truncation to 44 characters
    pub lines: LinePair,

    /// The record the fields were read from
    pub record: MrzRecord,
}

/// Recompute one field's check digit and fold the result into the report
fn check(
    report: &mut VerifyReport,
    field: CheckedField,
    value: &str,
    stored: char,
) -> Result<bool, MrzError> {
    let calculated = check_digit_char(value)?;
    report.calculated.insert(field, calculated);

    let ok = calculated == stored;
    report.details.insert(field, ok);
    if !ok {
        report.valid = false;
    }
    Ok(ok)
}

/// Verify a raw line pair
///
/// Normalizes and length-validates both lines, decodes them, then checks the
/// passport number, birth date, and expiration date against their stored
/// check digits. The personal number is not checked by this entry point.
pub fn verify_lines(line1: &str, line2: &str) -> Result<LineVerifyReport, MrzError> {
    let line1 = normalize_line(line1);
    let line2 = normalize_line(line2);

    validate_length(&line1, MrzLine::Line1)?;
    validate_length(&line2, MrzLine::Line2)?;

    let record = decode(&line1, &line2)?;
    let fields = &record.line2;

    let mut report = VerifyReport::new();
    check(
        &mut report,
        CheckedField::PassportNumber,
        &fields.passport_number,
        fields.passport_number_check_digit,
    )?;
    check(
        &mut report,
        CheckedField::BirthDate,
        &fields.birth_date,
        fields.birth_date_check_digit,
    )?;
    check(
        &mut report,
        CheckedField::ExpirationDate,
        &fields.expiration_date,
        fields.expiration_date_check_digit,
    )?;

    Ok(LineVerifyReport {
        report,
        lines: LinePair { line1, line2 },
        record,
    })
}

/// Verify an already-decoded record
///
/// Checks all four checked fields, including the personal number. Each
/// mismatch is logged at `warn` level when the `logging` feature is on.
pub fn verify_record(record: &MrzRecord) -> Result<VerifyReport, MrzError> {
    let fields = &record.line2;
    let checks = [
        (
            CheckedField::PassportNumber,
            fields.passport_number.as_str(),
            fields.passport_number_check_digit,
        ),
        (
            CheckedField::BirthDate,
            fields.birth_date.as_str(),
            fields.birth_date_check_digit,
        ),
        (
            CheckedField::ExpirationDate,
            fields.expiration_date.as_str(),
            fields.expiration_date_check_digit,
        ),
        (
            CheckedField::PersonalNumber,
            fields.personal_number.as_str(),
            fields.personal_number_check_digit,
        ),
    ];

    let mut report = VerifyReport::new();
    for (field, value, stored) in checks {
        let ok = check(&mut report, field, value, stored)?;
        if !ok {
            #[cfg(feature = "logging")]
            warn!(
                "check digit mismatch for {}: data {:?}, calculated {}, stored {}",
                field, value, report.calculated[&field], stored
            );
        }
    }

    Ok(report)
}
