//! TD3 line decoding
//!
//! Decoding is pure positional parsing; no check digit is recomputed here.
//! Verification lives in [`crate::verifier`].

use crate::constants::{
    BIRTH_DATE_CHECK_OFFSET, BIRTH_DATE_RANGE, COUNTRY_CODE_RANGE, DOCUMENT_TYPE_OFFSET,
    EXPIRATION_DATE_CHECK_OFFSET, EXPIRATION_DATE_RANGE, FILLER, ISSUING_COUNTRY_RANGE, LINE_LEN,
    NAME_SEPARATOR, NAME_ZONE_START, PASSPORT_NUMBER_CHECK_OFFSET, PASSPORT_NUMBER_RANGE,
    PERSONAL_NUMBER_CHECK_OFFSET, PERSONAL_NUMBER_RANGE, SEX_OFFSET,
};
use crate::error::MrzError;
use crate::types::{Line1Fields, Line2Fields, MrzLine, MrzRecord};
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Force a line to exactly 44 characters: filler-pad, then truncate
///
/// Kept separate from [`validate_length`] so that the length contract can be
/// checked on raw, unnormalized input.
pub fn normalize_line(line: &str) -> String {
    let mut out = String::with_capacity(LINE_LEN);
    let mut count = 0;
    for c in line.chars().take(LINE_LEN) {
        out.push(c);
        count += 1;
    }
    for _ in count..LINE_LEN {
        out.push(FILLER);
    }
    out
}

/// Check that a line is exactly 44 characters
///
/// Cannot fail on the output of [`normalize_line`]; callers that skip
/// normalization get the [`MrzError::InvalidLength`] contract from here.
pub fn validate_length(line: &str, which: MrzLine) -> Result<(), MrzError> {
    let length = line.chars().count();
    if length != LINE_LEN {
        return Err(MrzError::InvalidLength {
            line: which,
            length,
        });
    }
    Ok(())
}

/// Decode two MRZ lines into a structured record
///
/// Both lines are normalized to 44 characters first, then length-validated,
/// then parsed at fixed offsets. The name zone (line 1, offsets 5..44) is
/// segmented on the first `<<` into the last name and a remainder; the
/// remainder splits on its first single filler into first and middle name.
pub fn decode(line1: &str, line2: &str) -> Result<MrzRecord, MrzError> {
    let line1 = normalize_line(line1);
    let line2 = normalize_line(line2);

    validate_length(&line1, MrzLine::Line1)?;
    validate_length(&line2, MrzLine::Line2)?;

    Ok(parse_normalized(&line1, &line2))
}

/// Parse two already-normalized 44-character lines
fn parse_normalized(line1: &str, line2: &str) -> MrzRecord {
    let chars1: Vec<char> = line1.chars().collect();
    let chars2: Vec<char> = line2.chars().collect();

    let name_zone: String = chars1[NAME_ZONE_START..LINE_LEN].iter().collect();
    let (last_name, first_name, middle_name) = split_name_zone(&name_zone);
    let full_name = join_name(&first_name, &middle_name, &last_name);

    MrzRecord {
        line1: Line1Fields {
            document_type: chars1[DOCUMENT_TYPE_OFFSET],
            issuing_country: chars1[ISSUING_COUNTRY_RANGE].iter().collect(),
            last_name,
            first_name,
            middle_name,
            full_name,
        },
        line2: Line2Fields {
            passport_number: chars2[PASSPORT_NUMBER_RANGE].iter().collect(),
            passport_number_check_digit: chars2[PASSPORT_NUMBER_CHECK_OFFSET],
            country_code: chars2[COUNTRY_CODE_RANGE].iter().collect(),
            birth_date: chars2[BIRTH_DATE_RANGE].iter().collect(),
            birth_date_check_digit: chars2[BIRTH_DATE_CHECK_OFFSET],
            sex: chars2[SEX_OFFSET],
            expiration_date: chars2[EXPIRATION_DATE_RANGE].iter().collect(),
            expiration_date_check_digit: chars2[EXPIRATION_DATE_CHECK_OFFSET],
            personal_number: chars2[PERSONAL_NUMBER_RANGE].iter().collect(),
            personal_number_check_digit: chars2[PERSONAL_NUMBER_CHECK_OFFSET],
        },
    }
}

/// Segment the name zone into (last, first, middle)
///
/// Name components are never fixed-width; they are delimited by filler runs.
/// Everything after the first `<<` is the given-name remainder, which splits
/// on its first single filler. Trailing filler padding collapses during the
/// filler-to-space mapping and trim.
fn split_name_zone(zone: &str) -> (String, String, String) {
    let (last_segment, remainder) = match zone.find(NAME_SEPARATOR) {
        Some(idx) => (&zone[..idx], Some(&zone[idx + NAME_SEPARATOR.len()..])),
        None => (zone, None),
    };

    let last_name = fillers_to_spaces(last_segment);

    let (first_name, middle_name) = match remainder {
        Some(rest) => match rest.find(FILLER) {
            Some(idx) => (
                rest[..idx].trim().to_string(),
                fillers_to_spaces(&rest[idx + 1..]),
            ),
            None => (rest.trim().to_string(), String::new()),
        },
        None => (String::new(), String::new()),
    };

    (last_name, first_name, middle_name)
}

/// Map fillers to spaces and trim the ends
fn fillers_to_spaces(segment: &str) -> String {
    segment.replace(FILLER, " ").trim().to_string()
}

/// Join first, middle, and last name with single spaces, skipping empties
fn join_name(first: &str, middle: &str, last: &str) -> String {
    let mut full = String::new();
    for part in [first, middle, last] {
        if part.is_empty() {
            continue;
        }
        if !full.is_empty() {
            full.push(' ');
        }
        full.push_str(part);
    }
    full
}
