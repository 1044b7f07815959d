//! TD3 line encoding

use crate::checksum::check_digit_char;
use crate::constants::{
    COUNTRY_LEN, DATE_LEN, FILLER, LINE_LEN, NAME_SEPARATOR, NAME_ZONE_LEN, PASSPORT_NUMBER_LEN,
    PERSONAL_NUMBER_FILLER_LEN, PERSONAL_NUMBER_LEN,
};
use crate::error::MrzError;
use crate::types::{DocumentFields, LinePair};
use alloc::string::String;

/// Encode document fields into the two 44-character lines
///
/// Layout of line 1:
/// 1. Document type (offset 0)
/// 2. Fixed filler (offset 1)
/// 3. Issuing country, uppercased and fit to 3 (offsets 2..5)
/// 4. Name zone fit to 39 (offsets 5..44): `LAST<<FIRST` with an additional
///    `<MIDDLE` only when a middle name is present, spaces mapped to filler
///
/// Layout of line 2:
/// 1. Passport number fit to 9, then its check digit
/// 2. Country code fit to 3
/// 3. Birth date fit to 6, then its check digit
/// 4. Sex character (filler when absent)
/// 5. Expiration date fit to 6, then its check digit
/// 6. Personal number truncated to 9 but never padded, six fillers, then the
///    check digit of the unpadded personal number
///
/// Every field is coerced to width by filler-padding and truncation; no
/// input is ever rejected for shape. Each check digit is computed over the
/// field value as it appears before the digit itself is appended. The only
/// error path is [`MrzError::Encoding`] from the check-digit engine on
/// non-ASCII input.
pub fn encode(fields: &DocumentFields) -> Result<LinePair, MrzError> {
    // ----- Line 1 -----
    let mut line1 = String::with_capacity(LINE_LEN);
    line1.push_str(&fields.document_type);
    line1.push(FILLER);
    line1.push_str(&fit(&fields.issuing_country.to_uppercase(), COUNTRY_LEN));
    line1.push_str(&fit(&name_zone(fields), NAME_ZONE_LEN));

    // Exact-width already, except when the document type is empty or longer
    // than one character; the final fit keeps the 44-char invariant then too.
    let line1 = fit(&line1, LINE_LEN);

    // ----- Line 2 -----
    let passport_number = fit(&fields.passport_number.to_uppercase(), PASSPORT_NUMBER_LEN);
    let birth_date = fit(&fields.birth_date, DATE_LEN);
    let expiration_date = fit(&fields.expiration_date, DATE_LEN);

    // Truncated but never padded; a short personal number shifts the filler
    // block and check digit left of their nominal offsets.
    let personal_number: String = fields
        .personal_number
        .to_uppercase()
        .replace(' ', "<")
        .chars()
        .take(PERSONAL_NUMBER_LEN)
        .collect();

    let mut line2 = String::with_capacity(LINE_LEN);
    line2.push_str(&passport_number);
    line2.push(check_digit_char(&passport_number)?);
    line2.push_str(&fit(&fields.country_code.to_uppercase(), COUNTRY_LEN));
    line2.push_str(&birth_date);
    line2.push(check_digit_char(&birth_date)?);
    line2.push(sex_char(&fields.sex));
    line2.push_str(&expiration_date);
    line2.push(check_digit_char(&expiration_date)?);
    line2.push_str(&personal_number);
    for _ in 0..PERSONAL_NUMBER_FILLER_LEN {
        line2.push(FILLER);
    }
    line2.push(check_digit_char(&personal_number)?);

    let line2 = fit(&line2, LINE_LEN);

    Ok(LinePair { line1, line2 })
}

/// Build the unpadded name zone: `LAST<<FIRST` plus `<MIDDLE` when present
fn name_zone(fields: &DocumentFields) -> String {
    let last_name = mangle_name(&fields.last_name);
    let first_name = mangle_name(&fields.first_name);
    let middle_name = mangle_name(&fields.middle_name);

    let mut zone = String::with_capacity(NAME_ZONE_LEN);
    zone.push_str(&last_name);
    zone.push_str(NAME_SEPARATOR);
    zone.push_str(&first_name);
    if !middle_name.is_empty() {
        zone.push(FILLER);
        zone.push_str(&middle_name);
    }
    zone
}

/// Uppercase a name component and map interior spaces to fillers
fn mangle_name(name: &str) -> String {
    name.to_uppercase().replace(' ', "<")
}

/// First character of the sex field, uppercased; filler when absent
fn sex_char(sex: &str) -> char {
    sex.chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or(FILLER)
}

/// Filler-pad and truncate a value to exactly `width` characters
fn fit(value: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut count = 0;
    for c in value.chars().take(width) {
        out.push(c);
        count += 1;
    }
    for _ in count..width {
        out.push(FILLER);
    }
    out
}
