//! Constants and field offsets for the TD3 line format

use core::ops::Range;

/// Width of each MRZ line in characters
pub const LINE_LEN: usize = 44;

/// Filler character used for padding and as a field separator
pub const FILLER: char = '<';

/// Two-filler separator between the last-name segment and the rest of the
/// name zone
pub const NAME_SEPARATOR: &str = "<<";

/// Document type used when the caller does not supply one
pub const DEFAULT_DOCUMENT_TYPE: &str = "P";

/// Offset of the document type character on line 1
pub const DOCUMENT_TYPE_OFFSET: usize = 0;

/// Issuing country on line 1 (offset 1 is a fixed filler)
pub const ISSUING_COUNTRY_RANGE: Range<usize> = 2..5;

/// Start of the name zone on line 1
pub const NAME_ZONE_START: usize = 5;

/// Width of the name zone (offsets 5..44 of line 1)
pub const NAME_ZONE_LEN: usize = 39;

/// Passport number on line 2
pub const PASSPORT_NUMBER_RANGE: Range<usize> = 0..9;

/// Passport number check digit on line 2
pub const PASSPORT_NUMBER_CHECK_OFFSET: usize = 9;

/// Country code on line 2
pub const COUNTRY_CODE_RANGE: Range<usize> = 10..13;

/// Birth date (YYMMDD) on line 2
pub const BIRTH_DATE_RANGE: Range<usize> = 13..19;

/// Birth date check digit on line 2
pub const BIRTH_DATE_CHECK_OFFSET: usize = 19;

/// Sex character on line 2
pub const SEX_OFFSET: usize = 20;

/// Expiration date (YYMMDD) on line 2
pub const EXPIRATION_DATE_RANGE: Range<usize> = 21..27;

/// Expiration date check digit on line 2
pub const EXPIRATION_DATE_CHECK_OFFSET: usize = 27;

/// Personal number on line 2
pub const PERSONAL_NUMBER_RANGE: Range<usize> = 28..37;

/// Fixed filler block on line 2 (offsets 37..43). Not a composite check
/// digit field in this scheme.
pub const PERSONAL_NUMBER_FILLER_LEN: usize = 6;

/// Personal number check digit on line 2
pub const PERSONAL_NUMBER_CHECK_OFFSET: usize = 43;

/// Encoded width of the passport number field
pub const PASSPORT_NUMBER_LEN: usize = 9;

/// Width of the country fields
pub const COUNTRY_LEN: usize = 3;

/// Width of the date fields (YYMMDD)
pub const DATE_LEN: usize = 6;

/// Maximum encoded width of the personal number. The encoder truncates to
/// this width but never filler-pads; shorter values stay short.
pub const PERSONAL_NUMBER_LEN: usize = 9;
