//! Integration tests for the complete fields → encode → decode → verify flow

use mrtd_core::{
    checksum::check_digit_char,
    decoder::decode,
    encoder::encode,
    verifier::{verify_lines, verify_record, CheckedField},
    DocumentFields, MrzError, MrzLine,
};

fn reference_fields() -> DocumentFields {
    DocumentFields {
        document_type: "P".into(),
        issuing_country: "UTO".into(),
        last_name: "ERIKSSON".into(),
        first_name: "ANNA".into(),
        middle_name: "MARIA".into(),
        passport_number: "L898902C3".into(),
        country_code: "UTO".into(),
        birth_date: "740812".into(),
        sex: "F".into(),
        expiration_date: "120415".into(),
        personal_number: "ZE184226B".into(),
    }
}

#[test]
fn test_full_workflow_clean() {
    // Step 1: Encode fields into the wire form
    let pair = encode(&reference_fields()).unwrap();
    assert_eq!(pair.line1.len(), 44);
    assert_eq!(pair.line2.len(), 44);

    // Step 2: A batch tool would join and later split the two lines; the
    // core only ever sees the pair
    let stored = format!("{};{}", pair.line1, pair.line2);
    let (line1, line2) = stored.split_once(';').unwrap();

    // Step 3: Decode back into a structured record
    let record = decode(line1, line2).unwrap();
    assert_eq!(record.line1.last_name, "ERIKSSON");
    assert_eq!(record.line1.first_name, "ANNA");
    assert_eq!(record.line1.middle_name, "MARIA");
    assert_eq!(record.line1.full_name, "ANNA MARIA ERIKSSON");
    assert_eq!(record.line2.passport_number, "L898902C3");
    assert_eq!(record.line2.birth_date, "740812");

    // Step 4: Both verification entry points accept the encoder's output
    let from_lines = verify_lines(line1, line2).unwrap();
    assert!(from_lines.report.valid);

    let from_record = verify_record(&record).unwrap();
    assert!(from_record.valid);
}

#[test]
fn test_workflow_with_corruption() {
    let pair = encode(&reference_fields()).unwrap();

    // Flip the birth date check digit at offset 19
    let mut bytes = pair.line2.into_bytes();
    assert_eq!(bytes[19], b'3');
    bytes[19] = b'8';
    let corrupted = String::from_utf8(bytes).unwrap();

    let result = verify_lines(&pair.line1, &corrupted).unwrap();
    assert!(!result.report.valid);
    assert!(!result.report.details[&CheckedField::BirthDate]);
    assert!(result.report.details[&CheckedField::PassportNumber]);
    assert!(result.report.details[&CheckedField::ExpirationDate]);

    // The recomputed digit is still the correct one
    assert_eq!(result.report.calculated[&CheckedField::BirthDate], '3');

    // The record-based verifier agrees
    let record = decode(&pair.line1, &corrupted).unwrap();
    let report = verify_record(&record).unwrap();
    assert!(!report.valid);
    assert!(!report.details[&CheckedField::BirthDate]);
}

#[test]
fn test_fields_from_json_with_defaults() {
    // Absent keys take their defaults: empty strings, "P" for the
    // document type
    let fields: DocumentFields = serde_json::from_str(
        r#"{
            "issuing_country": "UTO",
            "last_name": "ERIKSSON",
            "first_name": "ANNA",
            "passport_number": "L898902C3",
            "country_code": "UTO",
            "birth_date": "740812",
            "sex": "F",
            "expiration_date": "120415",
            "personal_number": "ZE184226B"
        }"#,
    )
    .unwrap();

    assert_eq!(fields.document_type, "P");
    assert_eq!(fields.middle_name, "");

    let pair = encode(&fields).unwrap();
    assert!(pair.line1.starts_with("P<UTOERIKSSON<<ANNA<<"));
    assert!(verify_lines(&pair.line1, &pair.line2).unwrap().report.valid);
}

#[test]
fn test_record_serializes_to_json() {
    let pair = encode(&reference_fields()).unwrap();
    let record = decode(&pair.line1, &pair.line2).unwrap();

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["line1"]["full_name"], "ANNA MARIA ERIKSSON");
    assert_eq!(json["line2"]["passport_number"], "L898902C3");
    assert_eq!(json["line2"]["passport_number_check_digit"], "2");
}

#[test]
fn test_report_serializes_with_snake_case_fields() {
    let pair = encode(&reference_fields()).unwrap();
    let result = verify_lines(&pair.line1, &pair.line2).unwrap();

    let json = serde_json::to_value(&result.report).unwrap();
    assert_eq!(json["valid"], true);
    assert_eq!(json["details"]["passport_number"], true);
    assert_eq!(json["calculated"]["expiration_date"], "4");
    // The line-based verifier never reports the personal number
    assert!(json["details"].get("personal_number").is_none());
}

#[test]
fn test_encoder_output_is_mrz_alphabet() {
    let pair = encode(&reference_fields()).unwrap();
    let is_mrz = |c: char| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '<';
    assert!(pair.line1.chars().all(is_mrz));
    assert!(pair.line2.chars().all(is_mrz));
}

#[test]
fn test_invalid_length_surfaces_through_display() {
    let err = mrtd_core::decoder::validate_length("TOO<SHORT", MrzLine::Line2).unwrap_err();
    assert_eq!(
        err,
        MrzError::InvalidLength {
            line: MrzLine::Line2,
            length: 9
        }
    );
    assert_eq!(
        err.to_string(),
        "line 2 must be exactly 44 characters, got 9"
    );
}

#[test]
fn test_check_digit_char_matches_stored_digits() {
    let pair = encode(&reference_fields()).unwrap();
    let record = decode(&pair.line1, &pair.line2).unwrap();

    assert_eq!(
        check_digit_char(&record.line2.passport_number).unwrap(),
        record.line2.passport_number_check_digit
    );
    assert_eq!(
        check_digit_char(&record.line2.personal_number).unwrap(),
        record.line2.personal_number_check_digit
    );
}
