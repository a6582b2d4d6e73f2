use kadry_core::validate_snils;

const VALID: &[(&str, &str)] = &[
    ("112-233-445 95", "11223344595"),
    ("087-654-303 00", "08765430300"),
    ("123-456-789 64", "12345678964"),
    ("200-200-200 36", "20020020036"),
    ("999-999-999 01", "99999999901"),
];

const INVALID: &[&str] = &[
    "112-233-445 96",
    "087-654-303 01",
    "123-456-789 00",
    "999-999-999 02",
    "996-000-006 10",
];

#[test]
fn known_good_values_validate_in_both_forms() {
    for (grouped, digits) in VALID {
        assert_eq!(
            validate_snils(grouped).unwrap_or_else(|err| panic!("{grouped}: {err}")),
            *digits
        );
        assert_eq!(validate_snils(digits).unwrap(), *digits);
    }
}

#[test]
fn wrong_control_digits_are_rejected() {
    for value in INVALID {
        let err = validate_snils(value).unwrap_err();
        assert_eq!(err.field, "snils");
        assert_eq!(err.reason, "checksum mismatch");
    }
}

#[test]
fn control_sum_of_100_folds_to_zero() {
    // Base 996000006 has weighted sum 201, 201 % 101 == 100, folded to 0.
    assert_eq!(validate_snils("996-000-006 00").unwrap(), "99600000600");
    assert!(validate_snils("996-000-006 99").is_err());
}

#[test]
fn exempt_base_accepts_any_control_digits() {
    // All bases below 1001998 predate the checksum scheme.
    for check in ["00", "17", "99"] {
        assert!(validate_snils(&format!("001-001-997 {check}")).is_ok());
    }
    // The first non-exempt base verifies normally: weighted sum of
    // 001001998 is 64.
    assert!(validate_snils("001-001-998 64").is_ok());
    assert!(validate_snils("001-001-998 65").is_err());
}

#[test]
fn malformed_shapes_fail_before_checksum() {
    for value in ["", "123", "123456789012", "12-345-678 90", "abc-def-ghi jk"] {
        let err = validate_snils(value).unwrap_err();
        assert_eq!(err.field, "snils");
        assert_ne!(err.reason, "checksum mismatch");
    }
}
