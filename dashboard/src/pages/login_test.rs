use super::*;

#[test]
fn normalize_phone_input_drops_spaces_and_dashes() {
    assert_eq!(normalize_phone_input(" +251 911-111 111 "), "+251911111111");
}

#[test]
fn validate_phone_accepts_prefixed_nine_digits() {
    assert_eq!(validate_phone("+251 911 111 111"), Ok("+251911111111".to_owned()));
}

#[test]
fn validate_phone_rejects_prefix_only() {
    assert_eq!(validate_phone(PHONE_PREFIX), Err(PHONE_HINT));
}

#[test]
fn validate_phone_rejects_missing_plus() {
    assert_eq!(validate_phone("251911111111"), Err(PHONE_HINT));
}

#[test]
fn validate_phone_rejects_wrong_length() {
    assert_eq!(validate_phone("+25191111111"), Err(PHONE_HINT));
    assert_eq!(validate_phone("+2519111111111"), Err(PHONE_HINT));
}

#[test]
fn normalize_code_input_keeps_six_digits() {
    assert_eq!(normalize_code_input("12a3-4567"), "123456");
}

#[test]
fn validate_code_requires_exactly_six_digits() {
    assert_eq!(validate_code(" 123456 "), Ok("123456".to_owned()));
    assert_eq!(validate_code("12345"), Err(CODE_HINT));
    assert_eq!(validate_code("12345a"), Err(CODE_HINT));
    assert_eq!(validate_code(""), Err(CODE_HINT));
}
