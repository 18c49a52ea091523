use super::*;

fn language(code: &str, name: &str, sort_order: i32, is_active: bool) -> Language {
    Language {
        id: format!("lang-{code}"),
        code: code.to_owned(),
        name: name.to_owned(),
        native_name: name.to_owned(),
        is_rtl: false,
        is_default: code == "en",
        sort_order,
        is_active,
    }
}

#[test]
fn profile_update_trims_name() {
    let update = profile_update("  Abebe  ", "am");
    assert_eq!(update.name.as_deref(), Some("Abebe"));
    assert_eq!(update.language_pref.as_deref(), Some("am"));
}

#[test]
fn blank_name_is_omitted() {
    let update = profile_update("   ", "en");
    assert_eq!(update.name, None);
    let body = serde_json::to_value(&update).unwrap();
    assert_eq!(body, serde_json::json!({ "language_pref": "en" }));
}

#[test]
fn language_options_sorted_and_active_only() {
    let options = language_options(vec![
        language("om", "Afaan Oromo", 3, true),
        language("en", "English", 1, true),
        language("ti", "Tigrinya", 4, false),
        language("am", "Amharic", 2, true),
    ]);
    let codes: Vec<_> = options.iter().map(|(code, _)| code.as_str()).collect();
    assert_eq!(codes, ["en", "am", "om"]);
}

#[test]
fn empty_catalogue_falls_back_to_defaults() {
    assert_eq!(language_options(Vec::new()), default_languages());
    assert_eq!(language_options(vec![language("ti", "Tigrinya", 1, false)]), default_languages());
}

#[test]
fn initial_fields_default_to_english() {
    assert_eq!(initial_fields(None), (String::new(), "en".to_owned()));
}

#[test]
fn initial_fields_come_from_user() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "phone": "+251911111111",
        "name": "Abebe",
        "role": "kiosk_owner",
        "language_pref": "om"
    }))
    .unwrap();
    assert_eq!(initial_fields(Some(&user)), ("Abebe".to_owned(), "om".to_owned()));
}
