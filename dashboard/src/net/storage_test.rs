use super::*;

#[test]
fn without_browser_storage_reads_are_empty() {
    let store = LocalStorageTokenStore;
    store.set_tokens("a1", "r1");
    assert_eq!(store.access_token(), None);
    assert_eq!(store.refresh_token(), None);
}

#[test]
fn clear_without_storage_is_a_no_op() {
    let store = LocalStorageTokenStore;
    store.clear_tokens();
    store.clear_tokens();
    assert_eq!(store.access_token(), None);
}

type Writes = Vec<(String, Option<String>)>;

fn recording(fail_key: Option<&'static str>, log: &mut Writes) -> impl FnMut(&str, Option<&str>) -> bool + '_ {
    move |key, value| {
        log.push((key.to_owned(), value.map(str::to_owned)));
        Some(key) != fail_key || value.is_none()
    }
}

#[test]
fn write_pair_stores_both_keys() {
    let mut writes = Writes::new();
    assert!(write_pair(recording(None, &mut writes), "a1", "r1"));
    assert_eq!(
        writes,
        vec![
            (ACCESS_TOKEN_KEY.to_owned(), Some("a1".to_owned())),
            (REFRESH_TOKEN_KEY.to_owned(), Some("r1".to_owned())),
        ]
    );
}

#[test]
fn failed_access_write_leaves_no_half_pair() {
    let mut writes = Writes::new();
    assert!(!write_pair(recording(Some(ACCESS_TOKEN_KEY), &mut writes), "a1", "r1"));
    assert_eq!(
        writes,
        vec![
            (ACCESS_TOKEN_KEY.to_owned(), Some("a1".to_owned())),
            (ACCESS_TOKEN_KEY.to_owned(), None),
            (REFRESH_TOKEN_KEY.to_owned(), None),
        ]
    );
}

#[test]
fn failed_refresh_write_removes_stored_access() {
    let mut writes = Writes::new();
    assert!(!write_pair(recording(Some(REFRESH_TOKEN_KEY), &mut writes), "a1", "r1"));
    assert_eq!(writes.last(), Some(&(REFRESH_TOKEN_KEY.to_owned(), None)));
    assert!(writes.contains(&(ACCESS_TOKEN_KEY.to_owned(), None)));
}
