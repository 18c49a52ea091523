use super::*;

#[test]
fn new_flag_is_alive() {
    assert!(AliveFlag::new().is_alive());
}

#[test]
fn clear_is_seen_by_clones() {
    let flag = AliveFlag::new();
    let task_copy = flag.clone();
    flag.clear();
    assert!(!task_copy.is_alive());
}

#[test]
fn clear_is_idempotent() {
    let flag = AliveFlag::default();
    flag.clear();
    flag.clear();
    assert!(!flag.is_alive());
}
