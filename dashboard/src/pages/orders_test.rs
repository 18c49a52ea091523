use super::*;

fn order(id: &str, status: &str) -> Order {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "user_id": "u1",
        "distributor_id": "d1",
        "status": status,
        "total": 250.5,
        "delivery_fee": "15.00",
        "payment_method": "cash",
        "items": [],
        "created_at": "2025-02-03T10:00:00Z",
        "updated_at": "2025-02-03T10:00:00Z"
    }))
    .unwrap()
}

#[test]
fn filter_options_start_with_all() {
    let options = status_filter_options();
    assert_eq!(options[0], (String::new(), "All statuses".to_owned()));
    assert_eq!(options.len(), 1 + OrderStatus::KNOWN.len());
    assert!(options.contains(&("shipped".to_owned(), "Shipped".to_owned())));
}

#[test]
fn replace_order_swaps_matching_row() {
    let mut page = Page { items: vec![order("o1", "pending"), order("o2", "pending")], total: 2, page: 1, per_page: 20 };

    assert!(replace_order(&mut page, order("o2", "confirmed")));

    assert_eq!(page.items[0].status, OrderStatus::Pending);
    assert_eq!(page.items[1].status, OrderStatus::Confirmed);
}

#[test]
fn replace_order_ignores_rows_from_other_pages() {
    let mut page = Page { items: vec![order("o1", "pending")], total: 30, page: 2, per_page: 20 };
    assert!(!replace_order(&mut page, order("o9", "shipped")));
    assert_eq!(page.items[0].id, "o1");
}

#[test]
fn blank_status_filter_is_omitted_from_query() {
    assert_eq!(list_query(1, "").to_query_string(), "?page=1&per_page=20");
    assert_eq!(list_query(3, "pending").to_query_string(), "?page=3&per_page=20&status=pending");
}
