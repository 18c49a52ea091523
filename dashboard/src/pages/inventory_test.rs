use souksync::api::types::Role;

use super::*;

fn filled() -> ProductForm {
    ProductForm {
        name: "  Sugar 1kg ".to_owned(),
        price: " 85.50 ".to_owned(),
        sku: String::new(),
        category: "Groceries".to_owned(),
        distributor_id: "d1".to_owned(),
    }
}

#[test]
fn to_input_trims_and_drops_blank_optionals() {
    let input = filled().to_input().unwrap();
    assert_eq!(input.name, "Sugar 1kg");
    assert_eq!(input.price, "85.50");
    assert_eq!(input.sku, None);
    assert_eq!(input.category.as_deref(), Some("Groceries"));
    assert_eq!(input.distributor_id, "d1");
}

#[test]
fn to_input_requires_name() {
    let form = ProductForm { name: "   ".to_owned(), ..filled() };
    assert_eq!(form.to_input(), Err("Product name is required."));
}

#[test]
fn to_input_requires_positive_price() {
    for price in ["", "abc", "0", "-3", "NaN", "inf"] {
        let form = ProductForm { price: price.to_owned(), ..filled() };
        assert_eq!(form.to_input(), Err("Price must be a positive number."), "price {price:?}");
    }
}

#[test]
fn to_input_requires_distributor() {
    let form = ProductForm { distributor_id: String::new(), ..filled() };
    assert_eq!(form.to_input(), Err("Distributor is required."));
}

#[test]
fn for_user_prefills_distributor() {
    let user = User {
        id: "u1".to_owned(),
        phone: "+251911111111".to_owned(),
        name: None,
        role: Role::Distributor,
        language_pref: None,
        tenant_id: None,
        distributor_id: Some("d-42".to_owned()),
        is_active: Some(true),
        created_at: None,
    };
    assert_eq!(ProductForm::for_user(Some(&user)).distributor_id, "d-42");
    assert_eq!(ProductForm::for_user(None), ProductForm::default());
}

#[test]
fn parse_price_accepts_integers_and_decimals() {
    assert_eq!(parse_price("12"), Some("12".to_owned()));
    assert_eq!(parse_price(" 0.5 "), Some("0.5".to_owned()));
}
