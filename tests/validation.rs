use std::collections::BTreeMap;

use candy_sales_api::{
    dto::{
        candies::CandyPayload, customers::CustomerPayload, duties::DutyPayload,
        sales::SalePayload,
    },
    error::AppError,
    models::{PaymentMethod, SaleStatus},
    validation::{Validate, validate},
};

fn violations(payload: &impl Validate) -> BTreeMap<String, String> {
    match validate(payload) {
        Err(AppError::Validation(fields)) => fields,
        other => panic!("expected a validation failure, got {other:?}"),
    }
}

#[test]
fn accepts_a_valid_customer() {
    let payload = CustomerPayload {
        name: Some("Maria".into()),
        phone: Some("11987654321".into()),
    };

    assert!(validate(&payload).is_ok());
}

#[test]
fn rejects_a_too_short_customer_name() {
    let payload = CustomerPayload {
        name: Some("A".into()),
        phone: Some("11987654321".into()),
    };

    let fields = violations(&payload);
    assert_eq!(
        fields.get("name").map(String::as_str),
        Some("The name is smaller than the minimum expected value."),
    );
    assert!(!fields.contains_key("phone"));
}

#[test]
fn rejects_a_missing_phone() {
    let payload = CustomerPayload {
        name: Some("Maria".into()),
        phone: None,
    };

    let fields = violations(&payload);
    assert_eq!(
        fields.get("phone").map(String::as_str),
        Some("The phone is required."),
    );
}

#[test]
fn collects_every_violated_field() {
    let payload = CustomerPayload {
        name: None,
        phone: Some("123".into()),
    };

    let fields = violations(&payload);
    assert_eq!(fields.len(), 2);
    assert_eq!(
        fields.get("name").map(String::as_str),
        Some("The name is required."),
    );
    assert_eq!(
        fields.get("phone").map(String::as_str),
        Some("The phone is smaller than the minimum expected value."),
    );
}

#[test]
fn rejects_a_too_long_customer_name() {
    let payload = CustomerPayload {
        name: Some("a".repeat(41)),
        phone: Some("11987654321".into()),
    };

    let fields = violations(&payload);
    assert_eq!(
        fields.get("name").map(String::as_str),
        Some("The name is bigger than the maximum expected value."),
    );
}

#[test]
fn treats_a_zero_quantity_as_missing() {
    let payload = DutyPayload {
        date: Some("05/03/2021".into()),
        candy_quantity: Some(0),
    };

    let fields = violations(&payload);
    assert_eq!(
        fields.get("candyQuantity").map(String::as_str),
        Some("The candyQuantity is required."),
    );
}

#[test]
fn rejects_a_candy_below_the_minimum_price() {
    let payload = CandyPayload {
        name: Some("Bar".into()),
        price: Some(1),
    };

    let fields = violations(&payload);
    assert_eq!(
        fields.get("price").map(String::as_str),
        Some("The price is smaller than the minimum expected value."),
    );
}

#[test]
fn rejects_an_unknown_sale_status_and_payment_method() {
    let payload = SalePayload {
        customer_id: Some(1),
        duty_id: Some(1),
        candy_id: Some(1),
        status: Some("pending".into()),
        payment_method: Some("card".into()),
    };

    let fields = violations(&payload);
    assert_eq!(
        fields.get("status").map(String::as_str),
        Some("The status is invalid."),
    );
    assert_eq!(
        fields.get("paymentMethod").map(String::as_str),
        Some("The paymentMethod is invalid."),
    );
}

#[test]
fn maps_a_valid_sale_payload_into_enums() {
    let payload = SalePayload {
        customer_id: Some(3),
        duty_id: Some(7),
        candy_id: Some(2),
        status: Some("not_paid".into()),
        payment_method: Some("scheduled".into()),
    };

    assert!(validate(&payload).is_ok());

    let sale = payload.into_new().expect("a validated payload maps");
    assert_eq!(sale.customer_id, 3);
    assert_eq!(sale.duty_id, 7);
    assert_eq!(sale.candy_id, 2);
    assert_eq!(sale.status, SaleStatus::NotPaid);
    assert_eq!(sale.payment_method, PaymentMethod::Scheduled);
}

#[test]
fn uses_the_wire_key_for_sale_field_messages() {
    let payload = SalePayload {
        customer_id: None,
        duty_id: Some(1),
        candy_id: Some(1),
        status: Some("paid".into()),
        payment_method: Some("money".into()),
    };

    let fields = violations(&payload);
    assert_eq!(
        fields.get("customerId").map(String::as_str),
        Some("The customerId is required."),
    );
}
