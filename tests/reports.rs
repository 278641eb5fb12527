use candy_sales_api::{
    models::{Duty, DutySale, SaleRow},
    services::{
        duty_service::sales_report,
        sale_service::{consolidate, months_from_dates},
    },
};

fn duty_sale(id: i32, price: i32, status: &str) -> DutySale {
    DutySale {
        id,
        candy_id: 1,
        candy_name: "Brigadeiro".into(),
        candy_price: price,
        customer_id: 1,
        customer_name: "Maria".into(),
        customer_phone: "11987654321".into(),
        payment_method: "money".into(),
        status: status.into(),
    }
}

fn sale_row(duty_id: i32, duty_date: &str, sale_id: i32, price: i32, status: &str) -> SaleRow {
    SaleRow {
        duty_id,
        duty_date: duty_date.into(),
        duty_quantity: 30,
        id: sale_id,
        status: status.into(),
        payment_method: "transfer".into(),
        candy_id: 1,
        candy_name: "Beijinho".into(),
        candy_price: price,
        customer_id: 2,
        customer_name: "Joana".into(),
        customer_phone: "11912345678".into(),
    }
}

#[test]
fn duty_report_accumulates_amounts_by_status() {
    let duty = Duty {
        id: 9,
        date: "05/03/2021".into(),
        candy_quantity: 50,
    };
    let rows = vec![
        duty_sale(1, 500, "paid"),
        duty_sale(2, 300, "not_paid"),
        duty_sale(3, 200, "paid"),
    ];

    let report = sales_report(&duty, rows);

    assert_eq!(report.id, 9);
    assert_eq!(report.quantity, 50);
    assert_eq!(report.subtotal, 1000);
    assert_eq!(report.paid_amount, 700);
    assert_eq!(report.scheduled_amount, 300);
    assert_eq!(report.sales.len(), 3);
}

#[test]
fn duty_report_preserves_row_order() {
    let duty = Duty {
        id: 1,
        date: "05/03/2021".into(),
        candy_quantity: 10,
    };
    let rows = vec![
        duty_sale(7, 100, "paid"),
        duty_sale(3, 100, "paid"),
        duty_sale(5, 100, "not_paid"),
    ];

    let report = sales_report(&duty, rows);

    let ids: Vec<i32> = report.sales.iter().map(|sale| sale.id).collect();
    assert_eq!(ids, vec![7, 3, 5]);
}

#[test]
fn duty_report_for_a_duty_without_sales_is_empty() {
    let duty = Duty {
        id: 4,
        date: "10/04/2021".into(),
        candy_quantity: 20,
    };

    let report = sales_report(&duty, Vec::new());

    assert_eq!(report.subtotal, 0);
    assert_eq!(report.paid_amount, 0);
    assert_eq!(report.scheduled_amount, 0);
    assert!(report.sales.is_empty());
}

#[test]
fn consolidation_groups_interleaved_rows_by_duty() {
    let rows = vec![
        sale_row(1, "05/03/2021", 10, 500, "paid"),
        sale_row(2, "12/03/2021", 11, 250, "not_paid"),
        sale_row(1, "05/03/2021", 12, 300, "not_paid"),
        sale_row(2, "12/03/2021", 13, 250, "paid"),
        sale_row(1, "05/03/2021", 14, 200, "paid"),
    ];

    let consolidated = consolidate(rows);

    assert_eq!(consolidated.len(), 2);

    let first = &consolidated[&1];
    assert_eq!(first.date, "05/03/2021");
    assert_eq!(first.subtotal, 1000);
    assert_eq!(first.paid_amount, 700);
    assert_eq!(first.scheduled_amount, 300);
    let ids: Vec<i32> = first.sales.iter().map(|sale| sale.id).collect();
    assert_eq!(ids, vec![10, 12, 14]);

    let second = &consolidated[&2];
    assert_eq!(second.subtotal, 500);
    assert_eq!(second.paid_amount, 250);
    assert_eq!(second.scheduled_amount, 250);
}

#[test]
fn months_are_distinct_and_descending() {
    let dates = vec![
        "05/03/2021".to_string(),
        "12/03/2021".to_string(),
        "01/01/2021".to_string(),
        "07/12/2020".to_string(),
    ];

    let months = months_from_dates(dates);

    let labels: Vec<(u32, i32)> = months.iter().map(|m| (m.number, m.year)).collect();
    assert_eq!(labels, vec![(3, 2021), (1, 2021), (12, 2020)]);
    assert_eq!(months[0].name, "March");
    assert_eq!(months[2].name, "December");
}

#[test]
fn months_skip_dates_with_unexpected_format() {
    let dates = vec!["not-a-date".to_string(), "25/06/2021".to_string()];

    let months = months_from_dates(dates);

    assert_eq!(months.len(), 1);
    assert_eq!(months[0].number, 6);
    assert_eq!(months[0].year, 2021);
    assert_eq!(months[0].name, "June");
}
