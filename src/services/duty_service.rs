use crate::{
    db::DbPool,
    dto::duties::NewDuty,
    error::{AppError, AppResult},
    models::{Duty, DutySale, DutySales, SaleStatus},
};

pub async fn register(pool: &DbPool, duty: NewDuty) -> AppResult<Duty> {
    tracing::info!(date = %duty.date, quantity = duty.candy_quantity, "registering a new duty");

    let duty = sqlx::query_as::<_, Duty>(
        "INSERT INTO duties (date, candy_quantity) VALUES ($1, $2)
         RETURNING id, date, candy_quantity",
    )
    .bind(duty.date)
    .bind(duty.candy_quantity)
    .fetch_one(pool)
    .await?;

    Ok(duty)
}

pub async fn list(pool: &DbPool) -> AppResult<Vec<Duty>> {
    tracing::debug!("listing all duties");

    let duties = sqlx::query_as::<_, Duty>("SELECT id, date, candy_quantity FROM duties")
        .fetch_all(pool)
        .await?;

    Ok(duties)
}

pub async fn find(pool: &DbPool, duty_id: i32) -> AppResult<Duty> {
    tracing::debug!(duty_id, "fetching the duty");

    let duty =
        sqlx::query_as::<_, Duty>("SELECT id, date, candy_quantity FROM duties WHERE id = $1")
            .bind(duty_id)
            .fetch_optional(pool)
            .await?;

    duty.ok_or(AppError::NotFound)
}

pub async fn update(pool: &DbPool, duty_id: i32, duty: NewDuty) -> AppResult<Duty> {
    tracing::info!(duty_id, "updating a duty");

    find(pool, duty_id).await?;

    let duty = sqlx::query_as::<_, Duty>(
        "UPDATE duties SET date = $2, candy_quantity = $3 WHERE id = $1
         RETURNING id, date, candy_quantity",
    )
    .bind(duty_id)
    .bind(duty.date)
    .bind(duty.candy_quantity)
    .fetch_one(pool)
    .await?;

    Ok(duty)
}

/// Sales report for one duty: the flat join rows plus the amounts
/// accumulated by payment status.
pub async fn sales(pool: &DbPool, duty_id: i32) -> AppResult<DutySales> {
    tracing::debug!(duty_id, "fetching the duty sales");

    let duty = find(pool, duty_id).await?;

    let rows = sqlx::query_as::<_, DutySale>(
        r#"
        SELECT
            s.id AS id,
            s.status AS status,
            s.payment_method AS payment_method,

            cu.id AS customer_id,
            cu.name AS customer_name,
            cu.phone AS customer_phone,

            ca.id AS candy_id,
            ca.name AS candy_name,
            ca.price AS candy_price
        FROM
            sales s
            INNER JOIN customers cu ON s.customer_id = cu.id
            INNER JOIN candies ca ON s.candy_id = ca.id
        WHERE
            s.duty_id = $1
        "#,
    )
    .bind(duty_id)
    .fetch_all(pool)
    .await?;

    Ok(sales_report(&duty, rows))
}

/// Single pass over the join rows, preserving their order and summing the
/// candy price into subtotal plus the per-status amount.
pub fn sales_report(duty: &Duty, rows: Vec<DutySale>) -> DutySales {
    let mut report = DutySales {
        id: duty.id,
        date: duty.date.clone(),
        quantity: duty.candy_quantity,
        subtotal: 0,
        paid_amount: 0,
        scheduled_amount: 0,
        sales: Vec::with_capacity(rows.len()),
    };

    for sale in rows {
        let price = i64::from(sale.candy_price);
        report.subtotal += price;
        match SaleStatus::parse(&sale.status) {
            Some(SaleStatus::Paid) => report.paid_amount += price,
            _ => report.scheduled_amount += price,
        }
        report.sales.push(sale);
    }

    report
}
