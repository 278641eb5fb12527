use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use crate::{
    db::DbPool,
    dto::sales::{NewSale, SalePatch},
    error::{AppError, AppResult},
    models::{ConsolidatedDuties, DutySales, Month, Sale, SaleRow, SaleStatus},
};

/// Duty dates are stored as text in this format; rows whose date does not
/// parse are skipped from the month reports.
const DUTY_DATE_FORMAT: &str = "%d/%m/%Y";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub async fn register(pool: &DbPool, sale: NewSale) -> AppResult<Sale> {
    tracing::info!(
        customer_id = sale.customer_id,
        duty_id = sale.duty_id,
        candy_id = sale.candy_id,
        "registering a new sale"
    );

    let sale = sqlx::query_as::<_, Sale>(
        "INSERT INTO sales (customer_id, duty_id, candy_id, status, payment_method)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, customer_id, duty_id, candy_id, status, payment_method",
    )
    .bind(sale.customer_id)
    .bind(sale.duty_id)
    .bind(sale.candy_id)
    .bind(sale.status.as_str())
    .bind(sale.payment_method.as_str())
    .fetch_one(pool)
    .await?;

    Ok(sale)
}

pub async fn find(pool: &DbPool, sale_id: i32) -> AppResult<Sale> {
    tracing::debug!(sale_id, "fetching the sale");

    let sale = sqlx::query_as::<_, Sale>(
        "SELECT id, customer_id, duty_id, candy_id, status, payment_method
         FROM sales WHERE id = $1",
    )
    .bind(sale_id)
    .fetch_optional(pool)
    .await?;

    sale.ok_or(AppError::NotFound)
}

pub async fn update(pool: &DbPool, sale_id: i32, patch: SalePatch) -> AppResult<Sale> {
    tracing::info!(sale_id, "updating a sale");

    find(pool, sale_id).await?;

    let sale = sqlx::query_as::<_, Sale>(
        "UPDATE sales SET status = $1, payment_method = $2 WHERE id = $3
         RETURNING id, customer_id, duty_id, candy_id, status, payment_method",
    )
    .bind(patch.status.as_str())
    .bind(patch.payment_method.as_str())
    .bind(sale_id)
    .fetch_one(pool)
    .await?;

    Ok(sale)
}

pub async fn delete(pool: &DbPool, sale_id: i32) -> AppResult<()> {
    tracing::info!(sale_id, "deleting a sale");

    let result = sqlx::query("DELETE FROM sales WHERE id = $1")
        .bind(sale_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }

    Ok(())
}

/// Distinct months that have recorded sales, most recent first.
pub async fn months(pool: &DbPool) -> AppResult<Vec<Month>> {
    tracing::debug!("listing the months with sales");

    let rows: Vec<(String,)> =
        sqlx::query_as("SELECT du.date FROM sales s INNER JOIN duties du ON s.duty_id = du.id")
            .fetch_all(pool)
            .await?;

    Ok(months_from_dates(rows.into_iter().map(|(date,)| date)))
}

/// Sales of one month, consolidated per duty. The month/year predicate is
/// applied in the query; duty dates that do not match the stored format are
/// excluded by the guard, same as the month listing skips them.
pub async fn month_sales(pool: &DbPool, month: u32, year: i32) -> AppResult<ConsolidatedDuties> {
    tracing::debug!(month, year, "consolidating the month sales");

    let rows = sqlx::query_as::<_, SaleRow>(
        r#"
        SELECT
            du.id AS duty_id,
            du.date AS duty_date,
            du.candy_quantity AS duty_quantity,

            s.id AS id,
            s.status AS status,
            s.payment_method AS payment_method,

            ca.id AS candy_id,
            ca.name AS candy_name,
            ca.price AS candy_price,

            cu.id AS customer_id,
            cu.name AS customer_name,
            cu.phone AS customer_phone
        FROM
            sales s
            INNER JOIN duties du ON s.duty_id = du.id
            INNER JOIN customers cu ON s.customer_id = cu.id
            INNER JOIN candies ca ON s.candy_id = ca.id
        WHERE
            du.date ~ '^\d{2}/\d{2}/\d{4}$'
            AND split_part(du.date, '/', 2)::int = $1
            AND split_part(du.date, '/', 3)::int = $2
        "#,
    )
    .bind(month as i32)
    .bind(year)
    .fetch_all(pool)
    .await?;

    Ok(consolidate(rows))
}

/// Group flat join rows by duty, accumulating subtotal and the per-status
/// amounts. Row order within each duty is preserved.
pub fn consolidate(rows: impl IntoIterator<Item = SaleRow>) -> ConsolidatedDuties {
    let mut duties = ConsolidatedDuties::new();

    for row in rows {
        let entry = duties.entry(row.duty_id).or_insert_with(|| DutySales {
            id: row.duty_id,
            date: row.duty_date.clone(),
            quantity: row.duty_quantity,
            subtotal: 0,
            paid_amount: 0,
            scheduled_amount: 0,
            sales: Vec::new(),
        });

        let price = i64::from(row.candy_price);
        entry.subtotal += price;
        match SaleStatus::parse(&row.status) {
            Some(SaleStatus::Paid) => entry.paid_amount += price,
            _ => entry.scheduled_amount += price,
        }

        entry.sales.push(row.into());
    }

    duties
}

/// Derive the distinct (name, number, year) month triples from duty dates,
/// ordered chronologically descending.
pub fn months_from_dates(dates: impl IntoIterator<Item = String>) -> Vec<Month> {
    let mut seen = BTreeSet::new();

    for date in dates {
        match NaiveDate::parse_from_str(&date, DUTY_DATE_FORMAT) {
            Ok(parsed) => {
                seen.insert((parsed.year(), parsed.month()));
            }
            Err(_) => {
                tracing::warn!(date = %date, "skipping duty date with unexpected format");
            }
        }
    }

    seen.into_iter()
        .rev()
        .map(|(year, month)| Month {
            name: month_name(month),
            number: month,
            year,
        })
        .collect()
}

fn month_name(number: u32) -> String {
    (number as usize)
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index))
        .copied()
        .unwrap_or_default()
        .to_string()
}
