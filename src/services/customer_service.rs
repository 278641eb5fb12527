use crate::{
    db::DbPool,
    dto::customers::NewCustomer,
    error::{AppError, AppResult},
    models::Customer,
};

pub async fn register(pool: &DbPool, customer: NewCustomer) -> AppResult<Customer> {
    tracing::info!(name = %customer.name, "registering a new customer");

    let customer = sqlx::query_as::<_, Customer>(
        "INSERT INTO customers (name, phone) VALUES ($1, $2) RETURNING id, name, phone",
    )
    .bind(customer.name)
    .bind(customer.phone)
    .fetch_one(pool)
    .await?;

    Ok(customer)
}

pub async fn list(pool: &DbPool) -> AppResult<Vec<Customer>> {
    tracing::debug!("listing all customers");

    let customers = sqlx::query_as::<_, Customer>("SELECT id, name, phone FROM customers")
        .fetch_all(pool)
        .await?;

    Ok(customers)
}

pub async fn find(pool: &DbPool, customer_id: i32) -> AppResult<Customer> {
    tracing::debug!(customer_id, "fetching the customer");

    let customer =
        sqlx::query_as::<_, Customer>("SELECT id, name, phone FROM customers WHERE id = $1")
            .bind(customer_id)
            .fetch_optional(pool)
            .await?;

    customer.ok_or(AppError::NotFound)
}

pub async fn update(pool: &DbPool, customer_id: i32, customer: NewCustomer) -> AppResult<Customer> {
    tracing::info!(customer_id, "updating a customer");

    // Existence check first so a missing row surfaces as NotFound, not as a
    // decode failure on the UPDATE. Not atomic with the write.
    find(pool, customer_id).await?;

    let customer = sqlx::query_as::<_, Customer>(
        "UPDATE customers SET name = $2, phone = $3 WHERE id = $1 RETURNING id, name, phone",
    )
    .bind(customer_id)
    .bind(customer.name)
    .bind(customer.phone)
    .fetch_one(pool)
    .await?;

    Ok(customer)
}

pub async fn delete(pool: &DbPool, customer_id: i32) -> AppResult<()> {
    tracing::info!(customer_id, "deleting a customer");

    let result = sqlx::query("DELETE FROM customers WHERE id = $1")
        .bind(customer_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }

    Ok(())
}
