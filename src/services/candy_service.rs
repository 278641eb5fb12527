use crate::{
    db::DbPool,
    dto::candies::NewCandy,
    error::{AppError, AppResult},
    models::Candy,
};

pub async fn register(pool: &DbPool, candy: NewCandy) -> AppResult<Candy> {
    tracing::info!(name = %candy.name, price = candy.price, "registering a new candy");

    let candy = sqlx::query_as::<_, Candy>(
        "INSERT INTO candies (name, price) VALUES ($1, $2) RETURNING id, name, price",
    )
    .bind(candy.name)
    .bind(candy.price)
    .fetch_one(pool)
    .await?;

    Ok(candy)
}

pub async fn list(pool: &DbPool) -> AppResult<Vec<Candy>> {
    tracing::debug!("listing all candies");

    let candies = sqlx::query_as::<_, Candy>("SELECT id, name, price FROM candies")
        .fetch_all(pool)
        .await?;

    Ok(candies)
}

pub async fn find(pool: &DbPool, candy_id: i32) -> AppResult<Candy> {
    tracing::debug!(candy_id, "fetching the candy");

    let candy = sqlx::query_as::<_, Candy>("SELECT id, name, price FROM candies WHERE id = $1")
        .bind(candy_id)
        .fetch_optional(pool)
        .await?;

    candy.ok_or(AppError::NotFound)
}

pub async fn update(pool: &DbPool, candy_id: i32, candy: NewCandy) -> AppResult<Candy> {
    tracing::info!(candy_id, "updating a candy");

    find(pool, candy_id).await?;

    let candy = sqlx::query_as::<_, Candy>(
        "UPDATE candies SET name = $2, price = $3 WHERE id = $1 RETURNING id, name, price",
    )
    .bind(candy_id)
    .bind(candy.name)
    .bind(candy.price)
    .fetch_one(pool)
    .await?;

    Ok(candy)
}

pub async fn delete(pool: &DbPool, candy_id: i32) -> AppResult<()> {
    tracing::info!(candy_id, "deleting a candy");

    let result = sqlx::query("DELETE FROM candies WHERE id = $1")
        .bind(candy_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }

    Ok(())
}
