use candy_sales_api::{config::AppConfig, db::create_pool, services::auth_service};

// There is no registration route; the back-office user is seeded here.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url, config.db_max_connections).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    let email = std::env::var("SEED_USER_EMAIL").unwrap_or_else(|_| "admin@example.com".into());
    let password = std::env::var("SEED_USER_PASSWORD").unwrap_or_else(|_| "admin123".into());

    let user_id = ensure_user(&pool, "Admin", &email, &password).await?;
    seed_candies(&pool).await?;

    println!("Seed completed. User ID: {user_id}");
    Ok(())
}

async fn ensure_user(
    pool: &sqlx::PgPool,
    name: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<i32> {
    let password_hash =
        auth_service::hash_password(password).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    let row: Option<(i32,)> = sqlx::query_as(
        r#"
        INSERT INTO users (name, email, password)
        VALUES ($1, $2, $3)
        ON CONFLICT (email) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_optional(pool)
    .await?;

    // If the user already exists, fetch its id.
    let user_id = match row {
        Some((id,)) => id,
        None => {
            let existing: (i32,) = sqlx::query_as("SELECT id FROM users WHERE email = $1")
                .bind(email)
                .fetch_one(pool)
                .await?;
            existing.0
        }
    };

    println!("Ensured user {email}");
    Ok(user_id)
}

async fn seed_candies(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let candies = vec![
        ("Brigadeiro", 250),
        ("Beijinho", 250),
        ("Bombom", 300),
        ("Pacoca", 200),
    ];

    for (name, price) in candies {
        let exists: Option<(i32,)> = sqlx::query_as("SELECT id FROM candies WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await?;

        if exists.is_none() {
            sqlx::query("INSERT INTO candies (name, price) VALUES ($1, $2)")
                .bind(name)
                .bind(price)
                .execute(pool)
                .await?;
        }
    }

    println!("Seeded candies");
    Ok(())
}
