use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use password_hash::rand_core::OsRng;

use crate::{
    db::DbPool,
    dto::auth::{Claims, Credentials, LoginResponse},
    error::{AppError, AppResult},
    models::User,
};

pub async fn login(pool: &DbPool, credentials: Credentials) -> AppResult<LoginResponse> {
    tracing::info!(email = %credentials.email, "logging a user in");

    let user = find_by_email(pool, &credentials.email).await?;

    verify_password(&user.password, &credentials.password)?;

    let secret = std::env::var("JWT_SECRET")
        .map_err(|_| AppError::Internal(anyhow::anyhow!("JWT_SECRET is not set")))?;
    let ttl_hours = std::env::var("JWT_EXPIRATION_IN_HOURS")
        .ok()
        .and_then(|h| h.parse::<i64>().ok())
        .unwrap_or(24);

    let token = issue_token(user.id, &secret, ttl_hours)?;

    Ok(LoginResponse { token })
}

async fn find_by_email(pool: &DbPool, email: &str) -> AppResult<User> {
    tracing::debug!(email = %email, "fetching the user");

    let user =
        sqlx::query_as::<_, User>("SELECT id, name, email, password FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;

    user.ok_or(AppError::NotFound)
}

pub fn hash_password(plain: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;
    Ok(hash.to_string())
}

/// Compare a plaintext password against a stored argon2 hash. A mismatch is
/// Unauthorized; a hash that cannot be parsed is an internal failure.
pub fn verify_password(hash: &str, plain: &str) -> AppResult<()> {
    let parsed =
        PasswordHash::new(hash).map_err(|_| AppError::Internal(anyhow::anyhow!("invalid password hash")))?;

    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .map_err(|_| AppError::Unauthorized)
}

/// Sign a HS256 token carrying the user id as subject and an expiry claim.
pub fn issue_token(user_id: i32, secret: &str, ttl_hours: i64) -> AppResult<String> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(ttl_hours))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("failed to compute token expiry")))?;

    let claims = Claims {
        sub: user_id.to_string(),
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

/// Verify signature, algorithm and expiry; malformed or expired tokens are
/// Unauthorized.
pub fn decode_token(token: &str, secret: &str) -> AppResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized)
}
