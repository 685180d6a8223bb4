use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::Utc;
use password_hash::rand_core::OsRng;

use crate::{
    db::DbPool,
    dto::auth::{LoginRequest, RegisterRequest},
    error::{AppError, AppResult},
    models::User,
};

/// Create a user. Email is unique; a duplicate surfaces as a 400 conflict.
/// Registration never establishes a session, the caller logs in separately.
pub async fn register_user(pool: &DbPool, payload: RegisterRequest) -> AppResult<i64> {
    let RegisterRequest {
        name,
        email,
        password,
        phone,
        address,
    } = payload;

    let exist: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
        .bind(email.as_str())
        .fetch_optional(pool)
        .await?;

    if exist.is_some() {
        return Err(AppError::DuplicateEmail);
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();

    let inserted: Result<(i64,), sqlx::Error> = sqlx::query_as(
        r#"
        INSERT INTO users (name, email, password, phone, address, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(email.as_str())
    .bind(password_hash)
    .bind(phone)
    .bind(address)
    .bind(Utc::now())
    .fetch_one(pool)
    .await;

    let (user_id,) = match inserted {
        Ok(row) => row,
        // The pre-check raced a concurrent registration for the same email.
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            return Err(AppError::DuplicateEmail);
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(user_id, "user registered");
    Ok(user_id)
}

/// Exact email lookup plus password verification. Unknown email and wrong
/// password collapse into the same generic error.
pub async fn login_user(pool: &DbPool, payload: LoginRequest) -> AppResult<User> {
    let LoginRequest { email, password } = payload;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(email.as_str())
        .fetch_optional(pool)
        .await?;

    let user = match user {
        Some(u) => u,
        None => return Err(AppError::InvalidCredentials),
    };

    let parsed_hash = PasswordHash::new(&user.password)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;

    let argon2 = Argon2::default();
    if argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_err()
    {
        return Err(AppError::InvalidCredentials);
    }

    tracing::info!(user_id = user.id, "user logged in");
    Ok(user)
}
