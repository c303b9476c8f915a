use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::get_config;
use crate::entities::user::{self, Entity as User};
use crate::error::AppError;
use crate::middleware::auth::Claims;

const TOKEN_TTL_SECS: usize = 900; // 15 minutes

#[derive(Deserialize, utoipa::ToSchema)]
pub struct SignupRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct SignupResponse {
    pub message: String,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: usize,
}

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created", body = SignupResponse),
        (status = 400, description = "Missing or malformed fields"),
        (status = 409, description = "Email already registered")
    ),
    tag = "Authentication"
)]
pub async fn signup(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    if payload.email.is_empty() || !payload.email.contains('@') || payload.password.len() < 7 {
        return Err(AppError::BadRequest(
            "Invalid input - password should be at least 7 characters long".to_string(),
        ));
    }

    let existing = User::find()
        .filter(user::Column::Email.eq(&payload.email))
        .one(&db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict("User exists already!".to_string()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(payload.password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .to_string();

    user::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(payload.email.clone()),
        name: Set(payload.name),
        password: Set(password_hash),
        created_at: Set(chrono::Utc::now().naive_utc()),
    }
    .insert(&db)
    .await?;

    println!("Auth | POST /api/auth/signup | user={} | res=201", payload.email);

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "Created user!".to_string(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Authentication"
)]
pub async fn login(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = User::find()
        .filter(user::Column::Email.eq(&payload.email))
        .one(&db)
        .await?
        .ok_or(AppError::Unauthenticated)?;

    let parsed_hash = PasswordHash::new(&user.password)
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    if Argon2::default()
        .verify_password(payload.password.as_bytes(), &parsed_hash)
        .is_err()
    {
        println!("Auth | POST /api/auth/login | user={} | res=401", payload.email);
        return Err(AppError::Unauthenticated);
    }

    let expiration = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .as_secs() as usize
        + TOKEN_TTL_SECS;

    let claims = Claims {
        sub: user.email.clone(),
        exp: expiration,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(get_config().jwt_secret.as_ref()),
    )
    .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    println!("Auth | POST /api/auth/login | user={} | res=200", user.email);

    Ok(Json(LoginResponse {
        token,
        expires_in: TOKEN_TTL_SECS,
    }))
}
