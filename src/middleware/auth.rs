use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::config::get_config;
use crate::error::AppError;

/// The authenticated caller, stamped onto every record they create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub email: String,
}

#[derive(Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

pub async fn auth_middleware(mut req: Request, next: Next) -> Result<Response, AppError> {
    // Extract Authorization header
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthenticated)?;

    // Check Bearer prefix
    if !auth_header.starts_with("Bearer ") {
        return Err(AppError::Unauthenticated);
    }

    let token = &auth_header[7..]; // Remove "Bearer " prefix

    // Decode and validate JWT
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(get_config().jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|e| {
        eprintln!("JWT decode error: {}", e);
        AppError::Unauthenticated
    })?;

    let auth_user = AuthUser {
        email: token_data.claims.sub,
    };

    // Insert auth user into request extensions
    req.extensions_mut().insert(auth_user);

    Ok(next.run(req).await)
}
