//! Middleware de autenticación JWT
//!
//! Extrae el token Bearer del header `Authorization`, lo valida y
//! deja los claims disponibles en las extensions de la request.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::services::jwt_service::JwtService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|valor| valor.to_str().ok())
        .and_then(|valor| valor.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    let jwt_service = JwtService::new(&state.config.jwt_secret, state.config.jwt_expiration_hours);
    let claims = jwt_service
        .validate_token(token)
        .map_err(|_| AppError::Unauthorized("Token inválido o expirado".to_string()))?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
