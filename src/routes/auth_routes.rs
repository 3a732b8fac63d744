use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::api_response::ApiResponse;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, UsuarioResponse};
use crate::middleware::auth::auth_middleware;
use crate::models::auth::JwtClaims;
use crate::state::AppState;
use crate::utils::cookies::{directivas_limpieza, COOKIE_SESION};
use crate::utils::errors::AppError;

pub fn create_auth_router(state: AppState) -> Router<AppState> {
    let protegidas = Router::new()
        .route("/me", get(me))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .merge(protegidas)
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    let controller = AuthController::new(
        state.pool.clone(),
        &state.config.jwt_secret,
        state.config.jwt_expiration_hours,
    );
    let response = controller.login(request).await?;
    Ok(Json(response))
}

/// Cierra la sesión expirando la cookie en todas sus variantes
/// históricas de `Path` y `SameSite`
async fn logout() -> Result<(HeaderMap, Json<serde_json::Value>), AppError> {
    let mut headers = HeaderMap::new();
    for directiva in directivas_limpieza(COOKIE_SESION) {
        let valor = HeaderValue::from_str(&directiva)
            .map_err(|e| AppError::Internal(format!("Directiva de cookie inválida: {}", e)))?;
        headers.append(header::SET_COOKIE, valor);
    }

    Ok((
        headers,
        Json(serde_json::json!({
            "success": true,
            "message": "Sesión cerrada exitosamente"
        })),
    ))
}

async fn me(
    State(state): State<AppState>,
    Extension(claims): Extension<JwtClaims>,
) -> Result<Json<UsuarioResponse>, AppError> {
    let controller = AuthController::new(
        state.pool.clone(),
        &state.config.jwt_secret,
        state.config.jwt_expiration_hours,
    );
    let response = controller.me(&claims).await?;
    Ok(Json(response))
}
