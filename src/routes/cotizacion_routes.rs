use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::cotizacion_controller::CotizacionController;
use crate::dto::api_response::{ApiResponse, ListadoResponse};
use crate::dto::cotizacion_dto::{
    CotizacionResponse, CreateCotizacionRequest, UpdateCotizacionRequest,
};
use crate::routes::camion_routes::ListadoParams;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_cotizacion_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cotizacion))
        .route("/", get(list_cotizaciones))
        .route("/:id", get(get_cotizacion))
        .route("/:id", put(update_cotizacion))
        .route("/:id", delete(delete_cotizacion))
}

async fn create_cotizacion(
    State(state): State<AppState>,
    Json(request): Json<CreateCotizacionRequest>,
) -> Result<Json<ApiResponse<CotizacionResponse>>, AppError> {
    let controller = CotizacionController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_cotizaciones(
    State(state): State<AppState>,
    Query(params): Query<ListadoParams>,
) -> Result<Json<ListadoResponse<CotizacionResponse>>, AppError> {
    let controller = CotizacionController::new(state.pool.clone());
    let response = controller
        .list(
            params.buscar.as_deref().unwrap_or(""),
            params.estado.as_deref().unwrap_or(""),
        )
        .await?;
    Ok(Json(response))
}

async fn get_cotizacion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CotizacionResponse>, AppError> {
    let controller = CotizacionController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_cotizacion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCotizacionRequest>,
) -> Result<Json<ApiResponse<CotizacionResponse>>, AppError> {
    let controller = CotizacionController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_cotizacion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = CotizacionController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Cotización eliminada exitosamente"
    })))
}
