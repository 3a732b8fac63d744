use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::viaje_controller::ViajeController;
use crate::dto::api_response::{ApiResponse, ListadoResponse};
use crate::dto::viaje_dto::{CreateViajeRequest, UpdateViajeRequest, ViajeResponse};
use crate::routes::camion_routes::ListadoParams;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_viaje_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_viaje))
        .route("/", get(list_viajes))
        .route("/:id", get(get_viaje))
        .route("/:id", put(update_viaje))
        .route("/:id", delete(delete_viaje))
}

async fn create_viaje(
    State(state): State<AppState>,
    Json(request): Json<CreateViajeRequest>,
) -> Result<Json<ApiResponse<ViajeResponse>>, AppError> {
    let controller = ViajeController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_viajes(
    State(state): State<AppState>,
    Query(params): Query<ListadoParams>,
) -> Result<Json<ListadoResponse<ViajeResponse>>, AppError> {
    let controller = ViajeController::new(state.pool.clone());
    let response = controller
        .list(
            params.buscar.as_deref().unwrap_or(""),
            params.estado.as_deref().unwrap_or(""),
        )
        .await?;
    Ok(Json(response))
}

async fn get_viaje(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ViajeResponse>, AppError> {
    let controller = ViajeController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_viaje(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateViajeRequest>,
) -> Result<Json<ApiResponse<ViajeResponse>>, AppError> {
    let controller = ViajeController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_viaje(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ViajeController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Viaje eliminado exitosamente"
    })))
}
