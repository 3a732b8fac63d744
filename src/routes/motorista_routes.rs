use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::motorista_controller::MotoristaController;
use crate::dto::api_response::{ApiResponse, ListadoResponse};
use crate::dto::motorista_dto::{
    CreateMotoristaRequest, MotoristaResponse, UpdateMotoristaRequest,
};
use crate::routes::camion_routes::ListadoParams;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_motorista_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_motorista))
        .route("/", get(list_motoristas))
        .route("/:id", get(get_motorista))
        .route("/:id", put(update_motorista))
        .route("/:id", delete(delete_motorista))
}

async fn create_motorista(
    State(state): State<AppState>,
    Json(request): Json<CreateMotoristaRequest>,
) -> Result<Json<ApiResponse<MotoristaResponse>>, AppError> {
    let controller = MotoristaController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_motoristas(
    State(state): State<AppState>,
    Query(params): Query<ListadoParams>,
) -> Result<Json<ListadoResponse<MotoristaResponse>>, AppError> {
    let controller = MotoristaController::new(state.pool.clone());
    let response = controller.list(&params.como_filtro()).await?;
    Ok(Json(response))
}

async fn get_motorista(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MotoristaResponse>, AppError> {
    let controller = MotoristaController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_motorista(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMotoristaRequest>,
) -> Result<Json<ApiResponse<MotoristaResponse>>, AppError> {
    let controller = MotoristaController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_motorista(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = MotoristaController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Motorista eliminado exitosamente"
    })))
}
