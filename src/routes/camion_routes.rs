use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::camion_controller::CamionController;
use crate::dto::api_response::{ApiResponse, ListadoResponse};
use crate::dto::camion_dto::{CamionResponse, CreateCamionRequest, UpdateCamionRequest};
use crate::services::filtro::{FiltroActivo, FiltroEstado};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_camion_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_camion))
        .route("/", get(list_camiones))
        .route("/:id", get(get_camion))
        .route("/:id", put(update_camion))
        .route("/:id", delete(delete_camion))
}

/// Parámetros de listado que manda la UI
#[derive(Debug, Deserialize)]
pub struct ListadoParams {
    pub buscar: Option<String>,
    pub estado: Option<String>,
}

impl ListadoParams {
    pub fn como_filtro(&self) -> FiltroActivo {
        FiltroActivo {
            termino: self.buscar.clone().unwrap_or_default(),
            estado: FiltroEstado::parse(self.estado.as_deref().unwrap_or("")),
            ..Default::default()
        }
    }
}

async fn create_camion(
    State(state): State<AppState>,
    Json(request): Json<CreateCamionRequest>,
) -> Result<Json<ApiResponse<CamionResponse>>, AppError> {
    let controller = CamionController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_camiones(
    State(state): State<AppState>,
    Query(params): Query<ListadoParams>,
) -> Result<Json<ListadoResponse<CamionResponse>>, AppError> {
    let controller = CamionController::new(state.pool.clone());
    let response = controller.list(&params.como_filtro()).await?;
    Ok(Json(response))
}

async fn get_camion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CamionResponse>, AppError> {
    let controller = CamionController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_camion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCamionRequest>,
) -> Result<Json<ApiResponse<CamionResponse>>, AppError> {
    let controller = CamionController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_camion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = CamionController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Camión eliminado exitosamente"
    })))
}
