use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::cliente_controller::ClienteController;
use crate::dto::api_response::{ApiResponse, ListadoResponse};
use crate::dto::cliente_dto::{ClienteResponse, CreateClienteRequest, UpdateClienteRequest};
use crate::routes::camion_routes::ListadoParams;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_cliente_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cliente))
        .route("/", get(list_clientes))
        .route("/:id", get(get_cliente))
        .route("/:id", put(update_cliente))
        .route("/:id", delete(delete_cliente))
}

async fn create_cliente(
    State(state): State<AppState>,
    Json(request): Json<CreateClienteRequest>,
) -> Result<Json<ApiResponse<ClienteResponse>>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_clientes(
    State(state): State<AppState>,
    Query(params): Query<ListadoParams>,
) -> Result<Json<ListadoResponse<ClienteResponse>>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.list(&params.como_filtro()).await?;
    Ok(Json(response))
}

async fn get_cliente(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClienteResponse>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_cliente(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateClienteRequest>,
) -> Result<Json<ApiResponse<ClienteResponse>>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_cliente(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Cliente eliminado exitosamente"
    })))
}
