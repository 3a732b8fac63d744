use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::dashboard_controller::{DashboardController, ResumenDashboard};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/resumen", get(resumen))
}

async fn resumen(State(state): State<AppState>) -> Result<Json<ResumenDashboard>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.resumen().await?;
    Ok(Json(response))
}
