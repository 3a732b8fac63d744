use axum::{middleware, Router};

use crate::middleware::auth::auth_middleware;
use crate::state::AppState;

pub mod auth_routes;
pub mod camion_routes;
pub mod cliente_routes;
pub mod cotizacion_routes;
pub mod dashboard_routes;
pub mod motorista_routes;
pub mod viaje_routes;

/// Router completo de `/api`: las rutas de auth son públicas, los
/// recursos quedan detrás del middleware de JWT
pub fn create_api_router(state: AppState) -> Router<AppState> {
    let protegidas = Router::new()
        .nest("/camiones", camion_routes::create_camion_router())
        .nest("/motoristas", motorista_routes::create_motorista_router())
        .nest("/clientes", cliente_routes::create_cliente_router())
        .nest("/cotizaciones", cotizacion_routes::create_cotizacion_router())
        .nest("/viajes", viaje_routes::create_viaje_router())
        .nest("/dashboard", dashboard_routes::create_dashboard_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .nest("/auth", auth_routes::create_auth_router(state))
        .merge(protegidas)
}
