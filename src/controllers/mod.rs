//! Controladores de negocio
//!
//! Cada controlador encapsula la validación y la lógica de listado
//! (búsqueda, filtro y conteos) sobre su repositorio.

pub mod auth_controller;
pub mod camion_controller;
pub mod cliente_controller;
pub mod cotizacion_controller;
pub mod dashboard_controller;
pub mod motorista_controller;
pub mod viaje_controller;
