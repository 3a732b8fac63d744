//! DTOs de la API

pub mod api_response;
pub mod auth_dto;
pub mod camion_dto;
pub mod cliente_dto;
pub mod cotizacion_dto;
pub mod motorista_dto;
pub mod viaje_dto;
