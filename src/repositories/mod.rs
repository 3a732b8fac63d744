//! Repositorios de acceso a datos

pub mod camion_repository;
pub mod cliente_repository;
pub mod cotizacion_repository;
pub mod motorista_repository;
pub mod usuario_repository;
pub mod viaje_repository;
