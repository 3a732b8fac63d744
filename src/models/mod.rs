//! Modelos de dominio

pub mod auth;
pub mod camion;
pub mod cliente;
pub mod cotizacion;
pub mod estado;
pub mod motorista;
pub mod registro;
pub mod viaje;
