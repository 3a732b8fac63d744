//! API de gestión de flota y logística
//!
//! Servidor HTTP que administra camiones, motoristas, clientes,
//! cotizaciones y viajes, con un pipeline común de normalización,
//! búsqueda, filtrado y conteo por estado, y un cliente de
//! sincronización contra servicios remotos.

pub mod clients;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
