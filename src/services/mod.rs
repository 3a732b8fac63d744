//! Servicios de dominio

pub mod busqueda;
pub mod filtro;
pub mod jwt_service;
pub mod normalizador;
