//! Respuestas genéricas de la API

use std::collections::BTreeMap;

use serde::Serialize;

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}

/// Respuesta de listado: los elementos filtrados más los conteos por
/// estado sobre la lista completa
#[derive(Debug, Serialize)]
pub struct ListadoResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub conteos: BTreeMap<String, usize>,
}

impl<T> ListadoResponse<T> {
    pub fn new(data: Vec<T>, conteos: BTreeMap<String, usize>) -> Self {
        Self {
            success: true,
            data,
            conteos,
        }
    }
}
