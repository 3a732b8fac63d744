use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::camion::Camion;

// Request para crear un camión
#[derive(Debug, Deserialize)]
pub struct CreateCamionRequest {
    pub nombre: Option<String>,
    pub placa: String,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub estado: Option<String>,
    pub kilometraje: Option<f64>,
    pub imagen: Option<String>,
}

// Request para actualizar un camión
#[derive(Debug, Deserialize)]
pub struct UpdateCamionRequest {
    pub nombre: Option<String>,
    pub placa: Option<String>,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub estado: Option<String>,
    pub kilometraje: Option<f64>,
    pub imagen: Option<String>,
}

// Response de camión, con el estado ya clasificado
#[derive(Debug, Serialize)]
pub struct CamionResponse {
    pub id: Uuid,
    pub nombre: Option<String>,
    pub placa: String,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub estado: Option<String>,
    pub estado_clave: String,
    pub estado_color: String,
    pub kilometraje: f64,
    pub imagen: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Camion> for CamionResponse {
    fn from(camion: Camion) -> Self {
        let clasificado = camion.estado_clasificado();
        Self {
            id: camion.id,
            nombre: camion.nombre,
            placa: camion.placa,
            marca: camion.marca,
            modelo: camion.modelo,
            estado: camion.estado,
            estado_clave: clasificado.as_str().to_string(),
            estado_color: clasificado.color().to_string(),
            kilometraje: camion.kilometraje,
            imagen: camion.imagen,
            created_at: camion.created_at,
        }
    }
}
