use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::cotizacion::Cotizacion;

// Request para crear una cotización
#[derive(Debug, Deserialize)]
pub struct CreateCotizacionRequest {
    pub cliente_id: Option<Uuid>,
    pub origen: String,
    pub destino: String,
    pub precio: f64,
    pub estado: Option<String>,
}

// Request para actualizar una cotización
#[derive(Debug, Deserialize)]
pub struct UpdateCotizacionRequest {
    pub cliente_id: Option<Uuid>,
    pub origen: Option<String>,
    pub destino: Option<String>,
    pub precio: Option<f64>,
    pub estado: Option<String>,
}

// Response de cotización
#[derive(Debug, Serialize)]
pub struct CotizacionResponse {
    pub id: Uuid,
    pub cliente_id: Option<Uuid>,
    pub origen: String,
    pub destino: String,
    pub precio: f64,
    pub estado: Option<String>,
    pub estado_clave: String,
    pub created_at: DateTime<Utc>,
}

impl From<Cotizacion> for CotizacionResponse {
    fn from(cotizacion: Cotizacion) -> Self {
        let clasificado = cotizacion.estado_clasificado();
        Self {
            id: cotizacion.id,
            cliente_id: cotizacion.cliente_id,
            origen: cotizacion.origen,
            destino: cotizacion.destino,
            precio: cotizacion.precio,
            estado: cotizacion.estado,
            estado_clave: clasificado.as_str().to_string(),
            created_at: cotizacion.created_at,
        }
    }
}
