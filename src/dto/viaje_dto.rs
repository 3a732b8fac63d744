use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::viaje::Viaje;

// Request para crear un viaje
#[derive(Debug, Deserialize)]
pub struct CreateViajeRequest {
    pub cotizacion_id: Option<Uuid>,
    pub camion_id: Option<Uuid>,
    pub motorista_id: Option<Uuid>,
    pub origen: String,
    pub destino: String,
    pub estado: Option<String>,
    pub fecha_salida: Option<DateTime<Utc>>,
}

// Request para actualizar un viaje
#[derive(Debug, Deserialize)]
pub struct UpdateViajeRequest {
    pub cotizacion_id: Option<Uuid>,
    pub camion_id: Option<Uuid>,
    pub motorista_id: Option<Uuid>,
    pub origen: Option<String>,
    pub destino: Option<String>,
    pub estado: Option<String>,
    pub fecha_salida: Option<DateTime<Utc>>,
}

// Response de viaje
#[derive(Debug, Serialize)]
pub struct ViajeResponse {
    pub id: Uuid,
    pub cotizacion_id: Option<Uuid>,
    pub camion_id: Option<Uuid>,
    pub motorista_id: Option<Uuid>,
    pub origen: String,
    pub destino: String,
    pub estado: Option<String>,
    pub estado_clave: String,
    pub fecha_salida: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Viaje> for ViajeResponse {
    fn from(viaje: Viaje) -> Self {
        let clasificado = viaje.estado_clasificado();
        Self {
            id: viaje.id,
            cotizacion_id: viaje.cotizacion_id,
            camion_id: viaje.camion_id,
            motorista_id: viaje.motorista_id,
            origen: viaje.origen,
            destino: viaje.destino,
            estado: viaje.estado,
            estado_clave: clasificado.as_str().to_string(),
            fecha_salida: viaje.fecha_salida,
            created_at: viaje.created_at,
        }
    }
}
