use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::motorista::Motorista;

// Request para crear un motorista
#[derive(Debug, Deserialize)]
pub struct CreateMotoristaRequest {
    pub nombre: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub licencia: Option<String>,
    pub estado: Option<String>,
    pub imagen: Option<String>,
}

// Request para actualizar un motorista
#[derive(Debug, Deserialize)]
pub struct UpdateMotoristaRequest {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub licencia: Option<String>,
    pub estado: Option<String>,
    pub imagen: Option<String>,
}

// Response de motorista
#[derive(Debug, Serialize)]
pub struct MotoristaResponse {
    pub id: Uuid,
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub licencia: Option<String>,
    pub estado: Option<String>,
    pub estado_clave: String,
    pub estado_color: String,
    pub imagen: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Motorista> for MotoristaResponse {
    fn from(motorista: Motorista) -> Self {
        let clasificado = motorista.estado_clasificado();
        Self {
            id: motorista.id,
            nombre: motorista.nombre,
            email: motorista.email,
            telefono: motorista.telefono,
            licencia: motorista.licencia,
            estado: motorista.estado,
            estado_clave: clasificado.as_str().to_string(),
            estado_color: clasificado.color().to_string(),
            imagen: motorista.imagen,
            created_at: motorista.created_at,
        }
    }
}
