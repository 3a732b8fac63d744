use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::cliente::Cliente;

// Request para crear un cliente
#[derive(Debug, Deserialize)]
pub struct CreateClienteRequest {
    pub nombre: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub estado: Option<String>,
}

// Request para actualizar un cliente
#[derive(Debug, Deserialize)]
pub struct UpdateClienteRequest {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub estado: Option<String>,
}

// Response de cliente
#[derive(Debug, Serialize)]
pub struct ClienteResponse {
    pub id: Uuid,
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub estado: Option<String>,
    pub estado_clave: String,
    pub created_at: DateTime<Utc>,
}

impl From<Cliente> for ClienteResponse {
    fn from(cliente: Cliente) -> Self {
        let clasificado = cliente.estado_clasificado();
        Self {
            id: cliente.id,
            nombre: cliente.nombre,
            email: cliente.email,
            telefono: cliente.telefono,
            direccion: cliente.direccion,
            estado: cliente.estado,
            estado_clave: clasificado.as_str().to_string(),
            created_at: cliente.created_at,
        }
    }
}
