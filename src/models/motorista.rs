//! Modelo de motorista

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::estado::EstadoFlota;
use crate::models::registro::RegistroFlota;
use crate::services::normalizador::NOMBRE_POR_DEFECTO;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Motorista {
    pub id: Uuid,
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub licencia: Option<String>,
    pub estado: Option<String>,
    pub imagen: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Motorista {
    pub fn estado_clasificado(&self) -> EstadoFlota {
        EstadoFlota::clasificar(self.estado.as_deref())
    }

    pub fn como_registro(&self) -> RegistroFlota {
        RegistroFlota {
            id: self.id.to_string(),
            nombre: self
                .nombre
                .clone()
                .unwrap_or_else(|| NOMBRE_POR_DEFECTO.to_string()),
            estado: self.estado_clasificado(),
            estado_crudo: self.estado.clone().unwrap_or_default(),
            // La licencia cumple el papel de placa en la búsqueda
            placa: self.licencia.clone().unwrap_or_default(),
            marca: String::new(),
            modelo: String::new(),
            email: self.email.clone().unwrap_or_default(),
            telefono: self.telefono.clone().unwrap_or_default(),
            direccion: String::new(),
            imagen: self.imagen.clone(),
        }
    }
}
