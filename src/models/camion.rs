//! Modelo de camión

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::estado::EstadoFlota;
use crate::models::registro::RegistroFlota;
use crate::services::normalizador::NOMBRE_POR_DEFECTO;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Camion {
    pub id: Uuid,
    pub nombre: Option<String>,
    pub placa: String,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub estado: Option<String>,
    pub kilometraje: f64,
    pub imagen: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Camion {
    /// Estado clasificado del camión
    pub fn estado_clasificado(&self) -> EstadoFlota {
        EstadoFlota::clasificar(self.estado.as_deref())
    }

    /// Proyección al registro canónico usado por el pipeline de filtrado
    pub fn como_registro(&self) -> RegistroFlota {
        RegistroFlota {
            id: self.id.to_string(),
            nombre: self
                .nombre
                .clone()
                .unwrap_or_else(|| NOMBRE_POR_DEFECTO.to_string()),
            estado: self.estado_clasificado(),
            estado_crudo: self.estado.clone().unwrap_or_default(),
            placa: self.placa.clone(),
            marca: self.marca.clone().unwrap_or_default(),
            modelo: self.modelo.clone().unwrap_or_default(),
            email: String::new(),
            telefono: String::new(),
            direccion: String::new(),
            imagen: self.imagen.clone(),
        }
    }
}
