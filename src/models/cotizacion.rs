//! Modelo de cotización

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::estado::normalizar_clave;

/// Estado del ciclo de vida de una cotización
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstadoCotizacion {
    Pendiente,
    Aprobada,
    Rechazada,
    SinEstado,
}

impl EstadoCotizacion {
    pub const TODOS: [EstadoCotizacion; 4] = [
        EstadoCotizacion::Pendiente,
        EstadoCotizacion::Aprobada,
        EstadoCotizacion::Rechazada,
        EstadoCotizacion::SinEstado,
    ];

    /// Misma regla de clasificación que los estados de flota:
    /// insensible a mayúsculas, espacios o guiones bajos
    pub fn clasificar(crudo: Option<&str>) -> Self {
        let clave = match crudo {
            Some(s) => normalizar_clave(s),
            None => return EstadoCotizacion::SinEstado,
        };
        match clave.as_str() {
            "pendiente" | "pending" => EstadoCotizacion::Pendiente,
            "aprobada" | "aprobado" | "approved" => EstadoCotizacion::Aprobada,
            "rechazada" | "rechazado" | "rejected" => EstadoCotizacion::Rechazada,
            _ => EstadoCotizacion::SinEstado,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoCotizacion::Pendiente => "pendiente",
            EstadoCotizacion::Aprobada => "aprobada",
            EstadoCotizacion::Rechazada => "rechazada",
            EstadoCotizacion::SinEstado => "sin_estado",
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Cotizacion {
    pub id: Uuid,
    pub cliente_id: Option<Uuid>,
    pub origen: String,
    pub destino: String,
    pub precio: f64,
    pub estado: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Cotizacion {
    pub fn estado_clasificado(&self) -> EstadoCotizacion {
        EstadoCotizacion::clasificar(self.estado.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clasificar_cotizacion() {
        assert_eq!(EstadoCotizacion::clasificar(Some("Aprobada")), EstadoCotizacion::Aprobada);
        assert_eq!(EstadoCotizacion::clasificar(Some("PENDIENTE")), EstadoCotizacion::Pendiente);
        assert_eq!(EstadoCotizacion::clasificar(Some("otra cosa")), EstadoCotizacion::SinEstado);
        assert_eq!(EstadoCotizacion::clasificar(None), EstadoCotizacion::SinEstado);
    }
}
