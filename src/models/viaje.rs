//! Modelo de viaje
//!
//! Un viaje atraviesa un ciclo de vida de estados propio, distinto de
//! los estados de flota pero clasificado con la misma regla.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::estado::normalizar_clave;

/// Estado del ciclo de vida de un viaje
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstadoViaje {
    Pendiente,
    EnCurso,
    Completado,
    Cancelado,
    SinEstado,
}

impl EstadoViaje {
    pub const TODOS: [EstadoViaje; 5] = [
        EstadoViaje::Pendiente,
        EstadoViaje::EnCurso,
        EstadoViaje::Completado,
        EstadoViaje::Cancelado,
        EstadoViaje::SinEstado,
    ];

    pub fn clasificar(crudo: Option<&str>) -> Self {
        let clave = match crudo {
            Some(s) => normalizar_clave(s),
            None => return EstadoViaje::SinEstado,
        };
        match clave.as_str() {
            "pendiente" | "pending" | "programado" => EstadoViaje::Pendiente,
            "en curso" | "en progreso" | "in progress" => EstadoViaje::EnCurso,
            "completado" | "finalizado" | "completed" => EstadoViaje::Completado,
            "cancelado" | "cancelled" | "canceled" => EstadoViaje::Cancelado,
            _ => EstadoViaje::SinEstado,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoViaje::Pendiente => "pendiente",
            EstadoViaje::EnCurso => "en_curso",
            EstadoViaje::Completado => "completado",
            EstadoViaje::Cancelado => "cancelado",
            EstadoViaje::SinEstado => "sin_estado",
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Viaje {
    pub id: Uuid,
    pub cotizacion_id: Option<Uuid>,
    pub camion_id: Option<Uuid>,
    pub motorista_id: Option<Uuid>,
    pub origen: String,
    pub destino: String,
    pub estado: Option<String>,
    pub fecha_salida: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Viaje {
    pub fn estado_clasificado(&self) -> EstadoViaje {
        EstadoViaje::clasificar(self.estado.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clasificar_viaje() {
        assert_eq!(EstadoViaje::clasificar(Some("en_curso")), EstadoViaje::EnCurso);
        assert_eq!(EstadoViaje::clasificar(Some("En Curso")), EstadoViaje::EnCurso);
        assert_eq!(EstadoViaje::clasificar(Some("COMPLETADO")), EstadoViaje::Completado);
        assert_eq!(EstadoViaje::clasificar(Some("???")), EstadoViaje::SinEstado);
        assert_eq!(EstadoViaje::clasificar(None), EstadoViaje::SinEstado);
    }
}
