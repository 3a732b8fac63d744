//! Estados de flota
//!
//! Este módulo define la enumeración fija de estados para los registros
//! de flota y la clasificación de estados crudos del backend.

use serde::{Deserialize, Serialize};

/// Estado clasificado de un registro de flota
///
/// Los valores crudos no reconocidos o ausentes caen siempre en
/// `SinEstado`, nunca en un error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstadoFlota {
    Disponible,
    EnRuta,
    Mantenimiento,
    NoDisponible,
    SinEstado,
}

impl EstadoFlota {
    /// Todos los estados, en el orden usado por los conteos
    pub const TODOS: [EstadoFlota; 5] = [
        EstadoFlota::Disponible,
        EstadoFlota::EnRuta,
        EstadoFlota::Mantenimiento,
        EstadoFlota::NoDisponible,
        EstadoFlota::SinEstado,
    ];

    /// Clasificar un estado crudo del backend
    ///
    /// Acepta mayúsculas/minúsculas y espacios o guiones bajos como
    /// separadores ("En Ruta", "en_ruta", "EN  RUTA").
    pub fn clasificar(crudo: Option<&str>) -> Self {
        let clave = match crudo {
            Some(s) => normalizar_clave(s),
            None => return EstadoFlota::SinEstado,
        };

        match clave.as_str() {
            "disponible" | "activo" | "available" | "active" => EstadoFlota::Disponible,
            "en ruta" | "en viaje" | "in route" | "in transit" => EstadoFlota::EnRuta,
            "mantenimiento" | "en mantenimiento" | "maintenance" => EstadoFlota::Mantenimiento,
            "no disponible" | "inactivo" | "unavailable" | "inactive" => EstadoFlota::NoDisponible,
            _ => EstadoFlota::SinEstado,
        }
    }

    /// Clave estable del estado (la misma que usa el JSON)
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoFlota::Disponible => "disponible",
            EstadoFlota::EnRuta => "en_ruta",
            EstadoFlota::Mantenimiento => "mantenimiento",
            EstadoFlota::NoDisponible => "no_disponible",
            EstadoFlota::SinEstado => "sin_estado",
        }
    }

    /// Etiqueta legible para mostrar en pantalla
    pub fn etiqueta(&self) -> &'static str {
        match self {
            EstadoFlota::Disponible => "Disponible",
            EstadoFlota::EnRuta => "En ruta",
            EstadoFlota::Mantenimiento => "Mantenimiento",
            EstadoFlota::NoDisponible => "No disponible",
            EstadoFlota::SinEstado => "Sin estado",
        }
    }

    /// Color asociado al estado; gris neutro para `SinEstado`
    pub fn color(&self) -> &'static str {
        match self {
            EstadoFlota::Disponible => "#22c55e",
            EstadoFlota::EnRuta => "#3b82f6",
            EstadoFlota::Mantenimiento => "#f59e0b",
            EstadoFlota::NoDisponible => "#ef4444",
            EstadoFlota::SinEstado => "#9ca3af",
        }
    }
}

/// Normalizar una clave de estado: minúsculas, sin espacios sobrantes,
/// guiones bajos tratados como espacios
pub fn normalizar_clave(crudo: &str) -> String {
    crudo
        .trim()
        .to_lowercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clasificar_separadores_y_mayusculas() {
        assert_eq!(EstadoFlota::clasificar(Some("en_ruta")), EstadoFlota::EnRuta);
        assert_eq!(EstadoFlota::clasificar(Some("En Ruta")), EstadoFlota::EnRuta);
        assert_eq!(EstadoFlota::clasificar(Some("EN  RUTA ")), EstadoFlota::EnRuta);
        assert_eq!(EstadoFlota::clasificar(Some("NO_DISPONIBLE")), EstadoFlota::NoDisponible);
        assert_eq!(EstadoFlota::clasificar(Some("Mantenimiento")), EstadoFlota::Mantenimiento);
    }

    #[test]
    fn test_clasificar_desconocido_es_sin_estado() {
        assert_eq!(EstadoFlota::clasificar(None), EstadoFlota::SinEstado);
        assert_eq!(EstadoFlota::clasificar(Some("")), EstadoFlota::SinEstado);
        assert_eq!(EstadoFlota::clasificar(Some("   ")), EstadoFlota::SinEstado);
        assert_eq!(EstadoFlota::clasificar(Some("quién sabe")), EstadoFlota::SinEstado);
    }

    #[test]
    fn test_sinonimos() {
        assert_eq!(EstadoFlota::clasificar(Some("available")), EstadoFlota::Disponible);
        assert_eq!(EstadoFlota::clasificar(Some("inactivo")), EstadoFlota::NoDisponible);
        assert_eq!(EstadoFlota::clasificar(Some("en viaje")), EstadoFlota::EnRuta);
    }

    #[test]
    fn test_color_neutro_para_sin_estado() {
        assert_eq!(EstadoFlota::SinEstado.color(), "#9ca3af");
        for estado in EstadoFlota::TODOS {
            assert!(estado.color().starts_with('#'));
        }
    }

    #[test]
    fn test_as_str_cubre_todos() {
        let claves: Vec<&str> = EstadoFlota::TODOS.iter().map(|e| e.as_str()).collect();
        assert_eq!(
            claves,
            vec!["disponible", "en_ruta", "mantenimiento", "no_disponible", "sin_estado"]
        );
    }
}
