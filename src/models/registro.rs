//! Registro canónico de flota
//!
//! Forma normalizada que comparten camiones, motoristas y clientes una
//! vez resueltos los alias de campos del backend.

use serde::Serialize;

use crate::models::estado::EstadoFlota;

/// Registro canónico con todos los campos resueltos
///
/// Siempre está completamente poblado: los campos sin valor en el
/// registro crudo llevan su valor por defecto documentado (ver
/// `services::normalizador`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistroFlota {
    pub id: String,
    pub nombre: String,
    pub estado: EstadoFlota,
    /// Valor crudo del estado tal como llegó del backend
    pub estado_crudo: String,
    pub placa: String,
    pub marca: String,
    pub modelo: String,
    pub email: String,
    pub telefono: String,
    pub direccion: String,
    pub imagen: Option<String>,
}

impl RegistroFlota {
    /// Campos de texto sobre los que aplica la búsqueda, más el
    /// compuesto "marca modelo"
    pub fn campos_buscables(&self) -> Vec<String> {
        let mut campos = vec![
            self.nombre.clone(),
            self.placa.clone(),
            self.marca.clone(),
            self.modelo.clone(),
            self.email.clone(),
            self.telefono.clone(),
            self.direccion.clone(),
        ];
        campos.push(format!("{} {}", self.marca, self.modelo));
        campos
    }
}
