//! Sesión del cliente de sincronización
//!
//! Los frontends históricos guardaban el token bajo varias claves
//! (`userToken`, `token`) además de la canónica `authToken`. Aquí la
//! sesión es un objeto explícito con una sola clave canónica y
//! migración de las claves legadas al primer acceso.

use std::collections::HashMap;
use std::sync::Mutex;

/// Clave canónica del token en el almacenamiento del dispositivo
pub const CLAVE_TOKEN: &str = "authToken";

/// Claves legadas que todavía pueden existir en dispositivos viejos
pub const CLAVES_LEGADAS: [&str; 2] = ["userToken", "token"];

/// Valor literal que los frontends usaban como "sin auth real";
/// nunca se manda en el header `Authorization`
pub const TOKEN_FICTICIO: &str = "dummy-auth-token";

/// Almacenamiento clave-valor del dispositivo
pub trait TokenStorage: Send + Sync {
    fn leer(&self, clave: &str) -> Option<String>;
    fn escribir(&self, clave: &str, valor: &str);
    fn borrar(&self, clave: &str);
}

/// Almacenamiento en memoria, para pruebas y para el modo servidor
#[derive(Default)]
pub struct MemoriaStorage {
    datos: Mutex<HashMap<String, String>>,
}

impl MemoriaStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoriaStorage {
    fn leer(&self, clave: &str) -> Option<String> {
        self.datos.lock().ok()?.get(clave).cloned()
    }

    fn escribir(&self, clave: &str, valor: &str) {
        if let Ok(mut datos) = self.datos.lock() {
            datos.insert(clave.to_string(), valor.to_string());
        }
    }

    fn borrar(&self, clave: &str) {
        if let Ok(mut datos) = self.datos.lock() {
            datos.remove(clave);
        }
    }
}

/// Configuración de sesión inyectada al cliente de sincronización
pub struct SessionConfig {
    storage: Box<dyn TokenStorage>,
}

impl SessionConfig {
    pub fn new(storage: Box<dyn TokenStorage>) -> Self {
        Self { storage }
    }

    pub fn en_memoria() -> Self {
        Self::new(Box::new(MemoriaStorage::new()))
    }

    /// Token actual, migrando claves legadas a la canónica
    ///
    /// El valor ficticio se trata como ausencia de token.
    pub fn token(&self) -> Option<String> {
        let valor = match self.storage.leer(CLAVE_TOKEN) {
            Some(v) => Some(v),
            None => self.migrar_clave_legada(),
        };

        valor.filter(|v| !v.is_empty() && v != TOKEN_FICTICIO)
    }

    /// Valor listo para el header `Authorization`, si hay auth real
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {}", t))
    }

    pub fn guardar_token(&self, token: &str) {
        self.storage.escribir(CLAVE_TOKEN, token);
    }

    /// Borrar el token bajo la clave canónica y todas las legadas
    pub fn limpiar(&self) {
        self.storage.borrar(CLAVE_TOKEN);
        for clave in CLAVES_LEGADAS {
            self.storage.borrar(clave);
        }
    }

    fn migrar_clave_legada(&self) -> Option<String> {
        for clave in CLAVES_LEGADAS {
            if let Some(valor) = self.storage.leer(clave) {
                log::info!("🔑 Migrando token de la clave legada '{}'", clave);
                self.storage.escribir(CLAVE_TOKEN, &valor);
                self.storage.borrar(clave);
                return Some(valor);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migracion_de_clave_legada() {
        let storage = MemoriaStorage::new();
        storage.escribir("userToken", "abc123");
        let sesion = SessionConfig::new(Box::new(storage));

        assert_eq!(sesion.token(), Some("abc123".to_string()));
        // Segunda lectura ya viene de la clave canónica
        assert_eq!(sesion.token(), Some("abc123".to_string()));
    }

    #[test]
    fn test_canonica_gana_sobre_legada() {
        let storage = MemoriaStorage::new();
        storage.escribir("authToken", "canonico");
        storage.escribir("token", "legado");
        let sesion = SessionConfig::new(Box::new(storage));

        assert_eq!(sesion.token(), Some("canonico".to_string()));
    }

    #[test]
    fn test_token_ficticio_es_sin_auth() {
        let sesion = SessionConfig::en_memoria();
        sesion.guardar_token(TOKEN_FICTICIO);
        assert_eq!(sesion.token(), None);
        assert_eq!(sesion.bearer(), None);
    }

    #[test]
    fn test_bearer() {
        let sesion = SessionConfig::en_memoria();
        sesion.guardar_token("jwt-real");
        assert_eq!(sesion.bearer(), Some("Bearer jwt-real".to_string()));
    }

    #[test]
    fn test_limpiar_borra_todas_las_claves() {
        let storage = MemoriaStorage::new();
        storage.escribir("authToken", "a");
        storage.escribir("userToken", "b");
        storage.escribir("token", "c");
        let sesion = SessionConfig::new(Box::new(storage));

        sesion.limpiar();
        assert_eq!(sesion.token(), None);
    }
}
