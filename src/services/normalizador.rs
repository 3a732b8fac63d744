//! Normalización de campos
//!
//! El backend histórico mezcla nombres de campos en español e inglés
//! (`nombre`/`name`, `placa`/`licensePlate`, `estado`/`state`). Este
//! módulo resuelve cada campo canónico contra una lista ordenada de
//! alias: gana el primer alias con valor definido y no nulo; si ninguno
//! aplica se usa el valor por defecto documentado.

use serde_json::Value;

use crate::models::estado::EstadoFlota;
use crate::models::registro::RegistroFlota;

/// Nombre por defecto cuando el registro no trae ninguno
pub const NOMBRE_POR_DEFECTO: &str = "Sin nombre";

const ALIAS_ID: &[&str] = &["id", "_id", "uuid"];
const ALIAS_NOMBRE: &[&str] = &["nombre", "name", "nombreCompleto", "full_name", "razonSocial"];
const ALIAS_ESTADO: &[&str] = &["estado", "status", "state", "estatus"];
const ALIAS_PLACA: &[&str] = &["placa", "licensePlate", "license_plate", "matricula", "patente"];
const ALIAS_MARCA: &[&str] = &["marca", "brand"];
const ALIAS_MODELO: &[&str] = &["modelo", "model"];
const ALIAS_EMAIL: &[&str] = &["email", "correo", "mail"];
const ALIAS_TELEFONO: &[&str] = &["telefono", "phone", "celular", "tel"];
const ALIAS_DIRECCION: &[&str] = &["direccion", "address", "domicilio"];
const ALIAS_IMAGEN: &[&str] = &["imagen", "image", "foto", "photo", "imageUrl"];

/// Normalizar un registro crudo a la forma canónica
///
/// Función total: nunca falla. Un valor que no sea objeto JSON produce
/// un registro con todos los valores por defecto.
pub fn normalizar_registro(crudo: &Value) -> RegistroFlota {
    let estado_crudo = campo_texto(crudo, ALIAS_ESTADO, "");
    let estado = if estado_crudo.is_empty() {
        EstadoFlota::SinEstado
    } else {
        EstadoFlota::clasificar(Some(&estado_crudo))
    };

    RegistroFlota {
        id: campo_texto(crudo, ALIAS_ID, ""),
        nombre: campo_texto(crudo, ALIAS_NOMBRE, NOMBRE_POR_DEFECTO),
        estado,
        estado_crudo,
        placa: campo_texto(crudo, ALIAS_PLACA, ""),
        marca: campo_texto(crudo, ALIAS_MARCA, ""),
        modelo: campo_texto(crudo, ALIAS_MODELO, ""),
        email: campo_texto(crudo, ALIAS_EMAIL, ""),
        telefono: campo_texto(crudo, ALIAS_TELEFONO, ""),
        direccion: campo_texto(crudo, ALIAS_DIRECCION, ""),
        imagen: campo_opcional(crudo, ALIAS_IMAGEN),
    }
}

/// Primer alias con valor definido y no nulo
fn campo<'a>(crudo: &'a Value, alias: &[&str]) -> Option<&'a Value> {
    let objeto = crudo.as_object()?;
    for clave in alias {
        match objeto.get(*clave) {
            Some(Value::Null) | None => continue,
            Some(valor) => return Some(valor),
        }
    }
    None
}

/// Resolver un campo de texto, convirtiendo números a texto si hace falta
fn campo_texto(crudo: &Value, alias: &[&str], por_defecto: &str) -> String {
    match campo(crudo, alias) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => por_defecto.to_string(),
    }
}

fn campo_opcional(crudo: &Value, alias: &[&str]) -> Option<String> {
    match campo(crudo, alias) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_alias_con_valor_gana() {
        let crudo = json!({ "name": "Camión 7", "licensePlate": "ABC-123" });
        let registro = normalizar_registro(&crudo);
        assert_eq!(registro.nombre, "Camión 7");
        assert_eq!(registro.placa, "ABC-123");
    }

    #[test]
    fn test_orden_de_alias() {
        // "nombre" va antes que "name" en la lista de alias
        let crudo = json!({ "nombre": "Primero", "name": "Segundo" });
        assert_eq!(normalizar_registro(&crudo).nombre, "Primero");
    }

    #[test]
    fn test_nulo_no_cuenta_como_definido() {
        let crudo = json!({ "nombre": null, "name": "Desde alias" });
        assert_eq!(normalizar_registro(&crudo).nombre, "Desde alias");
    }

    #[test]
    fn test_defecto_documentado() {
        let registro = normalizar_registro(&json!({}));
        assert_eq!(registro.nombre, NOMBRE_POR_DEFECTO);
        assert_eq!(registro.placa, "");
        assert_eq!(registro.estado, EstadoFlota::SinEstado);
        assert_eq!(registro.imagen, None);
    }

    #[test]
    fn test_nunca_falla_con_valores_raros() {
        for crudo in [json!(null), json!(42), json!("texto"), json!([1, 2, 3])] {
            let registro = normalizar_registro(&crudo);
            assert_eq!(registro.nombre, NOMBRE_POR_DEFECTO);
        }
    }

    #[test]
    fn test_numero_se_convierte_a_texto() {
        let crudo = json!({ "telefono": 555123456 });
        assert_eq!(normalizar_registro(&crudo).telefono, "555123456");
    }

    #[test]
    fn test_estado_crudo_se_conserva() {
        let crudo = json!({ "status": "En_Ruta" });
        let registro = normalizar_registro(&crudo);
        assert_eq!(registro.estado_crudo, "En_Ruta");
        assert_eq!(registro.estado, EstadoFlota::EnRuta);
    }

    #[test]
    fn test_imagen_vacia_es_none() {
        let crudo = json!({ "imagen": "   " });
        assert_eq!(normalizar_registro(&crudo).imagen, None);
    }
}
