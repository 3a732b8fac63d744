//! Predicado de búsqueda
//!
//! Coincidencia por subcadena insensible a mayúsculas y espacios sobre
//! los campos buscables del registro canónico.

use crate::models::registro::RegistroFlota;

/// Normalizar un término de búsqueda: minúsculas, sin espacios en los
/// extremos y con los espacios internos colapsados a uno
///
/// Idempotente: `normalizar_termino(normalizar_termino(s))` devuelve lo
/// mismo que una sola pasada.
pub fn normalizar_termino(termino: &str) -> String {
    termino
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// ¿El registro coincide con el término de búsqueda?
///
/// Un término vacío (o solo espacios) coincide con todo. La misma
/// normalización se aplica al término y a cada campo candidato.
pub fn coincide(registro: &RegistroFlota, termino: &str) -> bool {
    let termino = normalizar_termino(termino);
    if termino.is_empty() {
        return true;
    }

    registro
        .campos_buscables()
        .iter()
        .any(|campo| normalizar_termino(campo).contains(&termino))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::normalizador::normalizar_registro;
    use serde_json::json;

    fn camion_ford() -> RegistroFlota {
        normalizar_registro(&json!({
            "nombre": "Unidad 12",
            "marca": "Ford",
            "modelo": "F-150",
            "placa": "XYZ-789"
        }))
    }

    #[test]
    fn test_normalizar_es_idempotente() {
        for s in ["  Ford   F-150  ", "HOLA", "", "  a  b c ", "ya normal"] {
            let una = normalizar_termino(s);
            assert_eq!(normalizar_termino(&una), una);
        }
    }

    #[test]
    fn test_termino_con_espacios_multiples() {
        assert_eq!(normalizar_termino("  Ford   F-150  "), "ford f-150");
    }

    #[test]
    fn test_compuesto_marca_modelo() {
        // "ford f-150" solo existe como compuesto marca + modelo
        assert!(coincide(&camion_ford(), "  Ford   F-150  "));
    }

    #[test]
    fn test_termino_vacio_coincide_con_todo() {
        assert!(coincide(&camion_ford(), ""));
        assert!(coincide(&camion_ford(), "    "));
    }

    #[test]
    fn test_subcadena_en_cualquier_campo() {
        let registro = camion_ford();
        assert!(coincide(&registro, "unidad"));
        assert!(coincide(&registro, "xyz"));
        assert!(coincide(&registro, "f-15"));
        assert!(!coincide(&registro, "volvo"));
    }
}
