//! Limpieza de la cookie de sesión
//!
//! La directiva que borra una cookie tiene que coincidir bit a bit con
//! los atributos con los que se creó, y los frontends históricos la
//! crearon con combinaciones distintas de `Path`, `SameSite` y
//! `Partitioned`. El logout emite todas las variantes para cubrirlas.

/// Nombre de la cookie de sesión que setean los frontends
pub const COOKIE_SESION: &str = "authToken";

const PATHS: [&str; 2] = ["/", "/api"];
const ATRIBUTOS: [&str; 3] = [
    "SameSite=Lax",
    "SameSite=None; Secure",
    "SameSite=None; Secure; Partitioned",
];

/// Directivas `Set-Cookie` que expiran la cookie en todas las variantes
pub fn directivas_limpieza(nombre: &str) -> Vec<String> {
    let mut directivas = Vec::with_capacity(PATHS.len() * ATRIBUTOS.len());
    for path in PATHS {
        for atributos in ATRIBUTOS {
            directivas.push(format!(
                "{}=; Path={}; Expires=Thu, 01 Jan 1970 00:00:00 GMT; Max-Age=0; HttpOnly; {}",
                nombre, path, atributos
            ));
        }
    }
    directivas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todas_las_variantes() {
        let directivas = directivas_limpieza(COOKIE_SESION);
        assert_eq!(directivas.len(), 6);
        assert!(directivas.iter().all(|d| d.starts_with("authToken=;")));
        assert!(directivas.iter().all(|d| d.contains("Max-Age=0")));
    }

    #[test]
    fn test_cubre_paths_y_partitioned() {
        let directivas = directivas_limpieza(COOKIE_SESION);
        assert!(directivas.iter().any(|d| d.contains("Path=/;")));
        assert!(directivas.iter().any(|d| d.contains("Path=/api;")));
        assert!(directivas.iter().any(|d| d.contains("Partitioned")));
        assert!(directivas.iter().any(|d| d.contains("SameSite=Lax")));
    }
}
