//! Modelos de autenticación

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Rol del usuario en el sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RolUsuario {
    Admin,
    Empleado,
    Motorista,
}

impl RolUsuario {
    pub fn as_str(&self) -> &'static str {
        match self {
            RolUsuario::Admin => "admin",
            RolUsuario::Empleado => "empleado",
            RolUsuario::Motorista => "motorista",
        }
    }

    pub fn from_str(valor: &str) -> Option<Self> {
        match valor {
            "admin" => Some(RolUsuario::Admin),
            "empleado" => Some(RolUsuario::Empleado),
            "motorista" => Some(RolUsuario::Motorista),
            _ => None,
        }
    }
}

/// Claims del JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub email: String,
    pub rol: String,
    pub exp: i64,
    pub iat: i64,
}

/// Usuario del sistema (fila de la tabla `usuarios`)
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id: Uuid,
    pub nombre: String,
    pub email: String,
    pub password_hash: String,
    pub rol: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rol_ida_y_vuelta() {
        for rol in [RolUsuario::Admin, RolUsuario::Empleado, RolUsuario::Motorista] {
            assert_eq!(RolUsuario::from_str(rol.as_str()), Some(rol));
        }
        assert_eq!(RolUsuario::from_str("superusuario"), None);
    }
}
