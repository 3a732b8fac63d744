//! Servicio JWT

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::models::auth::{JwtClaims, Usuario};
use crate::utils::errors::AppError;

/// Configuración JWT
pub struct JwtConfig {
    pub algorithm: Algorithm,
    pub expiration: Duration,
}

/// Servicio JWT
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(secret: &str, expiration_hours: i64) -> Self {
        Self {
            config: JwtConfig {
                algorithm: Algorithm::HS256,
                expiration: Duration::hours(expiration_hours),
            },
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Genera un token de acceso para el usuario
    pub fn generate_token(&self, usuario: &Usuario) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = now + self.config.expiration;

        let claims = JwtClaims {
            sub: usuario.id.to_string(),
            email: usuario.email.clone(),
            rol: usuario.rol.clone(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(self.config.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AppError::Jwt(format!("Error generating token: {}", e)))
    }

    /// Valida y decodifica un token
    pub fn validate_token(&self, token: &str) -> Result<JwtClaims, AppError> {
        let validation = Validation::new(self.config.algorithm);

        decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Jwt(format!("Invalid token: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn usuario_de_prueba() -> Usuario {
        Usuario {
            id: Uuid::new_v4(),
            nombre: "Ana Admin".to_string(),
            email: "ana@flota.test".to_string(),
            password_hash: "irrelevante".to_string(),
            rol: "admin".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_generate_and_validate_token() {
        let jwt_service = JwtService::new("secreto-de-prueba", 24);
        let usuario = usuario_de_prueba();

        let token = jwt_service.generate_token(&usuario).unwrap();
        assert!(!token.is_empty());

        let claims = jwt_service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, usuario.id.to_string());
        assert_eq!(claims.email, "ana@flota.test");
        assert_eq!(claims.rol, "admin");
    }

    #[test]
    fn test_token_con_secreto_incorrecto() {
        let emisor = JwtService::new("secreto-a", 24);
        let receptor = JwtService::new("secreto-b", 24);

        let token = emisor.generate_token(&usuario_de_prueba()).unwrap();
        assert!(receptor.validate_token(&token).is_err());
    }
}
