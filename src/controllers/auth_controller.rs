use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::api_response::ApiResponse;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, UsuarioResponse};
use crate::models::auth::JwtClaims;
use crate::repositories::usuario_repository::UsuarioRepository;
use crate::services::jwt_service::JwtService;
use crate::utils::errors::{validation_error, AppError};

pub struct AuthController {
    repository: UsuarioRepository,
    jwt_service: JwtService,
}

impl AuthController {
    pub fn new(pool: PgPool, jwt_secret: &str, jwt_expiration_hours: i64) -> Self {
        Self {
            repository: UsuarioRepository::new(pool),
            jwt_service: JwtService::new(jwt_secret, jwt_expiration_hours),
        }
    }

    /// Verifica credenciales y emite un token de acceso
    ///
    /// Email inexistente y password incorrecto responden con el mismo
    /// mensaje para no revelar cuál de los dos falló.
    pub async fn login(
        &self,
        request: LoginRequest,
    ) -> Result<ApiResponse<LoginResponse>, AppError> {
        if request.email.trim().is_empty() || request.password.is_empty() {
            return Err(validation_error("email", "Email y password son requeridos"));
        }

        let usuario = self
            .repository
            .find_by_email(request.email.trim())
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let valido = bcrypt::verify(&request.password, &usuario.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;
        if !valido {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = self.jwt_service.generate_token(&usuario)?;
        log::info!("🔓 Login exitoso: {}", usuario.email);

        Ok(ApiResponse::success_with_message(
            LoginResponse {
                token,
                usuario: UsuarioResponse {
                    id: usuario.id,
                    nombre: usuario.nombre,
                    email: usuario.email,
                    rol: usuario.rol,
                },
            },
            "Sesión iniciada exitosamente".to_string(),
        ))
    }

    /// Datos del usuario autenticado, a partir de los claims del token
    pub async fn me(&self, claims: &JwtClaims) -> Result<UsuarioResponse, AppError> {
        let id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("Token con sujeto inválido".to_string()))?;

        let usuario = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("El usuario ya no existe".to_string()))?;

        Ok(UsuarioResponse {
            id: usuario.id,
            nombre: usuario.nombre,
            email: usuario.email,
            rol: usuario.rol,
        })
    }
}
