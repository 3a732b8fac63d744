use std::collections::HashSet;

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::api_response::{ApiResponse, ListadoResponse};
use crate::dto::motorista_dto::{
    CreateMotoristaRequest, MotoristaResponse, UpdateMotoristaRequest,
};
use crate::models::registro::RegistroFlota;
use crate::repositories::motorista_repository::MotoristaRepository;
use crate::services::filtro::{filtrar_y_contar, FiltroActivo};
use crate::utils::errors::{conflict_error, not_found_error, validation_error, AppError};
use crate::utils::validation;

pub struct MotoristaController {
    repository: MotoristaRepository,
}

impl MotoristaController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MotoristaRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateMotoristaRequest,
    ) -> Result<ApiResponse<MotoristaResponse>, AppError> {
        if request.nombre.trim().is_empty() {
            return Err(validation_error("nombre", "El nombre es requerido"));
        }
        if let Some(email) = &request.email {
            validation::validate_email(email)
                .map_err(|_| validation_error("email", "El formato del email no es válido"))?;
            if self.repository.email_exists(email, None).await? {
                return Err(conflict_error("Motorista", "email", email));
            }
        }
        if let Some(telefono) = &request.telefono {
            validation::validate_phone(telefono)
                .map_err(|_| validation_error("telefono", "El formato del teléfono no es válido"))?;
        }

        let motorista = self
            .repository
            .create(
                request.nombre,
                request.email,
                request.telefono,
                request.licencia,
                request.estado,
                request.imagen,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            motorista.into(),
            "Motorista creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<MotoristaResponse, AppError> {
        let motorista = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Motorista", &id.to_string()))?;

        Ok(motorista.into())
    }

    pub async fn list(
        &self,
        filtro: &FiltroActivo,
    ) -> Result<ListadoResponse<MotoristaResponse>, AppError> {
        let motoristas = self.repository.find_all().await?;

        let registros: Vec<RegistroFlota> =
            motoristas.iter().map(|m| m.como_registro()).collect();
        let resultado = filtrar_y_contar(&registros, filtro);
        let conteos = resultado.conteos.como_mapa();

        let seleccion: HashSet<usize> = resultado.indices.iter().copied().collect();
        let data = motoristas
            .into_iter()
            .enumerate()
            .filter(|(i, _)| seleccion.contains(i))
            .map(|(_, motorista)| MotoristaResponse::from(motorista))
            .collect();

        Ok(ListadoResponse::new(data, conteos))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateMotoristaRequest,
    ) -> Result<ApiResponse<MotoristaResponse>, AppError> {
        if let Some(email) = &request.email {
            validation::validate_email(email)
                .map_err(|_| validation_error("email", "El formato del email no es válido"))?;
            if self.repository.email_exists(email, Some(id)).await? {
                return Err(conflict_error("Motorista", "email", email));
            }
        }
        if let Some(telefono) = &request.telefono {
            validation::validate_phone(telefono)
                .map_err(|_| validation_error("telefono", "El formato del teléfono no es válido"))?;
        }

        let motorista = self
            .repository
            .update(
                id,
                request.nombre,
                request.email,
                request.telefono,
                request.licencia,
                request.estado,
                request.imagen,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            motorista.into(),
            "Motorista actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
