use std::collections::HashSet;

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::api_response::{ApiResponse, ListadoResponse};
use crate::dto::cliente_dto::{ClienteResponse, CreateClienteRequest, UpdateClienteRequest};
use crate::models::registro::RegistroFlota;
use crate::repositories::cliente_repository::ClienteRepository;
use crate::services::filtro::{filtrar_y_contar, FiltroActivo};
use crate::utils::errors::{not_found_error, validation_error, AppError};
use crate::utils::validation;

pub struct ClienteController {
    repository: ClienteRepository,
}

impl ClienteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClienteRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateClienteRequest,
    ) -> Result<ApiResponse<ClienteResponse>, AppError> {
        if request.nombre.trim().is_empty() {
            return Err(validation_error("nombre", "El nombre es requerido"));
        }
        if let Some(email) = &request.email {
            validation::validate_email(email)
                .map_err(|_| validation_error("email", "El formato del email no es válido"))?;
        }

        let cliente = self
            .repository
            .create(
                request.nombre,
                request.email,
                request.telefono,
                request.direccion,
                request.estado,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            cliente.into(),
            "Cliente creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ClienteResponse, AppError> {
        let cliente = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Cliente", &id.to_string()))?;

        Ok(cliente.into())
    }

    pub async fn list(
        &self,
        filtro: &FiltroActivo,
    ) -> Result<ListadoResponse<ClienteResponse>, AppError> {
        let clientes = self.repository.find_all().await?;

        let registros: Vec<RegistroFlota> = clientes.iter().map(|c| c.como_registro()).collect();
        let resultado = filtrar_y_contar(&registros, filtro);
        let conteos = resultado.conteos.como_mapa();

        let seleccion: HashSet<usize> = resultado.indices.iter().copied().collect();
        let data = clientes
            .into_iter()
            .enumerate()
            .filter(|(i, _)| seleccion.contains(i))
            .map(|(_, cliente)| ClienteResponse::from(cliente))
            .collect();

        Ok(ListadoResponse::new(data, conteos))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateClienteRequest,
    ) -> Result<ApiResponse<ClienteResponse>, AppError> {
        if let Some(email) = &request.email {
            validation::validate_email(email)
                .map_err(|_| validation_error("email", "El formato del email no es válido"))?;
        }

        let cliente = self
            .repository
            .update(
                id,
                request.nombre,
                request.email,
                request.telefono,
                request.direccion,
                request.estado,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            cliente.into(),
            "Cliente actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
