use std::collections::HashSet;

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::api_response::{ApiResponse, ListadoResponse};
use crate::dto::camion_dto::{CamionResponse, CreateCamionRequest, UpdateCamionRequest};
use crate::models::registro::RegistroFlota;
use crate::repositories::camion_repository::CamionRepository;
use crate::services::filtro::{filtrar_y_contar, FiltroActivo};
use crate::utils::errors::{conflict_error, not_found_error, validation_error, AppError};
use crate::utils::validation;

pub struct CamionController {
    repository: CamionRepository,
}

impl CamionController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CamionRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateCamionRequest,
    ) -> Result<ApiResponse<CamionResponse>, AppError> {
        // Validar campos
        if request.placa.trim().is_empty() {
            return Err(validation_error("placa", "La placa es requerida"));
        }
        validation::validate_placa(&request.placa)
            .map_err(|_| validation_error("placa", "El formato de la placa no es válido"))?;
        if let Some(kilometraje) = request.kilometraje {
            validation::validate_non_negative(kilometraje)
                .map_err(|_| validation_error("kilometraje", "El kilometraje no puede ser negativo"))?;
        }

        // Verificar que la placa no exista
        if self.repository.placa_exists(&request.placa, None).await? {
            return Err(conflict_error("Camion", "placa", &request.placa));
        }

        let camion = self
            .repository
            .create(
                request.nombre,
                request.placa,
                request.marca,
                request.modelo,
                request.estado,
                request.kilometraje.unwrap_or(0.0),
                request.imagen,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            camion.into(),
            "Camión creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CamionResponse, AppError> {
        let camion = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Camion", &id.to_string()))?;

        Ok(camion.into())
    }

    /// Listar con el pipeline completo: normalizar, clasificar, filtrar
    /// y contar. Los conteos reflejan la flota completa, no el filtro.
    pub async fn list(
        &self,
        filtro: &FiltroActivo,
    ) -> Result<ListadoResponse<CamionResponse>, AppError> {
        let camiones = self.repository.find_all().await?;

        let registros: Vec<RegistroFlota> = camiones.iter().map(|c| c.como_registro()).collect();
        let resultado = filtrar_y_contar(&registros, filtro);
        let conteos = resultado.conteos.como_mapa();

        let seleccion: HashSet<usize> = resultado.indices.iter().copied().collect();
        let data = camiones
            .into_iter()
            .enumerate()
            .filter(|(i, _)| seleccion.contains(i))
            .map(|(_, camion)| CamionResponse::from(camion))
            .collect();

        Ok(ListadoResponse::new(data, conteos))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateCamionRequest,
    ) -> Result<ApiResponse<CamionResponse>, AppError> {
        if let Some(placa) = &request.placa {
            validation::validate_placa(placa)
                .map_err(|_| validation_error("placa", "El formato de la placa no es válido"))?;
            if self.repository.placa_exists(placa, Some(id)).await? {
                return Err(conflict_error("Camion", "placa", placa));
            }
        }
        if let Some(kilometraje) = request.kilometraje {
            validation::validate_non_negative(kilometraje)
                .map_err(|_| validation_error("kilometraje", "El kilometraje no puede ser negativo"))?;
        }

        let camion = self
            .repository
            .update(
                id,
                request.nombre,
                request.placa,
                request.marca,
                request.modelo,
                request.estado,
                request.kilometraje,
                request.imagen,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            camion.into(),
            "Camión actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
