use std::collections::BTreeMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::api_response::{ApiResponse, ListadoResponse};
use crate::dto::viaje_dto::{CreateViajeRequest, UpdateViajeRequest, ViajeResponse};
use crate::models::viaje::{EstadoViaje, Viaje};
use crate::repositories::viaje_repository::ViajeRepository;
use crate::services::busqueda::normalizar_termino;
use crate::services::filtro::contar_por;
use crate::utils::errors::{not_found_error, validation_error, AppError};

pub struct ViajeController {
    repository: ViajeRepository,
}

impl ViajeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ViajeRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateViajeRequest,
    ) -> Result<ApiResponse<ViajeResponse>, AppError> {
        if request.origen.trim().is_empty() || request.destino.trim().is_empty() {
            return Err(validation_error("origen", "Origen y destino son requeridos"));
        }

        let viaje = self
            .repository
            .create(
                request.cotizacion_id,
                request.camion_id,
                request.motorista_id,
                request.origen,
                request.destino,
                request.estado,
                request.fecha_salida,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            viaje.into(),
            "Viaje creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ViajeResponse, AppError> {
        let viaje = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Viaje", &id.to_string()))?;

        Ok(viaje.into())
    }

    /// Listar con búsqueda por origen/destino y filtro por estado del
    /// ciclo de vida; los conteos cubren la lista completa
    pub async fn list(
        &self,
        buscar: &str,
        estado: &str,
    ) -> Result<ListadoResponse<ViajeResponse>, AppError> {
        let viajes = self.repository.find_all().await?;

        let mut por_estado = contar_por(&viajes, |v: &Viaje| v.estado_clasificado());
        for clave in EstadoViaje::TODOS {
            por_estado.entry(clave).or_insert(0);
        }
        let mut conteos = BTreeMap::new();
        conteos.insert("all".to_string(), viajes.len());
        for (clave, cantidad) in por_estado {
            conteos.insert(clave.as_str().to_string(), cantidad);
        }

        let termino = normalizar_termino(buscar);
        let filtro_estado = EstadoViaje::clasificar(Some(estado));
        let filtrar_estado = !matches!(normalizar_termino(estado).as_str(), "" | "all" | "todos");

        let data = viajes
            .into_iter()
            .filter(|v| !filtrar_estado || v.estado_clasificado() == filtro_estado)
            .filter(|v| {
                termino.is_empty()
                    || normalizar_termino(&v.origen).contains(&termino)
                    || normalizar_termino(&v.destino).contains(&termino)
            })
            .map(ViajeResponse::from)
            .collect();

        Ok(ListadoResponse::new(data, conteos))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateViajeRequest,
    ) -> Result<ApiResponse<ViajeResponse>, AppError> {
        if let Some(origen) = &request.origen {
            if origen.trim().is_empty() {
                return Err(validation_error("origen", "El origen no puede quedar vacío"));
            }
        }
        if let Some(destino) = &request.destino {
            if destino.trim().is_empty() {
                return Err(validation_error("destino", "El destino no puede quedar vacío"));
            }
        }

        let viaje = self
            .repository
            .update(
                id,
                request.cotizacion_id,
                request.camion_id,
                request.motorista_id,
                request.origen,
                request.destino,
                request.estado,
                request.fecha_salida,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            viaje.into(),
            "Viaje actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
