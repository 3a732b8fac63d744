use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::api_response::{ApiResponse, ListadoResponse};
use crate::dto::cotizacion_dto::{
    CotizacionResponse, CreateCotizacionRequest, UpdateCotizacionRequest,
};
use crate::models::cotizacion::{Cotizacion, EstadoCotizacion};
use crate::repositories::cotizacion_repository::CotizacionRepository;
use crate::services::busqueda::normalizar_termino;
use crate::services::filtro::contar_por;
use crate::utils::errors::{not_found_error, validation_error, AppError};

pub struct CotizacionController {
    repository: CotizacionRepository,
}

impl CotizacionController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CotizacionRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateCotizacionRequest,
    ) -> Result<ApiResponse<CotizacionResponse>, AppError> {
        if request.origen.trim().is_empty() || request.destino.trim().is_empty() {
            return Err(validation_error("origen", "Origen y destino son requeridos"));
        }
        if request.precio < 0.0 {
            return Err(validation_error("precio", "El precio no puede ser negativo"));
        }

        let cotizacion = self
            .repository
            .create(
                request.cliente_id,
                request.origen,
                request.destino,
                request.precio,
                request.estado,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            cotizacion.into(),
            "Cotización creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CotizacionResponse, AppError> {
        let cotizacion = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Cotizacion", &id.to_string()))?;

        Ok(cotizacion.into())
    }

    /// Listar con búsqueda por origen/destino y filtro por estado de
    /// cotización; los conteos cubren la lista completa
    pub async fn list(
        &self,
        buscar: &str,
        estado: &str,
    ) -> Result<ListadoResponse<CotizacionResponse>, AppError> {
        let cotizaciones = self.repository.find_all().await?;

        let mut conteos = contar_por(&cotizaciones, |c: &Cotizacion| c.estado_clasificado());
        for estado in EstadoCotizacion::TODOS {
            conteos.entry(estado).or_insert(0);
        }
        let mut mapa = std::collections::BTreeMap::new();
        mapa.insert("all".to_string(), cotizaciones.len());
        for (clave, cantidad) in conteos {
            mapa.insert(clave.as_str().to_string(), cantidad);
        }

        let termino = normalizar_termino(buscar);
        let filtro_estado = EstadoCotizacion::clasificar(Some(estado));
        let filtrar_estado = !matches!(normalizar_termino(estado).as_str(), "" | "all" | "todos");

        let data = cotizaciones
            .into_iter()
            .filter(|c| !filtrar_estado || c.estado_clasificado() == filtro_estado)
            .filter(|c| {
                termino.is_empty()
                    || normalizar_termino(&c.origen).contains(&termino)
                    || normalizar_termino(&c.destino).contains(&termino)
            })
            .map(CotizacionResponse::from)
            .collect();

        Ok(ListadoResponse::new(data, mapa))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateCotizacionRequest,
    ) -> Result<ApiResponse<CotizacionResponse>, AppError> {
        if let Some(precio) = request.precio {
            if precio < 0.0 {
                return Err(validation_error("precio", "El precio no puede ser negativo"));
            }
        }

        let cotizacion = self
            .repository
            .update(
                id,
                request.cliente_id,
                request.origen,
                request.destino,
                request.precio,
                request.estado,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            cotizacion.into(),
            "Cotización actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
