use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::viaje::Viaje;
use crate::utils::errors::{not_found_error, AppError};

pub struct ViajeRepository {
    pool: PgPool,
}

impl ViajeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        cotizacion_id: Option<Uuid>,
        camion_id: Option<Uuid>,
        motorista_id: Option<Uuid>,
        origen: String,
        destino: String,
        estado: Option<String>,
        fecha_salida: Option<DateTime<Utc>>,
    ) -> Result<Viaje, AppError> {
        let viaje = sqlx::query_as::<_, Viaje>(
            r#"
            INSERT INTO viajes (id, cotizacion_id, camion_id, motorista_id, origen, destino, estado, fecha_salida, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(cotizacion_id)
        .bind(camion_id)
        .bind(motorista_id)
        .bind(origen)
        .bind(destino)
        .bind(estado)
        .bind(fecha_salida)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(viaje)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Viaje>, AppError> {
        let viaje = sqlx::query_as::<_, Viaje>("SELECT * FROM viajes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(viaje)
    }

    pub async fn find_all(&self) -> Result<Vec<Viaje>, AppError> {
        let viajes = sqlx::query_as::<_, Viaje>("SELECT * FROM viajes ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(viajes)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        cotizacion_id: Option<Uuid>,
        camion_id: Option<Uuid>,
        motorista_id: Option<Uuid>,
        origen: Option<String>,
        destino: Option<String>,
        estado: Option<String>,
        fecha_salida: Option<DateTime<Utc>>,
    ) -> Result<Viaje, AppError> {
        let actual = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Viaje", &id.to_string()))?;

        let viaje = sqlx::query_as::<_, Viaje>(
            r#"
            UPDATE viajes
            SET cotizacion_id = $2, camion_id = $3, motorista_id = $4, origen = $5, destino = $6, estado = $7, fecha_salida = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(cotizacion_id.or(actual.cotizacion_id))
        .bind(camion_id.or(actual.camion_id))
        .bind(motorista_id.or(actual.motorista_id))
        .bind(origen.unwrap_or(actual.origen))
        .bind(destino.unwrap_or(actual.destino))
        .bind(estado.or(actual.estado))
        .bind(fecha_salida.or(actual.fecha_salida))
        .fetch_one(&self.pool)
        .await?;

        Ok(viaje)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM viajes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if resultado.rows_affected() == 0 {
            return Err(not_found_error("Viaje", &id.to_string()));
        }

        Ok(())
    }
}
