use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::cotizacion::Cotizacion;
use crate::utils::errors::{not_found_error, AppError};

pub struct CotizacionRepository {
    pool: PgPool,
}

impl CotizacionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        cliente_id: Option<Uuid>,
        origen: String,
        destino: String,
        precio: f64,
        estado: Option<String>,
    ) -> Result<Cotizacion, AppError> {
        let cotizacion = sqlx::query_as::<_, Cotizacion>(
            r#"
            INSERT INTO cotizaciones (id, cliente_id, origen, destino, precio, estado, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(cliente_id)
        .bind(origen)
        .bind(destino)
        .bind(precio)
        .bind(estado)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(cotizacion)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Cotizacion>, AppError> {
        let cotizacion =
            sqlx::query_as::<_, Cotizacion>("SELECT * FROM cotizaciones WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(cotizacion)
    }

    pub async fn find_all(&self) -> Result<Vec<Cotizacion>, AppError> {
        let cotizaciones =
            sqlx::query_as::<_, Cotizacion>("SELECT * FROM cotizaciones ORDER BY created_at ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(cotizaciones)
    }

    pub async fn update(
        &self,
        id: Uuid,
        cliente_id: Option<Uuid>,
        origen: Option<String>,
        destino: Option<String>,
        precio: Option<f64>,
        estado: Option<String>,
    ) -> Result<Cotizacion, AppError> {
        let actual = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Cotizacion", &id.to_string()))?;

        let cotizacion = sqlx::query_as::<_, Cotizacion>(
            r#"
            UPDATE cotizaciones
            SET cliente_id = $2, origen = $3, destino = $4, precio = $5, estado = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(cliente_id.or(actual.cliente_id))
        .bind(origen.unwrap_or(actual.origen))
        .bind(destino.unwrap_or(actual.destino))
        .bind(precio.unwrap_or(actual.precio))
        .bind(estado.or(actual.estado))
        .fetch_one(&self.pool)
        .await?;

        Ok(cotizacion)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM cotizaciones WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if resultado.rows_affected() == 0 {
            return Err(not_found_error("Cotizacion", &id.to_string()));
        }

        Ok(())
    }
}
