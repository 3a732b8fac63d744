use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::camion::Camion;
use crate::utils::errors::{not_found_error, AppError};

pub struct CamionRepository {
    pool: PgPool,
}

impl CamionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nombre: Option<String>,
        placa: String,
        marca: Option<String>,
        modelo: Option<String>,
        estado: Option<String>,
        kilometraje: f64,
        imagen: Option<String>,
    ) -> Result<Camion, AppError> {
        let camion = sqlx::query_as::<_, Camion>(
            r#"
            INSERT INTO camiones (id, nombre, placa, marca, modelo, estado, kilometraje, imagen, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nombre)
        .bind(placa)
        .bind(marca)
        .bind(modelo)
        .bind(estado)
        .bind(kilometraje)
        .bind(imagen)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(camion)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Camion>, AppError> {
        let camion = sqlx::query_as::<_, Camion>("SELECT * FROM camiones WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(camion)
    }

    pub async fn find_all(&self) -> Result<Vec<Camion>, AppError> {
        let camiones =
            sqlx::query_as::<_, Camion>("SELECT * FROM camiones ORDER BY created_at ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(camiones)
    }

    pub async fn placa_exists(&self, placa: &str, excluir: Option<Uuid>) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM camiones WHERE placa = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(placa)
        .bind(excluir)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        nombre: Option<String>,
        placa: Option<String>,
        marca: Option<String>,
        modelo: Option<String>,
        estado: Option<String>,
        kilometraje: Option<f64>,
        imagen: Option<String>,
    ) -> Result<Camion, AppError> {
        let actual = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Camion", &id.to_string()))?;

        let camion = sqlx::query_as::<_, Camion>(
            r#"
            UPDATE camiones
            SET nombre = $2, placa = $3, marca = $4, modelo = $5, estado = $6, kilometraje = $7, imagen = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre.or(actual.nombre))
        .bind(placa.unwrap_or(actual.placa))
        .bind(marca.or(actual.marca))
        .bind(modelo.or(actual.modelo))
        .bind(estado.or(actual.estado))
        .bind(kilometraje.unwrap_or(actual.kilometraje))
        .bind(imagen.or(actual.imagen))
        .fetch_one(&self.pool)
        .await?;

        Ok(camion)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM camiones WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if resultado.rows_affected() == 0 {
            return Err(not_found_error("Camion", &id.to_string()));
        }

        Ok(())
    }
}
