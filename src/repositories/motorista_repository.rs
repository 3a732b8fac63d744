use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::motorista::Motorista;
use crate::utils::errors::{not_found_error, AppError};

pub struct MotoristaRepository {
    pool: PgPool,
}

impl MotoristaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nombre: String,
        email: Option<String>,
        telefono: Option<String>,
        licencia: Option<String>,
        estado: Option<String>,
        imagen: Option<String>,
    ) -> Result<Motorista, AppError> {
        let motorista = sqlx::query_as::<_, Motorista>(
            r#"
            INSERT INTO motoristas (id, nombre, email, telefono, licencia, estado, imagen, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nombre)
        .bind(email)
        .bind(telefono)
        .bind(licencia)
        .bind(estado)
        .bind(imagen)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(motorista)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Motorista>, AppError> {
        let motorista = sqlx::query_as::<_, Motorista>("SELECT * FROM motoristas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(motorista)
    }

    pub async fn find_all(&self) -> Result<Vec<Motorista>, AppError> {
        let motoristas =
            sqlx::query_as::<_, Motorista>("SELECT * FROM motoristas ORDER BY created_at ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(motoristas)
    }

    pub async fn email_exists(&self, email: &str, excluir: Option<Uuid>) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM motoristas WHERE email = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(email)
        .bind(excluir)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        nombre: Option<String>,
        email: Option<String>,
        telefono: Option<String>,
        licencia: Option<String>,
        estado: Option<String>,
        imagen: Option<String>,
    ) -> Result<Motorista, AppError> {
        let actual = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Motorista", &id.to_string()))?;

        let motorista = sqlx::query_as::<_, Motorista>(
            r#"
            UPDATE motoristas
            SET nombre = $2, email = $3, telefono = $4, licencia = $5, estado = $6, imagen = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre.or(actual.nombre))
        .bind(email.or(actual.email))
        .bind(telefono.or(actual.telefono))
        .bind(licencia.or(actual.licencia))
        .bind(estado.or(actual.estado))
        .bind(imagen.or(actual.imagen))
        .fetch_one(&self.pool)
        .await?;

        Ok(motorista)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM motoristas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if resultado.rows_affected() == 0 {
            return Err(not_found_error("Motorista", &id.to_string()));
        }

        Ok(())
    }
}
