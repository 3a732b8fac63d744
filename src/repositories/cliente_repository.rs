use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::cliente::Cliente;
use crate::utils::errors::{not_found_error, AppError};

pub struct ClienteRepository {
    pool: PgPool,
}

impl ClienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nombre: String,
        email: Option<String>,
        telefono: Option<String>,
        direccion: Option<String>,
        estado: Option<String>,
    ) -> Result<Cliente, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            INSERT INTO clientes (id, nombre, email, telefono, direccion, estado, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nombre)
        .bind(email)
        .bind(telefono)
        .bind(direccion)
        .bind(estado)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(cliente)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Cliente>, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>("SELECT * FROM clientes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(cliente)
    }

    pub async fn find_all(&self) -> Result<Vec<Cliente>, AppError> {
        let clientes =
            sqlx::query_as::<_, Cliente>("SELECT * FROM clientes ORDER BY created_at ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(clientes)
    }

    pub async fn update(
        &self,
        id: Uuid,
        nombre: Option<String>,
        email: Option<String>,
        telefono: Option<String>,
        direccion: Option<String>,
        estado: Option<String>,
    ) -> Result<Cliente, AppError> {
        let actual = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Cliente", &id.to_string()))?;

        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            UPDATE clientes
            SET nombre = $2, email = $3, telefono = $4, direccion = $5, estado = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre.or(actual.nombre))
        .bind(email.or(actual.email))
        .bind(telefono.or(actual.telefono))
        .bind(direccion.or(actual.direccion))
        .bind(estado.or(actual.estado))
        .fetch_one(&self.pool)
        .await?;

        Ok(cliente)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if resultado.rows_affected() == 0 {
            return Err(not_found_error("Cliente", &id.to_string()));
        }

        Ok(())
    }
}
