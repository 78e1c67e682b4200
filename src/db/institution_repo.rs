// src/db/institution_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::settings::{Institution, UpdateInstitutionPayload},
};

#[derive(Clone)]
pub struct InstitutionRepository {
    pool: PgPool,
}

impl InstitutionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Consulta por "primeira linha": não há unicidade imposta no banco
    pub async fn get_first(&self) -> Result<Option<Institution>, AppError> {
        let institution = sqlx::query_as::<_, Institution>(
            "SELECT id, name, cnpj, address, updated_at FROM institutions ORDER BY updated_at ASC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(institution)
    }

    // Atualiza a primeira linha, ou insere quando ainda não há registro
    pub async fn upsert(&self, input: UpdateInstitutionPayload) -> Result<Institution, AppError> {
        if let Some(existing) = self.get_first().await? {
            let updated = sqlx::query_as::<_, Institution>(
                r#"
                UPDATE institutions
                SET name = $2, cnpj = $3, address = $4, updated_at = NOW()
                WHERE id = $1
                RETURNING id, name, cnpj, address, updated_at
                "#,
            )
            .bind(existing.id)
            .bind(&input.name)
            .bind(&input.cnpj)
            .bind(&input.address)
            .fetch_one(&self.pool)
            .await?;
            return Ok(updated);
        }

        let created = sqlx::query_as::<_, Institution>(
            r#"
            INSERT INTO institutions (name, cnpj, address)
            VALUES ($1, $2, $3)
            RETURNING id, name, cnpj, address, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.cnpj)
        .bind(&input.address)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
