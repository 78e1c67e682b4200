// src/db/role_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::rbac::{AppRole, RoleAssignment},
};

#[derive(Clone)]
pub struct RoleRepository {
    pool: PgPool,
}

impl RoleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        role: AppRole,
    ) -> Result<RoleAssignment, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let assignment = sqlx::query_as::<_, RoleAssignment>(
            r#"
            INSERT INTO user_roles (user_id, role)
            VALUES ($1, $2)
            RETURNING id, user_id, role, created_at
            "#,
        )
        .bind(user_id)
        .bind(role)
        .fetch_one(executor)
        .await?;

        Ok(assignment)
    }

    // O cargo ativo do usuário, se a linha existir
    pub async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<RoleAssignment>, AppError> {
        let maybe_role = sqlx::query_as::<_, RoleAssignment>(
            "SELECT id, user_id, role, created_at FROM user_roles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_role)
    }

    // Reatribuição pela linha existente
    pub async fn update_by_id(
        &self,
        role_id: Uuid,
        role: AppRole,
    ) -> Result<Option<RoleAssignment>, AppError> {
        let updated = sqlx::query_as::<_, RoleAssignment>(
            r#"
            UPDATE user_roles SET role = $2
            WHERE id = $1
            RETURNING id, user_id, role, created_at
            "#,
        )
        .bind(role_id)
        .bind(role)
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated)
    }

    // Para alvos que ainda não têm linha de cargo (exibidos como viewer)
    pub async fn upsert_for_user(
        &self,
        user_id: Uuid,
        role: AppRole,
    ) -> Result<RoleAssignment, AppError> {
        let assignment = sqlx::query_as::<_, RoleAssignment>(
            r#"
            INSERT INTO user_roles (user_id, role)
            VALUES ($1, $2)
            ON CONFLICT (user_id)
            DO UPDATE SET role = EXCLUDED.role
            RETURNING id, user_id, role, created_at
            "#,
        )
        .bind(user_id)
        .bind(role)
        .fetch_one(&self.pool)
        .await?;
        Ok(assignment)
    }
}
