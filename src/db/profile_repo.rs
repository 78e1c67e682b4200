// src/db/profile_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{auth::Profile, rbac::UserWithRole},
};

#[derive(Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        full_name: &str,
        email: &str,
    ) -> Result<Profile, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (user_id, full_name, email)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, full_name, email, avatar_url, created_at
            "#,
        )
        .bind(user_id)
        .bind(full_name)
        .bind(email)
        .fetch_one(executor)
        .await?;

        Ok(profile)
    }

    pub async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>, AppError> {
        let maybe_profile = sqlx::query_as::<_, Profile>(
            "SELECT id, user_id, full_name, email, avatar_url, created_at FROM profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_profile)
    }

    // Merge parcial: campos nulos no payload mantêm o valor atual
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        full_name: Option<&str>,
        avatar_url: Option<&str>,
    ) -> Result<Profile, AppError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET full_name = COALESCE($2, full_name),
                avatar_url = COALESCE($3, avatar_url)
            WHERE user_id = $1
            RETURNING id, user_id, full_name, email, avatar_url, created_at
            "#,
        )
        .bind(user_id)
        .bind(full_name)
        .bind(avatar_url)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::UserNotFound)?;

        Ok(profile)
    }

    // Todos os perfis com seus cargos, do mais recente para o mais antigo.
    // Usuário sem linha de cargo aparece como 'viewer' com role_id vazio.
    pub async fn list_with_roles(&self) -> Result<Vec<UserWithRole>, AppError> {
        let users = sqlx::query_as::<_, UserWithRole>(
            r#"
            SELECT
                p.id, p.user_id, p.full_name, p.email, p.avatar_url, p.created_at,
                COALESCE(ur.role, 'viewer'::app_role) AS role,
                ur.id AS role_id
            FROM profiles p
            LEFT JOIN user_roles ur ON ur.user_id = p.user_id
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}
