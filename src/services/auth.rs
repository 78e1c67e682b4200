// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{ProfileRepository, RoleRepository, UserRepository},
    models::{
        auth::{Claims, Profile, Session},
        rbac::AppRole,
    },
};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    profile_repo: ProfileRepository,
    role_repo: RoleRepository,
    jwt_secret: String,
    pool: PgPool,
}

impl AuthService {
    pub fn new(
        user_repo: UserRepository,
        profile_repo: ProfileRepository,
        role_repo: RoleRepository,
        jwt_secret: String,
        pool: PgPool,
    ) -> Self {
        Self {
            user_repo,
            profile_repo,
            role_repo,
            jwt_secret,
            pool,
        }
    }

    // Registra identidade + perfil + cargo padrão (viewer) numa única
    // transação: uma falha em qualquer passo desfaz os anteriores, então
    // nunca fica identidade órfã sem cargo.
    pub async fn register_user(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<String, AppError> {
        if password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::WeakPassword);
        }

        // Hashing fora da transação (não toca no banco) e fora do runtime
        let password_clone = password.to_owned();
        let hashed_password =
            tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        let mut tx = self.pool.begin().await?;

        let new_user = self
            .user_repo
            .create_user(&mut *tx, email, &hashed_password)
            .await?;

        self.profile_repo
            .create(&mut *tx, new_user.id, full_name, email)
            .await?;

        self.role_repo
            .create(&mut *tx, new_user.id, AppRole::Viewer)
            .await?;

        tx.commit().await?;

        tracing::info!("🆕 Usuário registrado: {}", new_user.id);
        self.create_token(new_user.id)
    }

    pub async fn login_user(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let password_hash_clone = user.password_hash.clone();

        // Executa a verificação em um thread separado
        let is_password_valid =
            tokio::task::spawn_blocking(move || verify(&password_clone, &password_hash_clone))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        self.create_token(user.id)
    }

    // Resolve o token numa sessão completa: identidade + perfil + cargo,
    // por busca secundária chaveada no id autenticado. Reavaliado a cada
    // requisição; nada fica em cache entre navegações.
    pub async fn validate_token(&self, token: &str) -> Result<Session, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        let user_id = token_data.claims.sub;

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let profile = self
            .profile_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let role = self
            .role_repo
            .find_by_user_id(user_id)
            .await?
            .map(|assignment| assignment.role);

        Ok(Session {
            user,
            profile,
            role,
        })
    }

    // Merge parcial do próprio perfil
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        full_name: Option<&str>,
        avatar_url: Option<&str>,
    ) -> Result<Profile, AppError> {
        self.profile_repo
            .update_profile(user_id, full_name, avatar_url)
            .await
    }

    // A sessão autenticada já implica a identidade; não há re-verificação
    // da senha atual além disso.
    pub async fn change_password(&self, user_id: Uuid, new_password: &str) -> Result<(), AppError> {
        if new_password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::WeakPassword);
        }

        let password_clone = new_password.to_owned();
        let hashed =
            tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        self.user_repo.update_password(user_id, &hashed).await
    }

    fn create_token(&self, user_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(7);

        let claims = Claims {
            sub: user_id,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}
