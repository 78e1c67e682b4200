// src/services/admin.rs

use bcrypt::hash;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{ProfileRepository, RoleRepository, UserRepository},
    models::{
        auth::Session,
        rbac::{AppRole, RoleAssignment, UserWithRole},
    },
};

// Pré-condições da troca de cargo, puras e checadas ANTES de qualquer
// escrita, no servidor:
// 1) só admin reatribui cargos;
// 2) ninguém altera o próprio cargo, nem admin.
pub fn ensure_can_change_role(caller: &Session, target_user_id: Uuid) -> Result<(), AppError> {
    if !caller.has_permission(&[AppRole::Admin]) {
        return Err(AppError::Forbidden(
            "Apenas administradores podem alterar cargos.".into(),
        ));
    }
    if caller.user.id == target_user_id {
        return Err(AppError::SelfRoleChangeDenied);
    }
    Ok(())
}

#[derive(Clone)]
pub struct AdminService {
    user_repo: UserRepository,
    profile_repo: ProfileRepository,
    role_repo: RoleRepository,
    pool: PgPool,
}

impl AdminService {
    pub fn new(
        user_repo: UserRepository,
        profile_repo: ProfileRepository,
        role_repo: RoleRepository,
        pool: PgPool,
    ) -> Self {
        Self {
            user_repo,
            profile_repo,
            role_repo,
            pool,
        }
    }

    pub async fn list_users(&self) -> Result<Vec<UserWithRole>, AppError> {
        self.profile_repo.list_with_roles().await
    }

    // Reatribuição de cargo. Alvo sem linha de cargo (listado como viewer)
    // ganha uma linha nova; o resto atualiza a linha existente.
    pub async fn set_role(
        &self,
        caller: &Session,
        target_user_id: Uuid,
        role_id: Option<Uuid>,
        new_role: AppRole,
    ) -> Result<RoleAssignment, AppError> {
        ensure_can_change_role(caller, target_user_id)?;

        let updated = match role_id {
            Some(role_id) => self
                .role_repo
                .update_by_id(role_id, new_role)
                .await?
                .ok_or(AppError::UserNotFound)?,
            None => self.role_repo.upsert_for_user(target_user_id, new_role).await?,
        };

        tracing::info!(
            "🔁 Cargo de {} alterado para {} por {}",
            target_user_id,
            new_role.label(),
            caller.user.id
        );
        Ok(updated)
    }

    // Portão da criação privilegiada: o cargo do chamador é re-buscado do
    // banco a cada chamada, nunca tirado do token nem do payload.
    pub async fn ensure_admin(&self, caller_user_id: Uuid) -> Result<(), AppError> {
        let caller_role = self
            .role_repo
            .find_by_user_id(caller_user_id)
            .await?
            .ok_or_else(|| AppError::Forbidden("Forbidden: role not found".into()))?;

        if caller_role.role != AppRole::Admin {
            return Err(AppError::Forbidden("Forbidden: admin only".into()));
        }
        Ok(())
    }

    // Criação privilegiada de conta. O handler já passou o chamador por
    // `ensure_admin`; aqui os três registros são escritos numa única transação.
    pub async fn create_user(
        &self,
        caller_user_id: Uuid,
        email: &str,
        password: &str,
        full_name: &str,
        role: AppRole,
    ) -> Result<Uuid, AppError> {
        let password_clone = password.to_owned();
        let hashed =
            tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        let mut tx = self.pool.begin().await?;

        let new_user = self.user_repo.create_user(&mut *tx, email, &hashed).await?;
        self.profile_repo
            .create(&mut *tx, new_user.id, full_name, email)
            .await?;
        self.role_repo.create(&mut *tx, new_user.id, role).await?;

        tx.commit().await?;

        tracing::info!("👤 Conta criada por admin {}: {}", caller_user_id, new_user.id);
        Ok(new_user.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::{Profile, User};
    use chrono::Utc;

    fn session(role: Option<AppRole>) -> Session {
        let now = Utc::now();
        let id = Uuid::new_v4();
        Session {
            user: User {
                id,
                email: "chamador@renascer.org".into(),
                password_hash: "$2b$12$hash".into(),
                created_at: now,
                updated_at: now,
            },
            profile: Profile {
                id: Uuid::new_v4(),
                user_id: id,
                full_name: "Chamador".into(),
                email: "chamador@renascer.org".into(),
                avatar_url: None,
                created_at: now,
            },
            role,
        }
    }

    #[test]
    fn nao_admin_e_rejeitado_antes_de_qualquer_escrita() {
        for role in [
            Some(AppRole::Coordinator),
            Some(AppRole::Therapist),
            Some(AppRole::Psychologist),
            Some(AppRole::Viewer),
            None,
        ] {
            let caller = session(role);
            let result = ensure_can_change_role(&caller, Uuid::new_v4());
            assert!(
                matches!(result, Err(AppError::Forbidden(_))),
                "cargo {:?} deveria ser rejeitado",
                role
            );
        }
    }

    #[test]
    fn alterar_o_proprio_cargo_e_negado_para_qualquer_chamador() {
        for role in AppRole::ALL {
            let caller = session(Some(role));
            let result = ensure_can_change_role(&caller, caller.user.id);
            assert!(result.is_err(), "auto-alteração com cargo {:?} passou", role);
        }
        // Até admin é barrado no próprio cargo, com o erro específico
        let admin = session(Some(AppRole::Admin));
        assert!(matches!(
            ensure_can_change_role(&admin, admin.user.id),
            Err(AppError::SelfRoleChangeDenied)
        ));
    }

    #[test]
    fn admin_pode_alterar_cargo_de_terceiro() {
        let caller = session(Some(AppRole::Admin));
        assert!(ensure_can_change_role(&caller, Uuid::new_v4()).is_ok());
    }
}
