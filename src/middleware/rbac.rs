// src/middleware/rbac.rs

use axum::{extract::FromRequestParts, http::request::Parts};
use std::marker::PhantomData;

use crate::{common::error::AppError, models::auth::Session, models::rbac::AppRole};

/// 1. O trait que define um conjunto de cargos exigidos por uma rota
pub trait RoleSetDef: Send + Sync + 'static {
    fn allowed() -> &'static [AppRole];
}

/// 2. O extrator (guardião). Sem sessão: 401. Sessão com cargo fora do
/// conjunto: 403 no lugar (sem redirect), e o corpo do handler nunca roda —
/// a página protegida não chega a buscar seus dados. A decisão é
/// reavaliada a cada requisição.
pub struct RequireRole<T>(pub PhantomData<T>);

impl<T, S> FromRequestParts<S> for RequireRole<T>
where
    T: RoleSetDef,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AppError::InvalidToken)?;

        if !session.has_permission(T::allowed()) {
            return Err(AppError::Forbidden(
                "Você não tem permissão para acessar esta página.".into(),
            ));
        }

        Ok(RequireRole(PhantomData))
    }
}

// ---
// CONJUNTOS DE CARGOS POR ROTA
// ---

// Gestão de usuários
pub struct AdminOnly;
impl RoleSetDef for AdminOnly {
    fn allowed() -> &'static [AppRole] {
        &[AppRole::Admin]
    }
}

// Escritas clínicas (acolhidos, avaliações, atendimentos, histórico);
// viewer é somente leitura
pub struct ClinicalTeam;
impl RoleSetDef for ClinicalTeam {
    fn allowed() -> &'static [AppRole] {
        &[
            AppRole::Admin,
            AppRole::Coordinator,
            AppRole::Therapist,
            AppRole::Psychologist,
        ]
    }
}

// Dados da instituição
pub struct ManagementTeam;
impl RoleSetDef for ManagementTeam {
    fn allowed() -> &'static [AppRole] {
        &[AppRole::Admin, AppRole::Coordinator]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::{Profile, User};
    use axum::http::request::Parts;
    use chrono::Utc;
    use uuid::Uuid;

    fn session(role: Option<AppRole>) -> Session {
        let now = Utc::now();
        let id = Uuid::new_v4();
        Session {
            user: User {
                id,
                email: "pessoa@renascer.org".into(),
                password_hash: "$2b$12$hash".into(),
                created_at: now,
                updated_at: now,
            },
            profile: Profile {
                id: Uuid::new_v4(),
                user_id: id,
                full_name: "Pessoa Teste".into(),
                email: "pessoa@renascer.org".into(),
                avatar_url: None,
                created_at: now,
            },
            role,
        }
    }

    fn parts_with(session: Option<Session>) -> Parts {
        let mut request = axum::http::Request::builder().body(()).unwrap();
        if let Some(session) = session {
            request.extensions_mut().insert(session);
        }
        request.into_parts().0
    }

    #[tokio::test]
    async fn sem_sessao_o_guardiao_devolve_401() {
        let mut parts = parts_with(None);
        let result = RequireRole::<AdminOnly>::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    // 403 no lugar, sem redirect: o guardião reprova no extrator e o corpo
    // do handler (a busca da listagem, por exemplo) nunca chega a rodar.
    #[tokio::test]
    async fn cargo_fora_do_conjunto_e_403_no_lugar() {
        for role in [
            AppRole::Coordinator,
            AppRole::Therapist,
            AppRole::Psychologist,
            AppRole::Viewer,
        ] {
            let mut parts = parts_with(Some(session(Some(role))));
            let result = RequireRole::<AdminOnly>::from_request_parts(&mut parts, &()).await;
            assert!(
                matches!(result, Err(AppError::Forbidden(_))),
                "cargo {:?} deveria ser barrado",
                role
            );
        }
    }

    #[tokio::test]
    async fn admin_passa_pelo_guardiao() {
        let mut parts = parts_with(Some(session(Some(AppRole::Admin))));
        let result = RequireRole::<AdminOnly>::from_request_parts(&mut parts, &()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn sessao_sem_cargo_e_barrada_em_qualquer_conjunto() {
        let mut parts = parts_with(Some(session(None)));
        let result = RequireRole::<ClinicalTeam>::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }
}
