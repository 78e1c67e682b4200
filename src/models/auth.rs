// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::rbac::AppRole;

// Representa uma identidade de acesso vinda do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    #[schema(ignore)]
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Perfil de exibição, 1:1 com a identidade
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

// Dados para registro de um novo usuário
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,
    #[validate(length(min = 3, message = "O nome deve ter no mínimo 3 caracteres."))]
    pub full_name: String,
}

// Dados para login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginUserPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,
}

// Resposta de autenticação com o token
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
}

// Atualização parcial do próprio perfil (merge de campos)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfilePayload {
    #[validate(length(min = 3, message = "O nome deve ter no mínimo 3 caracteres."))]
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
}

// Troca de senha do próprio usuário. A sessão autenticada já implica a
// verificação de identidade; não há re-checagem da senha atual.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordPayload {
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub new_password: String,
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,  // Subject (ID do usuário)
    pub exp: usize, // Expiration time (quando o token expira)
    pub iat: usize, // Issued At (quando o token foi criado)
}

// A sessão viva do processo: identidade + perfil + cargo, resolvidos a cada
// requisição pelo middleware de autenticação. Nada é cacheado entre requisições.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub profile: Profile,
    pub role: Option<AppRole>,
}

impl Session {
    // Decisão de permissão pura: pertinência exata ao conjunto exigido.
    // Cargos não têm hierarquia nem herança; sessão sem cargo nunca passa.
    pub fn has_permission(&self, required: &[AppRole]) -> bool {
        match self.role {
            Some(role) => required.contains(&role),
            None => false,
        }
    }
}

// Visão da sessão devolvida por GET /api/users/me
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub profile: Profile,
    pub role: Option<AppRole>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn session_with(role: Option<AppRole>) -> Session {
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

    #[test]
    fn has_permission_exige_pertinencia_exata() {
        let session = session_with(Some(AppRole::Therapist));
        assert!(session.has_permission(&[AppRole::Admin, AppRole::Therapist]));
        assert!(!session.has_permission(&[AppRole::Admin, AppRole::Coordinator]));
        assert!(!session.has_permission(&[]));
    }

    #[test]
    fn has_permission_sem_cargo_nega_sempre() {
        let session = session_with(None);
        assert!(!session.has_permission(&[
            AppRole::Admin,
            AppRole::Coordinator,
            AppRole::Therapist,
            AppRole::Psychologist,
            AppRole::Viewer,
        ]));
    }

    #[test]
    fn senha_curta_reprova_antes_de_qualquer_chamada() {
        let payload = RegisterUserPayload {
            email: "novo@renascer.org".into(),
            password: "12345".into(),
            full_name: "Novo Usuário".into(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn registro_valido_passa() {
        let payload = RegisterUserPayload {
            email: "novo@renascer.org".into(),
            password: "123456".into(),
            full_name: "Novo Usuário".into(),
        };
        assert!(payload.validate().is_ok());
    }
}
