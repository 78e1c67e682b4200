// src/models/rbac.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Conjunto fechado de cargos. Exatamente um cargo ativo por usuário.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "app_role", rename_all = "snake_case")]
pub enum AppRole {
    Admin,
    Coordinator,
    Therapist,
    Psychologist,
    Viewer,
}

impl AppRole {
    pub const ALL: [AppRole; 5] = [
        AppRole::Admin,
        AppRole::Coordinator,
        AppRole::Therapist,
        AppRole::Psychologist,
        AppRole::Viewer,
    ];

    // Rótulo de exibição. Mapeamento total: uma variante nova sem rótulo
    // não compila.
    pub fn label(&self) -> &'static str {
        match self {
            AppRole::Admin => "Administrador",
            AppRole::Coordinator => "Coordenador",
            AppRole::Therapist => "Terapeuta",
            AppRole::Psychologist => "Psicólogo",
            AppRole::Viewer => "Visualização",
        }
    }

    pub fn parse(value: &str) -> Option<AppRole> {
        match value {
            "admin" => Some(AppRole::Admin),
            "coordinator" => Some(AppRole::Coordinator),
            "therapist" => Some(AppRole::Therapist),
            "psychologist" => Some(AppRole::Psychologist),
            "viewer" => Some(AppRole::Viewer),
            _ => None,
        }
    }
}

// O que sai do banco (Tabela user_roles)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role: AppRole,
    pub created_at: DateTime<Utc>,
}

// Perfil + cargo, como a tela de administração lista. Quando não existe
// linha de cargo, o usuário é exibido como `viewer` (role_id fica vazio).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserWithRole {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,

    pub user_id: Uuid,

    #[schema(example = "Eliandro Anjos")]
    pub full_name: String,

    #[schema(example = "eliandro@renascer.org")]
    pub email: String,

    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,

    pub role: AppRole,
    pub role_id: Option<Uuid>,
}

// O payload de troca de cargo
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRolePayload {
    // Linha de user_roles a atualizar; ausente quando o alvo ainda não tem cargo
    pub role_id: Option<Uuid>,
    pub role: AppRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotulos_cobrem_todos_os_cargos() {
        for role in AppRole::ALL {
            assert!(!role.label().is_empty());
        }
        assert_eq!(AppRole::Admin.label(), "Administrador");
        assert_eq!(AppRole::Viewer.label(), "Visualização");
    }

    #[test]
    fn parse_aceita_somente_valores_do_conjunto() {
        assert_eq!(AppRole::parse("psychologist"), Some(AppRole::Psychologist));
        assert_eq!(AppRole::parse("gerente"), None);
        assert_eq!(AppRole::parse(""), None);
    }

    #[test]
    fn serializacao_snake_case_no_fio() {
        assert_eq!(
            serde_json::to_string(&AppRole::Psychologist).unwrap(),
            "\"psychologist\""
        );
        assert!(serde_json::from_str::<AppRole>("\"gerente\"").is_err());
    }
}
