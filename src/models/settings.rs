// src/models/settings.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Dados da instituição. Registro único na prática, consultado por
// primeira linha (não há unicidade imposta no banco).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    pub id: Uuid,

    #[schema(example = "Comunidade Terapêutica Renascer")]
    pub name: String,

    #[schema(example = "12.345.678/0001-90")]
    pub cnpj: String,

    #[schema(example = "Rua da Esperança, 100 - Centro - São Paulo/SP")]
    pub address: String,

    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstitutionPayload {
    #[schema(example = "Comunidade Terapêutica Renascer")]
    pub name: String,

    #[schema(example = "12.345.678/0001-90")]
    pub cnpj: String,

    #[schema(example = "Rua da Esperança, 100 - Centro - São Paulo/SP")]
    pub address: String,
}
