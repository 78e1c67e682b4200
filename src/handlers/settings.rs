// src/handlers/settings.rs

use axum::{Json, extract::State};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{ManagementTeam, RequireRole},
    models::settings::{Institution, UpdateInstitutionPayload},
};

// GET /api/settings/institution — consulta por primeira linha
#[utoipa::path(
    get,
    path = "/api/settings/institution",
    tag = "Settings",
    responses(
        (status = 200, description = "Dados da instituição, ou null quando ainda não cadastrados", body = Option<Institution>),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_institution(
    State(app_state): State<AppState>,
) -> Result<Json<Option<Institution>>, AppError> {
    let institution = app_state.institution_repo.get_first().await?;
    Ok(Json(institution))
}

// PUT /api/settings/institution
#[utoipa::path(
    put,
    path = "/api/settings/institution",
    tag = "Settings",
    request_body = UpdateInstitutionPayload,
    responses(
        (status = 200, description = "Dados da instituição salvos", body = Institution),
        (status = 403, description = "Cargo insuficiente")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_institution(
    State(app_state): State<AppState>,
    _guard: RequireRole<ManagementTeam>,
    Json(payload): Json<UpdateInstitutionPayload>,
) -> Result<Json<Institution>, AppError> {
    let saved = app_state.institution_repo.upsert(payload).await?;
    Ok(Json(saved))
}
