// src/handlers/residents.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{ClinicalTeam, RequireRole},
    models::resident::{CreateResidentPayload, Resident, UpdateResidentPayload},
};

// GET /api/residents — mais novos primeiro
#[utoipa::path(
    get,
    path = "/api/residents",
    tag = "Residents",
    responses(
        (status = 200, description = "Acolhidos, do mais recente para o mais antigo", body = Vec<Resident>),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_residents(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Resident>>, AppError> {
    let residents = app_state.case_store.list_residents().await?;
    Ok(Json(residents))
}

// GET /api/residents/{id}
#[utoipa::path(
    get,
    path = "/api/residents/{id}",
    tag = "Residents",
    params(("id" = Uuid, Path, description = "ID do acolhido")),
    responses(
        (status = 200, description = "Ficha do acolhido", body = Resident),
        (status = 404, description = "Acolhido não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_resident(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Resident>, AppError> {
    let resident = app_state
        .case_store
        .get_resident(id)
        .await?
        .ok_or(AppError::ResidentNotFound)?;
    Ok(Json(resident))
}

// POST /api/residents
#[utoipa::path(
    post,
    path = "/api/residents",
    tag = "Residents",
    request_body = CreateResidentPayload,
    responses(
        (status = 201, description = "Acolhido cadastrado", body = Resident),
        (status = 400, description = "Campos inválidos"),
        (status = 403, description = "Viewer é somente leitura")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_resident(
    State(app_state): State<AppState>,
    _guard: RequireRole<ClinicalTeam>,
    Json(payload): Json<CreateResidentPayload>,
) -> Result<(StatusCode, Json<Resident>), AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let resident = payload.into_resident(Utc::now());
    let created = app_state.case_store.add_resident(resident).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

// PUT /api/residents/{id} — merge parcial. Id desconhecido é um no-op
// silencioso: 200 com corpo nulo, nunca um erro.
#[utoipa::path(
    put,
    path = "/api/residents/{id}",
    tag = "Residents",
    request_body = UpdateResidentPayload,
    params(("id" = Uuid, Path, description = "ID do acolhido")),
    responses(
        (status = 200, description = "Acolhido atualizado, ou null quando o id não existe", body = Option<Resident>),
        (status = 403, description = "Viewer é somente leitura")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_resident(
    State(app_state): State<AppState>,
    _guard: RequireRole<ClinicalTeam>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateResidentPayload>,
) -> Result<Json<Option<Resident>>, AppError> {
    let updated = app_state.case_store.update_resident(id, payload).await?;
    Ok(Json(updated))
}
