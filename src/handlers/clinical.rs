// src/handlers/clinical.rs
//
// Avaliações, atendimentos e histórico de substâncias. O profissional
// autor sai sempre da sessão autenticada, nunca do payload.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        auth::CurrentSession,
        rbac::{ClinicalTeam, RequireRole},
    },
    models::clinical::{
        Appointment, CreateAppointmentPayload, CreateEvaluationPayload,
        CreateSubstanceHistoryPayload, Evaluation, SubstanceHistory,
    },
};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListByResident {
    pub resident_id: Option<Uuid>,
}

// GET /api/evaluations
#[utoipa::path(
    get,
    path = "/api/evaluations",
    tag = "Clinical",
    params(ListByResident),
    responses(
        (status = 200, description = "Avaliações, mais novas primeiro", body = Vec<Evaluation>),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_evaluations(
    State(app_state): State<AppState>,
    Query(params): Query<ListByResident>,
) -> Result<Json<Vec<Evaluation>>, AppError> {
    let evaluations = app_state
        .case_store
        .list_evaluations(params.resident_id)
        .await?;
    Ok(Json(evaluations))
}

// POST /api/evaluations
#[utoipa::path(
    post,
    path = "/api/evaluations",
    tag = "Clinical",
    request_body = CreateEvaluationPayload,
    responses(
        (status = 201, description = "Avaliação registrada", body = Evaluation),
        (status = 400, description = "Escala fora de 1-10 ou campo ausente"),
        (status = 403, description = "Viewer é somente leitura")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_evaluation(
    State(app_state): State<AppState>,
    _guard: RequireRole<ClinicalTeam>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<CreateEvaluationPayload>,
) -> Result<(StatusCode, Json<Evaluation>), AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let evaluation = payload.into_evaluation(
        session.user.id,
        session.profile.full_name.clone(),
        Utc::now(),
    );
    let created = app_state.case_store.add_evaluation(evaluation).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

// GET /api/appointments
#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = "Clinical",
    params(ListByResident),
    responses(
        (status = 200, description = "Atendimentos, mais novos primeiro", body = Vec<Appointment>),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_appointments(
    State(app_state): State<AppState>,
    Query(params): Query<ListByResident>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let appointments = app_state
        .case_store
        .list_appointments(params.resident_id)
        .await?;
    Ok(Json(appointments))
}

// POST /api/appointments
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = "Clinical",
    request_body = CreateAppointmentPayload,
    responses(
        (status = 201, description = "Atendimento registrado", body = Appointment),
        (status = 400, description = "Campo obrigatório ausente"),
        (status = 403, description = "Viewer é somente leitura")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_appointment(
    State(app_state): State<AppState>,
    _guard: RequireRole<ClinicalTeam>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<CreateAppointmentPayload>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let appointment = payload.into_appointment(
        session.user.id,
        session.profile.full_name.clone(),
        Utc::now(),
    );
    let created = app_state.case_store.add_appointment(appointment).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

// GET /api/substance-histories
#[utoipa::path(
    get,
    path = "/api/substance-histories",
    tag = "Clinical",
    params(ListByResident),
    responses(
        (status = 200, description = "Episódios de uso, mais novos primeiro", body = Vec<SubstanceHistory>),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_substance_histories(
    State(app_state): State<AppState>,
    Query(params): Query<ListByResident>,
) -> Result<Json<Vec<SubstanceHistory>>, AppError> {
    let histories = app_state
        .case_store
        .list_substance_histories(params.resident_id)
        .await?;
    Ok(Json(histories))
}

// POST /api/substance-histories — lista append-only, não há update
#[utoipa::path(
    post,
    path = "/api/substance-histories",
    tag = "Clinical",
    request_body = CreateSubstanceHistoryPayload,
    responses(
        (status = 201, description = "Episódio registrado", body = SubstanceHistory),
        (status = 400, description = "Campos inválidos"),
        (status = 403, description = "Viewer é somente leitura")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_substance_history(
    State(app_state): State<AppState>,
    _guard: RequireRole<ClinicalTeam>,
    Json(payload): Json<CreateSubstanceHistoryPayload>,
) -> Result<(StatusCode, Json<SubstanceHistory>), AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let history = payload.into_history(Utc::now());
    let created = app_state.case_store.add_substance_history(history).await?;

    Ok((StatusCode::CREATED, Json(created)))
}
