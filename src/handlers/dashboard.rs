// src/handlers/dashboard.rs

use axum::{Json, extract::State};
use chrono::Utc;

use crate::{common::error::AppError, config::AppState, models::dashboard::DashboardStats};

// GET /api/dashboard/stats — agregados derivados, calculados na leitura
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Indicadores do painel", body = DashboardStats),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_stats(State(app_state): State<AppState>) -> Result<Json<DashboardStats>, AppError> {
    let residents = app_state.case_store.list_residents().await?;
    let evaluations = app_state.case_store.list_evaluations(None).await?;
    let appointments = app_state.case_store.list_appointments(None).await?;

    let stats = DashboardStats::compute(&residents, &evaluations, &appointments, Utc::now());
    Ok(Json(stats))
}
