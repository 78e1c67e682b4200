// src/store/pg.rs

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        clinical::{Appointment, Evaluation, SubstanceHistory},
        resident::{Resident, UpdateResidentPayload},
    },
    store::CaseStore,
};

const RESIDENT_COLUMNS: &str = "id, full_name, cpf, rg, birth_date, gender, marital_status, \
     education, birthplace, address, emergency_contact, judicial_situation, admission_date, \
     expected_discharge_date, status, photo_url, created_at, updated_at";

// Backend padrão: persistência uniforme de todas as coleções clínicas.
// A ordenação de leitura (mais novo primeiro) vem de created_at.
pub struct PgCaseStore {
    pool: PgPool,
}

impl PgCaseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CaseStore for PgCaseStore {
    async fn list_residents(&self) -> Result<Vec<Resident>, AppError> {
        let residents = sqlx::query_as::<_, Resident>(&format!(
            "SELECT {RESIDENT_COLUMNS} FROM residents ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(residents)
    }

    async fn get_resident(&self, id: Uuid) -> Result<Option<Resident>, AppError> {
        let resident = sqlx::query_as::<_, Resident>(&format!(
            "SELECT {RESIDENT_COLUMNS} FROM residents WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(resident)
    }

    async fn add_resident(&self, resident: Resident) -> Result<Resident, AppError> {
        let created = sqlx::query_as::<_, Resident>(&format!(
            r#"
            INSERT INTO residents (
                id, full_name, cpf, rg, birth_date, gender, marital_status, education,
                birthplace, address, emergency_contact, judicial_situation, admission_date,
                expected_discharge_date, status, photo_url, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            RETURNING {RESIDENT_COLUMNS}
            "#
        ))
        .bind(resident.id)
        .bind(&resident.full_name)
        .bind(&resident.cpf)
        .bind(&resident.rg)
        .bind(resident.birth_date)
        .bind(resident.gender)
        .bind(resident.marital_status)
        .bind(&resident.education)
        .bind(&resident.birthplace)
        .bind(&resident.address)
        .bind(&resident.emergency_contact)
        .bind(&resident.judicial_situation)
        .bind(resident.admission_date)
        .bind(resident.expected_discharge_date)
        .bind(resident.status)
        .bind(&resident.photo_url)
        .bind(resident.created_at)
        .bind(resident.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn update_resident(
        &self,
        id: Uuid,
        update: UpdateResidentPayload,
    ) -> Result<Option<Resident>, AppError> {
        // Merge parcial via COALESCE; zero linhas afetadas é o no-op silencioso
        let updated = sqlx::query_as::<_, Resident>(&format!(
            r#"
            UPDATE residents
            SET full_name = COALESCE($2, full_name),
                education = COALESCE($3, education),
                address = COALESCE($4, address),
                emergency_contact = COALESCE($5, emergency_contact),
                judicial_situation = COALESCE($6, judicial_situation),
                expected_discharge_date = COALESCE($7, expected_discharge_date),
                status = COALESCE($8, status),
                photo_url = COALESCE($9, photo_url),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {RESIDENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(update.full_name)
        .bind(update.education)
        .bind(update.address.map(Json))
        .bind(update.emergency_contact.map(Json))
        .bind(update.judicial_situation)
        .bind(update.expected_discharge_date)
        .bind(update.status)
        .bind(update.photo_url)
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn list_evaluations(
        &self,
        resident_id: Option<Uuid>,
    ) -> Result<Vec<Evaluation>, AppError> {
        let evaluations = sqlx::query_as::<_, Evaluation>(
            r#"
            SELECT id, resident_id, date, professional_id, professional_name, "type",
                   diagnosis, observations, behavior_scale, discipline_scale,
                   commitment_scale, evolution_since_last_eval, created_at
            FROM evaluations
            WHERE $1::uuid IS NULL OR resident_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(resident_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(evaluations)
    }

    async fn add_evaluation(&self, evaluation: Evaluation) -> Result<Evaluation, AppError> {
        let created = sqlx::query_as::<_, Evaluation>(
            r#"
            INSERT INTO evaluations (
                id, resident_id, date, professional_id, professional_name, "type", diagnosis,
                observations, behavior_scale, discipline_scale, commitment_scale,
                evolution_since_last_eval, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id, resident_id, date, professional_id, professional_name, "type",
                      diagnosis, observations, behavior_scale, discipline_scale,
                      commitment_scale, evolution_since_last_eval, created_at
            "#,
        )
        .bind(evaluation.id)
        .bind(evaluation.resident_id)
        .bind(evaluation.date)
        .bind(evaluation.professional_id)
        .bind(&evaluation.professional_name)
        .bind(evaluation.kind)
        .bind(&evaluation.diagnosis)
        .bind(&evaluation.observations)
        .bind(evaluation.behavior_scale)
        .bind(evaluation.discipline_scale)
        .bind(evaluation.commitment_scale)
        .bind(&evaluation.evolution_since_last_eval)
        .bind(evaluation.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn list_appointments(
        &self,
        resident_id: Option<Uuid>,
    ) -> Result<Vec<Appointment>, AppError> {
        let appointments = sqlx::query_as::<_, Appointment>(
            r#"
            SELECT id, resident_id, date, "type", professional_id, professional_name,
                   objective, report, referrals, next_steps, created_at
            FROM appointments
            WHERE $1::uuid IS NULL OR resident_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(resident_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(appointments)
    }

    async fn add_appointment(&self, appointment: Appointment) -> Result<Appointment, AppError> {
        let created = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (
                id, resident_id, date, "type", professional_id, professional_name,
                objective, report, referrals, next_steps, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, resident_id, date, "type", professional_id, professional_name,
                      objective, report, referrals, next_steps, created_at
            "#,
        )
        .bind(appointment.id)
        .bind(appointment.resident_id)
        .bind(appointment.date)
        .bind(appointment.kind)
        .bind(appointment.professional_id)
        .bind(&appointment.professional_name)
        .bind(&appointment.objective)
        .bind(&appointment.report)
        .bind(&appointment.referrals)
        .bind(&appointment.next_steps)
        .bind(appointment.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn list_substance_histories(
        &self,
        resident_id: Option<Uuid>,
    ) -> Result<Vec<SubstanceHistory>, AppError> {
        let histories = sqlx::query_as::<_, SubstanceHistory>(
            r#"
            SELECT id, resident_id, substance, substance_other, start_age, duration_years,
                   frequency, last_use_date, consumption_method, is_poly_user, relapse_history,
                   previous_hospitalizations, treatment_attempts, physical_impacts,
                   social_impacts, family_impacts, created_at
            FROM substance_histories
            WHERE $1::uuid IS NULL OR resident_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(resident_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(histories)
    }

    async fn add_substance_history(
        &self,
        history: SubstanceHistory,
    ) -> Result<SubstanceHistory, AppError> {
        let created = sqlx::query_as::<_, SubstanceHistory>(
            r#"
            INSERT INTO substance_histories (
                id, resident_id, substance, substance_other, start_age, duration_years,
                frequency, last_use_date, consumption_method, is_poly_user, relapse_history,
                previous_hospitalizations, treatment_attempts, physical_impacts,
                social_impacts, family_impacts, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING id, resident_id, substance, substance_other, start_age, duration_years,
                      frequency, last_use_date, consumption_method, is_poly_user, relapse_history,
                      previous_hospitalizations, treatment_attempts, physical_impacts,
                      social_impacts, family_impacts, created_at
            "#,
        )
        .bind(history.id)
        .bind(history.resident_id)
        .bind(history.substance)
        .bind(&history.substance_other)
        .bind(history.start_age)
        .bind(history.duration_years)
        .bind(history.frequency)
        .bind(history.last_use_date)
        .bind(history.consumption_method)
        .bind(history.is_poly_user)
        .bind(&history.relapse_history)
        .bind(history.previous_hospitalizations)
        .bind(history.treatment_attempts)
        .bind(&history.physical_impacts)
        .bind(&history.social_impacts)
        .bind(&history.family_impacts)
        .bind(history.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }
}
