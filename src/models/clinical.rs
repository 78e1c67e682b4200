// src/models/clinical.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "substance_type", rename_all = "snake_case")]
pub enum SubstanceType {
    Alcohol,
    Cocaine,
    Crack,
    Marijuana,
    Methamphetamine,
    Heroin,
    Lsd,
    Ecstasy,
    Inhalants,
    PrescriptionDrugs,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "consumption_method", rename_all = "snake_case")]
pub enum ConsumptionMethod {
    Oral,
    Smoked,
    Snorted,
    Injected,
    Inhaled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "frequency_of_use", rename_all = "snake_case")]
pub enum FrequencyOfUse {
    Daily,
    Weekly,
    Monthly,
    Occasional,
    Sporadic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "evaluation_type", rename_all = "snake_case")]
pub enum EvaluationType {
    Psychological,
    Social,
    Clinical,
    Therapeutic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "appointment_type", rename_all = "snake_case")]
pub enum AppointmentType {
    Individual,
    Group,
    Spiritual,
    Clinical,
    Family,
}

// Episódio de uso de substância. Lista append-only por acolhido.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubstanceHistory {
    pub id: Uuid,
    pub resident_id: Uuid,
    pub substance: SubstanceType,
    pub substance_other: Option<String>,
    pub start_age: i32,
    pub duration_years: i32,
    pub frequency: FrequencyOfUse,
    pub last_use_date: NaiveDate,
    pub consumption_method: ConsumptionMethod,
    pub is_poly_user: bool,
    pub relapse_history: String,
    pub previous_hospitalizations: i32,
    pub treatment_attempts: i32,
    pub physical_impacts: String,
    pub social_impacts: String,
    pub family_impacts: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubstanceHistoryPayload {
    pub resident_id: Uuid,
    pub substance: SubstanceType,
    pub substance_other: Option<String>,
    #[validate(range(min = 0, max = 120, message = "Idade de início inválida."))]
    pub start_age: i32,
    #[validate(range(min = 0, message = "Duração inválida."))]
    pub duration_years: i32,
    pub frequency: FrequencyOfUse,
    pub last_use_date: NaiveDate,
    pub consumption_method: ConsumptionMethod,
    #[serde(default)]
    pub is_poly_user: bool,
    pub relapse_history: String,
    #[serde(default)]
    pub previous_hospitalizations: i32,
    #[serde(default)]
    pub treatment_attempts: i32,
    pub physical_impacts: String,
    pub social_impacts: String,
    pub family_impacts: String,
}

impl CreateSubstanceHistoryPayload {
    pub fn into_history(self, now: DateTime<Utc>) -> SubstanceHistory {
        SubstanceHistory {
            id: Uuid::new_v4(),
            resident_id: self.resident_id,
            substance: self.substance,
            substance_other: self.substance_other,
            start_age: self.start_age,
            duration_years: self.duration_years,
            frequency: self.frequency,
            last_use_date: self.last_use_date,
            consumption_method: self.consumption_method,
            is_poly_user: self.is_poly_user,
            relapse_history: self.relapse_history,
            previous_hospitalizations: self.previous_hospitalizations,
            treatment_attempts: self.treatment_attempts,
            physical_impacts: self.physical_impacts,
            social_impacts: self.social_impacts,
            family_impacts: self.family_impacts,
            created_at: now,
        }
    }
}

// Avaliação periódica, escrita por um profissional
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub id: Uuid,
    pub resident_id: Uuid,
    pub date: DateTime<Utc>,
    pub professional_id: Uuid,
    pub professional_name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: EvaluationType,
    pub diagnosis: String,
    pub observations: String,
    pub behavior_scale: i32,
    pub discipline_scale: i32,
    pub commitment_scale: i32,
    pub evolution_since_last_eval: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvaluationPayload {
    pub resident_id: Uuid,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: EvaluationType,
    pub diagnosis: String,
    pub observations: String,
    // As três escalas são inteiras de 1 a 10
    #[validate(range(min = 1, max = 10, message = "A escala vai de 1 a 10."))]
    pub behavior_scale: i32,
    #[validate(range(min = 1, max = 10, message = "A escala vai de 1 a 10."))]
    pub discipline_scale: i32,
    #[validate(range(min = 1, max = 10, message = "A escala vai de 1 a 10."))]
    pub commitment_scale: i32,
    pub evolution_since_last_eval: String,
}

impl CreateEvaluationPayload {
    // O profissional autor vem da sessão, nunca do payload
    pub fn into_evaluation(
        self,
        professional_id: Uuid,
        professional_name: String,
        now: DateTime<Utc>,
    ) -> Evaluation {
        Evaluation {
            id: Uuid::new_v4(),
            resident_id: self.resident_id,
            date: self.date,
            professional_id,
            professional_name,
            kind: self.kind,
            diagnosis: self.diagnosis,
            observations: self.observations,
            behavior_scale: self.behavior_scale,
            discipline_scale: self.discipline_scale,
            commitment_scale: self.commitment_scale,
            evolution_since_last_eval: self.evolution_since_last_eval,
            created_at: now,
        }
    }
}

// Um atendimento terapêutico registrado
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub resident_id: Uuid,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: AppointmentType,
    pub professional_id: Uuid,
    pub professional_name: String,
    pub objective: String,
    pub report: String,
    pub referrals: Option<String>,
    pub next_steps: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentPayload {
    pub resident_id: Uuid,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: AppointmentType,
    #[validate(length(min = 1, message = "Objetivo é obrigatório."))]
    pub objective: String,
    #[validate(length(min = 1, message = "Relato é obrigatório."))]
    pub report: String,
    pub referrals: Option<String>,
    pub next_steps: Option<String>,
}

impl CreateAppointmentPayload {
    pub fn into_appointment(
        self,
        professional_id: Uuid,
        professional_name: String,
        now: DateTime<Utc>,
    ) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            resident_id: self.resident_id,
            date: self.date,
            kind: self.kind,
            professional_id,
            professional_name,
            objective: self.objective,
            report: self.report,
            referrals: self.referrals,
            next_steps: self.next_steps,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn escala_fora_do_intervalo_reprova() {
        let payload = CreateEvaluationPayload {
            resident_id: Uuid::new_v4(),
            date: Utc::now(),
            kind: EvaluationType::Psychological,
            diagnosis: "Em remissão inicial".into(),
            observations: "Boa adesão.".into(),
            behavior_scale: 11,
            discipline_scale: 7,
            commitment_scale: 0,
            evolution_since_last_eval: "Melhora".into(),
        };
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("behavior_scale"));
        assert!(fields.contains_key("commitment_scale"));
        assert!(!fields.contains_key("discipline_scale"));
    }
}
