// src/models/resident.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Situação de acolhimento. Flag simples: qualquer transição é permitida,
// não há máquina de estados validada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "accommodation_status", rename_all = "snake_case")]
pub enum AccommodationStatus {
    Active,
    Discharged,
    Evaded,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "gender", rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "marital_status", rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
    StableUnion,
}

// Objetos de valor aninhados, persistidos como JSONB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub name: String,
    pub relationship: String,
    pub phone: String,
}

// Raiz de agregado: demografia + situação no programa
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    pub id: Uuid,
    pub full_name: String,
    pub cpf: String,
    pub rg: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub marital_status: MaritalStatus,
    pub education: String,
    pub birthplace: String,

    #[schema(value_type = Address)]
    pub address: Json<Address>,

    #[schema(value_type = EmergencyContact)]
    pub emergency_contact: Json<EmergencyContact>,

    pub judicial_situation: Option<String>,
    pub admission_date: NaiveDate,
    pub expected_discharge_date: Option<NaiveDate>,
    pub status: AccommodationStatus,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Payload de cadastro de acolhido
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateResidentPayload {
    #[validate(length(min = 3, message = "O nome deve ter no mínimo 3 caracteres."))]
    pub full_name: String,
    #[validate(length(min = 11, message = "CPF incompleto."))]
    pub cpf: String,
    #[validate(length(min = 1, message = "RG é obrigatório."))]
    pub rg: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub marital_status: MaritalStatus,
    pub education: String,
    pub birthplace: String,
    pub address: Address,
    pub emergency_contact: EmergencyContact,
    pub judicial_situation: Option<String>,
    pub admission_date: NaiveDate,
    pub expected_discharge_date: Option<NaiveDate>,
    pub photo_url: Option<String>,
}

impl CreateResidentPayload {
    // Materializa o registro com identificador e carimbos gerados no servidor.
    // Todo acolhido entra como `active`.
    pub fn into_resident(self, now: DateTime<Utc>) -> Resident {
        Resident {
            id: Uuid::new_v4(),
            full_name: self.full_name,
            cpf: self.cpf,
            rg: self.rg,
            birth_date: self.birth_date,
            gender: self.gender,
            marital_status: self.marital_status,
            education: self.education,
            birthplace: self.birthplace,
            address: Json(self.address),
            emergency_contact: Json(self.emergency_contact),
            judicial_situation: self.judicial_situation,
            admission_date: self.admission_date,
            expected_discharge_date: self.expected_discharge_date,
            status: AccommodationStatus::Active,
            photo_url: self.photo_url,
            created_at: now,
            updated_at: now,
        }
    }
}

// Merge parcial de campos. Campos ausentes ficam como estão.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResidentPayload {
    pub full_name: Option<String>,
    pub education: Option<String>,
    #[schema(value_type = Option<Address>)]
    pub address: Option<Address>,
    #[schema(value_type = Option<EmergencyContact>)]
    pub emergency_contact: Option<EmergencyContact>,
    pub judicial_situation: Option<String>,
    pub expected_discharge_date: Option<NaiveDate>,
    pub status: Option<AccommodationStatus>,
    pub photo_url: Option<String>,
}

impl Resident {
    // Aplica o merge e carimba updated_at
    pub fn apply_update(&mut self, update: UpdateResidentPayload, now: DateTime<Utc>) {
        if let Some(full_name) = update.full_name {
            self.full_name = full_name;
        }
        if let Some(education) = update.education {
            self.education = education;
        }
        if let Some(address) = update.address {
            self.address = Json(address);
        }
        if let Some(contact) = update.emergency_contact {
            self.emergency_contact = Json(contact);
        }
        if let Some(judicial) = update.judicial_situation {
            self.judicial_situation = Some(judicial);
        }
        if let Some(expected) = update.expected_discharge_date {
            self.expected_discharge_date = Some(expected);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(photo) = update.photo_url {
            self.photo_url = Some(photo);
        }
        self.updated_at = now;
    }
}
