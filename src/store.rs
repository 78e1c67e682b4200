// src/store.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        clinical::{Appointment, Evaluation, SubstanceHistory},
        resident::{Resident, UpdateResidentPayload},
    },
};

pub mod fixtures;
pub mod memory;
pub mod pg;

pub use memory::MemoryCaseStore;
pub use pg::PgCaseStore;

/// As quatro coleções clínicas, atrás de um backend configurável
/// (`CASE_STORAGE`): Postgres para persistência uniforme, memória para o
/// modo demonstração semeado com as fixtures.
///
/// Contratos observáveis, iguais nos dois backends:
/// - `add_*` insere no topo: leituras são sempre do mais novo para o mais antigo;
/// - `update_resident` em id desconhecido devolve `Ok(None)` sem erro (no-op
///   silencioso), e em id conhecido carimba `updated_at`.
#[async_trait]
pub trait CaseStore: Send + Sync {
    async fn list_residents(&self) -> Result<Vec<Resident>, AppError>;
    async fn get_resident(&self, id: Uuid) -> Result<Option<Resident>, AppError>;
    async fn add_resident(&self, resident: Resident) -> Result<Resident, AppError>;
    async fn update_resident(
        &self,
        id: Uuid,
        update: UpdateResidentPayload,
    ) -> Result<Option<Resident>, AppError>;

    async fn list_evaluations(&self, resident_id: Option<Uuid>)
    -> Result<Vec<Evaluation>, AppError>;
    async fn add_evaluation(&self, evaluation: Evaluation) -> Result<Evaluation, AppError>;

    async fn list_appointments(
        &self,
        resident_id: Option<Uuid>,
    ) -> Result<Vec<Appointment>, AppError>;
    async fn add_appointment(&self, appointment: Appointment) -> Result<Appointment, AppError>;

    async fn list_substance_histories(
        &self,
        resident_id: Option<Uuid>,
    ) -> Result<Vec<SubstanceHistory>, AppError>;
    async fn add_substance_history(
        &self,
        history: SubstanceHistory,
    ) -> Result<SubstanceHistory, AppError>;
}
