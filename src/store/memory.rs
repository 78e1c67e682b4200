// src/store/memory.rs

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        clinical::{Appointment, Evaluation, SubstanceHistory},
        resident::{Resident, UpdateResidentPayload},
    },
    store::{CaseStore, fixtures},
};

// Backend de demonstração: coleções em memória, semeadas na subida do
// processo e mutadas apenas localmente. A integridade referencial de
// resident_id NÃO é checada aqui (fica por conta do chamador, como no
// backend Postgres fica por conta das FKs).
pub struct MemoryCaseStore {
    residents: RwLock<Vec<Resident>>,
    evaluations: RwLock<Vec<Evaluation>>,
    appointments: RwLock<Vec<Appointment>>,
    substance_histories: RwLock<Vec<SubstanceHistory>>,
}

impl MemoryCaseStore {
    pub fn empty() -> Self {
        Self {
            residents: RwLock::new(Vec::new()),
            evaluations: RwLock::new(Vec::new()),
            appointments: RwLock::new(Vec::new()),
            substance_histories: RwLock::new(Vec::new()),
        }
    }

    pub fn seeded() -> Self {
        let seed = fixtures::seed();
        Self {
            residents: RwLock::new(seed.residents),
            evaluations: RwLock::new(seed.evaluations),
            appointments: RwLock::new(seed.appointments),
            substance_histories: RwLock::new(seed.substance_histories),
        }
    }
}

#[async_trait]
impl CaseStore for MemoryCaseStore {
    async fn list_residents(&self) -> Result<Vec<Resident>, AppError> {
        Ok(self.residents.read().await.clone())
    }

    async fn get_resident(&self, id: Uuid) -> Result<Option<Resident>, AppError> {
        Ok(self
            .residents
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn add_resident(&self, resident: Resident) -> Result<Resident, AppError> {
        // Mais novo primeiro
        self.residents.write().await.insert(0, resident.clone());
        Ok(resident)
    }

    async fn update_resident(
        &self,
        id: Uuid,
        update: UpdateResidentPayload,
    ) -> Result<Option<Resident>, AppError> {
        let mut residents = self.residents.write().await;
        match residents.iter_mut().find(|r| r.id == id) {
            Some(resident) => {
                resident.apply_update(update, Utc::now());
                Ok(Some(resident.clone()))
            }
            // No-op silencioso: id desconhecido não é erro
            None => Ok(None),
        }
    }

    async fn list_evaluations(
        &self,
        resident_id: Option<Uuid>,
    ) -> Result<Vec<Evaluation>, AppError> {
        let evaluations = self.evaluations.read().await;
        Ok(match resident_id {
            Some(id) => evaluations
                .iter()
                .filter(|e| e.resident_id == id)
                .cloned()
                .collect(),
            None => evaluations.clone(),
        })
    }

    async fn add_evaluation(&self, evaluation: Evaluation) -> Result<Evaluation, AppError> {
        self.evaluations.write().await.insert(0, evaluation.clone());
        Ok(evaluation)
    }

    async fn list_appointments(
        &self,
        resident_id: Option<Uuid>,
    ) -> Result<Vec<Appointment>, AppError> {
        let appointments = self.appointments.read().await;
        Ok(match resident_id {
            Some(id) => appointments
                .iter()
                .filter(|a| a.resident_id == id)
                .cloned()
                .collect(),
            None => appointments.clone(),
        })
    }

    async fn add_appointment(&self, appointment: Appointment) -> Result<Appointment, AppError> {
        self.appointments
            .write()
            .await
            .insert(0, appointment.clone());
        Ok(appointment)
    }

    async fn list_substance_histories(
        &self,
        resident_id: Option<Uuid>,
    ) -> Result<Vec<SubstanceHistory>, AppError> {
        let histories = self.substance_histories.read().await;
        Ok(match resident_id {
            Some(id) => histories
                .iter()
                .filter(|h| h.resident_id == id)
                .cloned()
                .collect(),
            None => histories.clone(),
        })
    }

    async fn add_substance_history(
        &self,
        history: SubstanceHistory,
    ) -> Result<SubstanceHistory, AppError> {
        self.substance_histories
            .write()
            .await
            .insert(0, history.clone());
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::clinical::AppointmentType;

    fn appointment(objective: &str) -> Appointment {
        let now = Utc::now();
        Appointment {
            id: Uuid::new_v4(),
            resident_id: Uuid::new_v4(),
            date: now,
            kind: AppointmentType::Individual,
            professional_id: Uuid::new_v4(),
            professional_name: "Dra. Patrícia Mendes".into(),
            objective: objective.into(),
            report: "Sessão produtiva.".into(),
            referrals: None,
            next_steps: None,
            created_at: now,
        }
    }

    #[tokio::test]
    async fn adicionar_insere_no_topo() {
        let store = MemoryCaseStore::empty();
        let a = appointment("a");
        let b = appointment("b");
        store.add_appointment(a.clone()).await.unwrap();
        store.add_appointment(b.clone()).await.unwrap();

        let all = store.list_appointments(None).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, b.id);
        assert_eq!(all[1].id, a.id);
    }

    #[tokio::test]
    async fn update_de_id_desconhecido_e_noop_silencioso() {
        let store = MemoryCaseStore::seeded();
        let before = store.list_residents().await.unwrap();

        let result = store
            .update_resident(Uuid::new_v4(), UpdateResidentPayload::default())
            .await
            .unwrap();

        assert!(result.is_none());
        let after = store.list_residents().await.unwrap();
        assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(after.iter()) {
            assert_eq!(b.id, a.id);
            assert_eq!(b.updated_at, a.updated_at);
        }
    }

    #[tokio::test]
    async fn update_conhecido_faz_merge_e_carimba_updated_at() {
        let store = MemoryCaseStore::seeded();
        let first = store.list_residents().await.unwrap()[0].clone();

        let updated = store
            .update_resident(
                first.id,
                UpdateResidentPayload {
                    education: Some("Ensino Superior Completo".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .expect("acolhido semeado existe");

        assert_eq!(updated.education, "Ensino Superior Completo");
        // Campos não enviados ficam intactos
        assert_eq!(updated.full_name, first.full_name);
        assert!(updated.updated_at > first.updated_at);
    }

    #[tokio::test]
    async fn filtro_por_acolhido() {
        let store = MemoryCaseStore::seeded();
        let residents = store.list_residents().await.unwrap();
        let target = residents.last().unwrap().id;

        let filtered = store.list_evaluations(Some(target)).await.unwrap();
        assert!(filtered.iter().all(|e| e.resident_id == target));
    }
}
