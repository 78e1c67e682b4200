// src/config.rs

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, sync::Arc, time::Duration};

use crate::{
    db::{InstitutionRepository, ProfileRepository, RoleRepository, UserRepository},
    services::{AdminService, AuthService},
    store::{CaseStore, MemoryCaseStore, PgCaseStore},
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub admin_service: AdminService,
    pub institution_repo: InstitutionRepository,
    pub case_store: Arc<dyn CaseStore>,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let profile_repo = ProfileRepository::new(db_pool.clone());
        let role_repo = RoleRepository::new(db_pool.clone());
        let institution_repo = InstitutionRepository::new(db_pool.clone());

        let auth_service = AuthService::new(
            user_repo.clone(),
            profile_repo.clone(),
            role_repo.clone(),
            jwt_secret,
            db_pool.clone(),
        );
        let admin_service = AdminService::new(
            user_repo,
            profile_repo,
            role_repo,
            db_pool.clone(),
        );

        // As coleções clínicas têm backend configurável: `memory` é o modo
        // demonstração (semeado com fixtures, sem persistência); qualquer
        // outro valor cai no padrão Postgres, com persistência uniforme.
        let case_store: Arc<dyn CaseStore> = match env::var("CASE_STORAGE").as_deref() {
            Ok("memory") => {
                tracing::warn!("📦 CASE_STORAGE=memory: dados clínicos não serão persistidos");
                Arc::new(MemoryCaseStore::seeded())
            }
            _ => Arc::new(PgCaseStore::new(db_pool.clone())),
        };

        Ok(Self {
            db_pool,
            auth_service,
            admin_service,
            institution_repo,
            case_store,
        })
    }
}
