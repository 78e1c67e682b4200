// src/docs.rs

use crate::handlers;
use crate::models;
use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,

        // --- Users ---
        handlers::auth::get_me,
        handlers::auth::update_profile,
        handlers::auth::change_password,

        // --- Admin ---
        handlers::users::list_users,
        handlers::users::set_role,
        handlers::users::create_user_fn,

        // --- Residents ---
        handlers::residents::list_residents,
        handlers::residents::get_resident,
        handlers::residents::create_resident,
        handlers::residents::update_resident,

        // --- Clinical ---
        handlers::clinical::list_evaluations,
        handlers::clinical::create_evaluation,
        handlers::clinical::list_appointments,
        handlers::clinical::create_appointment,
        handlers::clinical::list_substance_histories,
        handlers::clinical::create_substance_history,

        // --- Dashboard ---
        handlers::dashboard::get_stats,

        // --- Settings ---
        handlers::settings::get_institution,
        handlers::settings::update_institution,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::User,
            models::auth::Profile,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,
            models::auth::UpdateProfilePayload,
            models::auth::ChangePasswordPayload,
            models::auth::SessionView,

            // --- RBAC ---
            models::rbac::AppRole,
            models::rbac::RoleAssignment,
            models::rbac::UserWithRole,
            models::rbac::UpdateRolePayload,
            handlers::users::CreateUserFnPayload,

            // --- Residents ---
            models::resident::AccommodationStatus,
            models::resident::Gender,
            models::resident::MaritalStatus,
            models::resident::Address,
            models::resident::EmergencyContact,
            models::resident::Resident,
            models::resident::CreateResidentPayload,
            models::resident::UpdateResidentPayload,

            // --- Clinical ---
            models::clinical::SubstanceType,
            models::clinical::ConsumptionMethod,
            models::clinical::FrequencyOfUse,
            models::clinical::EvaluationType,
            models::clinical::AppointmentType,
            models::clinical::SubstanceHistory,
            models::clinical::CreateSubstanceHistoryPayload,
            models::clinical::Evaluation,
            models::clinical::CreateEvaluationPayload,
            models::clinical::Appointment,
            models::clinical::CreateAppointmentPayload,

            // --- Dashboard ---
            models::dashboard::DashboardStats,

            // --- Settings ---
            models::settings::Institution,
            models::settings::UpdateInstitutionPayload,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Users", description = "Dados do Usuário e Perfil"),
        (name = "Admin", description = "Gestão de Usuários e Cargos (somente admin)"),
        (name = "Residents", description = "Cadastro e Acompanhamento de Acolhidos"),
        (name = "Clinical", description = "Avaliações, Atendimentos e Histórico de Substâncias"),
        (name = "Dashboard", description = "Indicadores do Painel"),
        (name = "Settings", description = "Dados da Instituição")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
