//src/main.rs

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;
mod store;

use crate::config::AppState;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // Rotas do próprio usuário
    let user_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .route("/me/profile", put(handlers::auth::update_profile))
        .route("/me/password", put(handlers::auth::change_password));

    // Gestão de usuários (o guardião de cargo fica nos handlers)
    let admin_routes = Router::new()
        .route("/users", get(handlers::users::list_users))
        .route("/users/{user_id}/role", put(handlers::users::set_role));

    let resident_routes = Router::new()
        .route(
            "/",
            post(handlers::residents::create_resident).get(handlers::residents::list_residents),
        )
        .route(
            "/{id}",
            get(handlers::residents::get_resident).put(handlers::residents::update_resident),
        );

    let dashboard_routes = Router::new().route("/stats", get(handlers::dashboard::get_stats));

    let settings_routes = Router::new().route(
        "/institution",
        get(handlers::settings::get_institution).put(handlers::settings::update_institution),
    );

    // Tudo que exige sessão passa por um único auth_guard
    let protected_routes = Router::new()
        .nest("/users", user_routes)
        .nest("/admin", admin_routes)
        .nest("/residents", resident_routes)
        .route(
            "/evaluations",
            post(handlers::clinical::create_evaluation).get(handlers::clinical::list_evaluations),
        )
        .route(
            "/appointments",
            post(handlers::clinical::create_appointment)
                .get(handlers::clinical::list_appointments),
        )
        .route(
            "/substance-histories",
            post(handlers::clinical::create_substance_history)
                .get(handlers::clinical::list_substance_histories),
        )
        .nest("/dashboard", dashboard_routes)
        .nest("/settings", settings_routes)
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // A função privilegiada valida o próprio bearer (contrato fixo de
    // respostas), então fica fora do auth_guard.
    let function_routes = Router::new().route("/create_user", post(handlers::users::create_user_fn));

    let api_routes = Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/auth", auth_routes)
        .nest("/functions", function_routes)
        .merge(protected_routes);

    // Combina tudo no router principal
    let app = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .nest("/api", api_routes)
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", addr);
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
