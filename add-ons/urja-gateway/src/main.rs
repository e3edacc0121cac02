//! Axum-based API gateway: entry point for the Urja assistant. Config-driven
//! via CoreConfig; all tables and model adapters are wired here at startup.

mod handlers;

use axum::extract::State;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use urja_core::{ChatRouter, CoreConfig, KnowledgeBase, QuizBank, SchemeTable};
use urja_models::{GenModel, LlmMode, QaModel};

/// Pre-flight check: config loads, knowledge document status, port available.
fn run_verify() -> Result<(), String> {
    let config = CoreConfig::load().map_err(|e| format!("Config load failed: {}", e))?;

    print!("Checking knowledge document {}... ", config.knowledge_path);
    if std::path::Path::new(&config.knowledge_path).exists() {
        println!("OK");
    } else {
        println!("missing (built-in default will be used)");
    }

    let addr = format!("{}:{}", config.host, config.port);
    print!("Checking {}... ", addr);
    match std::net::TcpListener::bind(&addr) {
        Ok(listener) => {
            drop(listener);
            println!("OK (available)");
        }
        Err(e) => {
            return Err(format!("Address {} blocked: {}", addr, e));
        }
    }

    println!("\nAll checks passed. Ready to start gateway.");
    Ok(())
}

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!(
            "[urja-gateway] .env not loaded: {} (using system environment)",
            e
        );
    }

    // Handle --verify flag for pre-flight check
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--verify") {
        match run_verify() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("PRE-FLIGHT FAILED: {}", e);
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(CoreConfig::load().expect("load CoreConfig"));
    let knowledge = Arc::new(KnowledgeBase::load_path(&config.knowledge_path));
    tracing::info!(
        tips = knowledge.energy_tips.len(),
        "knowledge base loaded ({} context chars)",
        knowledge.faqs_context.len()
    );

    let mode = LlmMode::from_config(&config.llm_mode);
    let router = Arc::new(ChatRouter::new(
        Arc::clone(&knowledge),
        QuizBank::builtin(),
        SchemeTable::builtin(),
        Arc::new(QaModel::with_mode(mode)),
        Arc::new(GenModel::with_mode(mode)),
    ));

    let app = build_app(AppState {
        config: Arc::clone(&config),
        router,
    });

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("{} listening on {}", config.app_name, addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr).await.unwrap(),
        app,
    )
    .await
    .unwrap();
}

fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(handlers::chat))
        .route("/weekly-tip", get(handlers::weekly_tip))
        .route("/v1/status", get(status))
        .route("/api/v1/health", get(health))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<CoreConfig>,
    pub(crate) router: Arc<ChatRouter>,
}

/// GET /api/v1/health – liveness check for UI and scripts.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

/// GET /v1/status – app identity and knowledge stats.
async fn status(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    let knowledge = state.router.knowledge();
    axum::Json(serde_json::json!({
        "app_name": state.config.app_name,
        "port": state.config.port,
        "llm_mode": state.config.llm_mode,
        "knowledge": {
            "faqs_context_chars": knowledge.faqs_context.len(),
            "energy_tips": knowledge.energy_tips.len(),
        }
    }))
}
