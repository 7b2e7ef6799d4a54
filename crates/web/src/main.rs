use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod catalog;
mod config;
mod error;
mod features;
mod state;
mod store;

use catalog::EventCatalog;
use config::Config;
use scoring::{BucketRow, PercentileTable, ScoreEngine, ScoringSystemRegistry, StandardsModel};
use state::AppState;
use store::ScoreStore;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::systems::handlers::list_systems,
        features::systems::handlers::get_system,
        features::scores::handlers::calculate_score,
        features::scores::handlers::submit_score,
        features::scores::handlers::verify_score,
        features::events::handlers::list_events,
        features::events::handlers::activity_leaderboard,
        features::events::handlers::overall_leaderboard,
        features::events::handlers::team_leaderboard,
        features::events::handlers::team_overall_leaderboard,
    ),
    components(
        schemas(
            scoring::dto::scores::SubmitScoreRequest,
            scoring::dto::scores::SubmitScoreResponse,
            scoring::dto::scores::VerifyScoreRequest,
            scoring::dto::leaderboards::ActivityBoardResponse,
            scoring::dto::leaderboards::OverallBoardResponse,
            scoring::dto::leaderboards::TeamBoardResponse,
            scoring::dto::leaderboards::TeamOverallBoardResponse,
            scoring::models::ScoringSystem,
            scoring::models::SystemSummary,
            scoring::models::ScoringCategory,
            scoring::models::InputType,
            scoring::models::Calculation,
            scoring::models::RawValue,
            scoring::models::ScoreRequest,
            scoring::models::ScoredPerformance,
            scoring::models::Score,
            scoring::models::Sex,
            scoring::models::Activity,
            scoring::models::TeamScoringMethod,
            scoring::models::TeamScore,
            scoring::models::TeamOverallScore,
            scoring::models::WorkoutScore,
            scoring::models::IndividualStanding,
            scoring::models::OverallStanding,
            catalog::EventDefinition,
            catalog::TeamEntry,
        )
    ),
    tags(
        (name = "systems", description = "Scoring system catalog"),
        (name = "scores", description = "Score calculation, submission and verification"),
        (name = "events", description = "Configured events"),
        (name = "leaderboards", description = "Ranked individual and team boards"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting competition scoring API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let engine = build_engine(&config)?;
    let catalog = load_catalog(&config)?;
    tracing::info!(events = catalog.events().len(), "Event catalog ready");

    let state = AppState {
        engine: Arc::new(engine),
        catalog: Arc::new(catalog),
        scores: ScoreStore::default(),
    };

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/systems", features::systems::routes::routes())
        .nest("/api/scores", features::scores::routes::routes())
        .nest("/api/events", features::events::routes::routes())
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Engine with either the built-in percentile table or one loaded from the
/// file named by `STANDARDS_FILE`.
fn build_engine(config: &Config) -> anyhow::Result<ScoreEngine> {
    let Some(path) = &config.standards_file else {
        tracing::info!("Using built-in percentile table");
        return Ok(ScoreEngine::with_defaults());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read standards file {path}"))?;
    let rows: Vec<BucketRow> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse standards file {path}"))?;
    let table = PercentileTable::from_rows(rows);
    tracing::info!(buckets = table.len(), "Loaded percentile table from {}", path);
    Ok(ScoreEngine::new(
        ScoringSystemRegistry::builtin(),
        Box::new(StandardsModel::new(table)),
    ))
}

/// Catalog from the file named by `EVENT_FILE`, or an empty one. The service
/// still calculates and stores personal scores without any events.
fn load_catalog(config: &Config) -> anyhow::Result<EventCatalog> {
    let Some(path) = &config.event_file else {
        tracing::warn!("EVENT_FILE not set, starting with an empty event catalog");
        return Ok(EventCatalog::empty());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event file {path}"))?;
    EventCatalog::from_json_str(&raw).with_context(|| format!("Failed to parse event file {path}"))
}
