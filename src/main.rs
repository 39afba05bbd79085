use nutrimancer_codex::analyzer::AnalyzerImpl;
use nutrimancer_codex::config::load_config;
use nutrimancer_codex::recommender::{FoodDataset, Recommender};
use nutrimancer_codex::server::{create_router, AppState};
use nutrimancer_codex::sources::{GeminiExtractor, NutritionixSource};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nutrimancer_codex=info,tower_http=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    std::panic::set_hook(Box::new(|panic_info| {
        error!("Panic occurred: {}", panic_info);
    }));

    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.json".into());
    let config = load_config(&config_path)?;
    info!("Configuration loaded from {}", config_path);

    if config.gemini.api_key.is_empty() {
        warn!("No Gemini API key configured; ingredient extraction will fail");
    }
    if config.nutritionix.app_id.is_empty() || config.nutritionix.app_key.is_empty() {
        warn!("No Nutritionix credentials configured; nutrient lookups will fail");
    }

    let dataset = FoodDataset::load(&config.dataset_path)?;

    let state = AppState {
        extractor: Arc::new(GeminiExtractor::new(&config.gemini)?),
        nutrients: Arc::new(NutritionixSource::new(&config.nutritionix)?),
        analyzer: Arc::new(AnalyzerImpl::new()),
        recommender: Arc::new(Recommender::new(dataset)),
        recommendation_count: config.recommendation_count,
    };

    let app = create_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
