// HTTP surface consumed by the front-end

pub mod error;
pub mod handlers;

pub use error::AppError;

use crate::analyzer::Analyzer;
use crate::recommender::Recommender;
use crate::sources::{IngredientExtractor, NutrientSource};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn IngredientExtractor>,
    pub nutrients: Arc<dyn NutrientSource>,
    pub analyzer: Arc<dyn Analyzer>,
    pub recommender: Arc<Recommender>,
    pub recommendation_count: usize,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/process-food", post(handlers::process_food))
        .route("/fetch-nutrient-data", post(handlers::fetch_nutrient_data))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
