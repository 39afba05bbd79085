use crate::analyzer::percentages::{merge_recommendation, rda_percentages};
use crate::model::{
    FetchNutrientDataRequest, NutrientUpdate, ProcessFoodRequest, ProcessFoodResponse,
};
use crate::parser::clean_ingredient_list;
use crate::server::error::AppError;
use crate::server::AppState;
use crate::sources::fetch_all;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Json;
use tracing::{debug, info};

const INVALID_PAYLOAD: &str = "Invalid request payload";

pub async fn process_food(
    State(state): State<AppState>,
    payload: Result<Json<ProcessFoodRequest>, JsonRejection>,
) -> Result<Json<ProcessFoodResponse>, AppError> {
    let Json(request) = payload.map_err(|e| {
        debug!("Rejected process-food payload: {}", e);
        AppError::BadRequest(INVALID_PAYLOAD.into())
    })?;

    let description = request.food_description.trim();
    if description.is_empty() {
        return Err(AppError::BadRequest("Food description is required".into()));
    }
    info!("Processing food description: {:?}", description);

    let ingredients = state
        .extractor
        .extract(description)
        .await
        .map(clean_ingredient_list)
        .map_err(|e| AppError::Upstream(format!("Error extracting ingredients: {}", e)))?;
    info!("Extracted {} ingredients: {:?}", ingredients.len(), ingredients);

    let raw = fetch_all(state.nutrients.as_ref(), &ingredients)
        .await
        .map_err(|e| AppError::Upstream(format!("Error fetching nutrient data: {}", e)))?;

    let analysis = state.analyzer.analyze(&raw);
    info!(
        "Meal is low or missing {} nutrients",
        analysis.low_and_missing.len()
    );

    let recommender = state.recommender.clone();
    let missing = analysis.low_and_missing.clone();
    let count = state.recommendation_count;
    let suggestions = tokio::task::spawn_blocking(move || recommender.recommend(&missing, count))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;
    info!("Suggesting {} foods", suggestions.len());

    Ok(Json(ProcessFoodResponse {
        ingredients,
        nutrients: analysis.per_ingredient,
        missing_nutrients: analysis.low_and_missing,
        suggestions,
    }))
}

pub async fn fetch_nutrient_data(
    State(state): State<AppState>,
    payload: Result<Json<FetchNutrientDataRequest>, JsonRejection>,
) -> Result<Json<NutrientUpdate>, AppError> {
    let Json(request) = payload.map_err(|e| {
        debug!("Rejected fetch-nutrient-data payload: {}", e);
        AppError::BadRequest(INVALID_PAYLOAD.into())
    })?;

    let description = request.food_description.trim();
    let current = match request.current_nutrients {
        Some(current) if !description.is_empty() => current,
        _ => {
            return Err(AppError::BadRequest(
                "Food description and current nutrients are required".into(),
            ));
        }
    };
    info!("Merging suggested food {:?} into current meal", description);

    let amounts = state
        .nutrients
        .lookup(description)
        .await
        .map_err(|e| AppError::Upstream(format!("Error fetching nutrient data: {}", e)))?;

    let update = merge_recommendation(&current, &rda_percentages(&amounts));
    info!("{} nutrients changed", update.changed_nutrients.len());
    Ok(Json(update))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
