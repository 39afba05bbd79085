// Typed client for the food-processing endpoints
use crate::model::{
    ClientError, ErrorBody, FetchNutrientDataRequest, NutrientTable, NutrientUpdate,
    ProcessFoodRequest, ProcessFoodResponse,
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

pub const PROCESS_FALLBACK: &str = "An error occurred while processing the food.";
pub const RECOMMENDATION_FALLBACK: &str = "Failed to fetch nutrient data for the recommendation.";

#[async_trait::async_trait]
pub trait CodexApi: Send + Sync {
    async fn process_food(&self, food_description: &str)
    -> Result<ProcessFoodResponse, ClientError>;

    async fn fetch_nutrient_data(
        &self,
        food_description: &str,
        current_nutrients: &NutrientTable,
    ) -> Result<NutrientUpdate, ClientError>;
}

pub struct CodexClient {
    client: Client,
    base_url: String,
}

impl CodexClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Decodes a success body, or turns an error status into the message the
/// server put in `{ "error": ... }`, falling back to `fallback`.
async fn read_response<T: DeserializeOwned>(
    response: Response,
    fallback: &str,
) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = response.text().await.unwrap_or_default();
    warn!("Codex server responded [{}]: {}", status, body);
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .map(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_string());
    Err(ClientError::Api(message))
}

#[async_trait::async_trait]
impl CodexApi for CodexClient {
    async fn process_food(
        &self,
        food_description: &str,
    ) -> Result<ProcessFoodResponse, ClientError> {
        info!("Submitting food description...");
        let response = self
            .client
            .post(self.url("/api/process-food"))
            .json(&ProcessFoodRequest {
                food_description: food_description.to_string(),
            })
            .send()
            .await?;
        read_response(response, PROCESS_FALLBACK).await
    }

    async fn fetch_nutrient_data(
        &self,
        food_description: &str,
        current_nutrients: &NutrientTable,
    ) -> Result<NutrientUpdate, ClientError> {
        info!("Requesting nutrients for suggestion {:?}", food_description);
        let response = self
            .client
            .post(self.url("/fetch-nutrient-data"))
            .json(&FetchNutrientDataRequest {
                food_description: food_description.to_string(),
                current_nutrients: Some(current_nutrients.clone()),
            })
            .send()
            .await?;
        read_response(response, RECOMMENDATION_FALLBACK).await
    }
}
