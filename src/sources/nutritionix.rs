use crate::config::NutritionixConfig;
use crate::model::{NutrientAmounts, SourceError};
use crate::nutrients::Nutrient;
use crate::sources::traits::NutrientSource;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
struct NaturalRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct FullNutrient {
    attr_id: u32,
    value: f64,
}

#[derive(Debug, Deserialize)]
struct Food {
    #[serde(default)]
    food_name: String,
    #[serde(default)]
    full_nutrients: Vec<FullNutrient>,
}

#[derive(Debug, Deserialize)]
struct NaturalResponse {
    #[serde(default)]
    foods: Vec<Food>,
}

/// Nutrient lookups against the Nutritionix natural-language endpoint.
pub struct NutritionixSource {
    client: Client,
    app_id: String,
    app_key: String,
    url: String,
}

impl NutritionixSource {
    pub fn new(config: &NutritionixConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(concat!("nutrimancer-codex/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &NutritionixConfig) -> Self {
        Self {
            client,
            app_id: config.app_id.clone(),
            app_key: config.app_key.clone(),
            url: format!("{}/v2/natural/nutrients", config.endpoint.trim_end_matches('/')),
        }
    }

    /// Picks the catalog nutrients out of `full_nutrients`. Repeated entries
    /// for one attribute are summed.
    fn map_nutrients(food: &Food) -> NutrientAmounts {
        let mut amounts = NutrientAmounts::new();
        for nutrient in Nutrient::ALL {
            let attr = nutrient.nutritionix_attr_id();
            for fnut in food.full_nutrients.iter().filter(|f| f.attr_id == attr) {
                *amounts.entry(nutrient.name().to_string()).or_insert(0.0) += fnut.value;
            }
        }
        amounts
    }
}

#[async_trait::async_trait]
impl NutrientSource for NutritionixSource {
    async fn lookup(&self, ingredient: &str) -> Result<NutrientAmounts, SourceError> {
        if self.app_id.is_empty() || self.app_key.is_empty() {
            return Err(SourceError::MissingCredentials("Nutritionix"));
        }

        let response = self
            .client
            .post(&self.url)
            .header("x-app-id", &self.app_id)
            .header("x-app-key", &self.app_key)
            .json(&NaturalRequest { query: ingredient })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "unknown".into());
            warn!("Nutritionix responded [{}] for '{}': {}", status, ingredient, body);
            return Err(SourceError::Api {
                service: "Nutritionix",
                status: status.as_u16(),
                body,
            });
        }

        let parsed: NaturalResponse = response.json().await?;
        let Some(food) = parsed.foods.first() else {
            debug!("Nutritionix knows no food for '{}'", ingredient);
            return Ok(NutrientAmounts::new());
        };

        let amounts = Self::map_nutrients(food);
        debug!(
            "Nutritionix matched '{}' as '{}' with {} nutrients",
            ingredient,
            food.food_name,
            amounts.len()
        );
        Ok(amounts)
    }
}
