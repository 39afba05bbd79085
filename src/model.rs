// Core structs: NutrientTable, wire payloads, FoodItem, error enums
use crate::nutrients::Nutrient;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Percentage of RDA keyed by nutrient name. Absent keys read as "no data".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutrientTable(BTreeMap<String, f64>);

impl NutrientTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn percentage(&self, nutrient: Nutrient) -> Option<f64> {
        self.get(nutrient.name())
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.0.insert(name.into(), value);
    }

    /// Adds `value` to whatever is already recorded for `name`.
    pub fn add(&mut self, name: &str, value: f64) {
        *self.0.entry(name.to_string()).or_insert(0.0) += value;
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut f64> {
        self.0.values_mut()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for NutrientTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Nutrient table per ingredient, as returned by the food-processing endpoint.
pub type IngredientNutrients = BTreeMap<String, NutrientTable>;

/// Raw nutrient amounts (source units) keyed by nutrient name.
pub type NutrientAmounts = BTreeMap<String, f64>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessFoodRequest {
    pub food_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessFoodResponse {
    pub ingredients: Vec<String>,
    pub nutrients: IngredientNutrients,
    pub missing_nutrients: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchNutrientDataRequest {
    #[serde(default)]
    pub food_description: String,
    #[serde(default)]
    pub current_nutrients: Option<NutrientTable>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NutrientUpdate {
    pub nutrients: NutrientTable,
    pub changed_nutrients: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// One row of the food dataset used for recommendations.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    pub fdc_id: String,
    pub description: String,
    pub nutrients: BTreeMap<String, f64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{0} credentials not set")]
    MissingCredentials(&'static str),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{service} API error [{status}]: {body}")]
    Api {
        service: &'static str,
        status: u16,
        body: String,
    },
    #[error("no candidates returned from {0}")]
    EmptyResponse(&'static str),
    #[error("lookup failed for '{ingredient}': {source}")]
    Ingredient {
        ingredient: String,
        #[source]
        source: Box<SourceError>,
    },
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot open dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset must have a header and at least one data row")]
    Empty,
}

/// Failures surfaced to the user by the client. `Display` is the inline message.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Api(String),
    #[error("An unexpected error occurred.")]
    Transport(#[from] reqwest::Error),
}
