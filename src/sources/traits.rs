use crate::model::{NutrientAmounts, SourceError};

/// Turns a free-text meal description into ingredient names.
#[async_trait::async_trait]
pub trait IngredientExtractor: Send + Sync {
    async fn extract(&self, food_description: &str) -> Result<Vec<String>, SourceError>;
}

/// Looks up raw nutrient amounts (source units) for a single ingredient.
#[async_trait::async_trait]
pub trait NutrientSource: Send + Sync {
    async fn lookup(&self, ingredient: &str) -> Result<NutrientAmounts, SourceError>;
}
