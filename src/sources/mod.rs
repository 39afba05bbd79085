// Upstream services: ingredient extraction and nutrient lookup

pub mod gemini;
pub mod nutritionix;
pub mod traits;

pub use gemini::GeminiExtractor;
pub use nutritionix::NutritionixSource;
pub use traits::{IngredientExtractor, NutrientSource};

use crate::model::{NutrientAmounts, SourceError};
use futures::future::try_join_all;
use std::collections::BTreeMap;
use tracing::info;

/// Looks up every ingredient concurrently. The first failure aborts the batch.
pub async fn fetch_all(
    source: &dyn NutrientSource,
    ingredients: &[String],
) -> Result<BTreeMap<String, NutrientAmounts>, SourceError> {
    info!("Fetching nutrients for {} ingredients...", ingredients.len());
    let lookups = ingredients.iter().map(|ingredient| async move {
        source
            .lookup(ingredient)
            .await
            .map(|amounts| (ingredient.clone(), amounts))
            .map_err(|e| SourceError::Ingredient {
                ingredient: ingredient.clone(),
                source: Box::new(e),
            })
    });
    Ok(try_join_all(lookups).await?.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TableSource;

    #[async_trait::async_trait]
    impl NutrientSource for TableSource {
        async fn lookup(&self, ingredient: &str) -> Result<NutrientAmounts, SourceError> {
            match ingredient {
                "broken" => Err(SourceError::EmptyResponse("test")),
                other => Ok([("Iron".to_string(), other.len() as f64)].into_iter().collect()),
            }
        }
    }

    #[tokio::test]
    async fn collects_every_ingredient() {
        let ingredients = vec!["egg".to_string(), "toast".to_string()];
        let result = fetch_all(&TableSource, &ingredients).await.unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result["toast"]["Iron"], 5.0);
    }

    #[tokio::test]
    async fn names_the_failing_ingredient() {
        let ingredients = vec!["egg".to_string(), "broken".to_string()];
        let err = fetch_all(&TableSource, &ingredients).await.unwrap_err();
        assert!(err.to_string().contains("'broken'"));
    }
}
