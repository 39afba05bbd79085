// Analyzer module: aggregates submodules for the different views of a meal.

pub mod categories;
pub mod percentages;
pub mod severity;

use crate::model::{IngredientNutrients, NutrientAmounts, NutrientTable};
use std::collections::BTreeMap;
use tracing::debug;

pub use categories::{summarize, CategoryBreakdown, CategorySummary};
pub use severity::{classify, Severity};

/// Result of analyzing one meal.
#[derive(Debug, Clone, PartialEq)]
pub struct MealAnalysis {
    pub per_ingredient: IngredientNutrients,
    pub totals: NutrientTable,
    pub low_and_missing: Vec<String>,
}

/// Trait defining the interface for a meal analyzer.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, raw: &BTreeMap<String, NutrientAmounts>) -> MealAnalysis;
}

pub struct AnalyzerImpl;

impl AnalyzerImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AnalyzerImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for AnalyzerImpl {
    /// Converts raw amounts to RDA percentages, totals the meal and lists what is lacking.
    fn analyze(&self, raw: &BTreeMap<String, NutrientAmounts>) -> MealAnalysis {
        let per_ingredient: IngredientNutrients = raw
            .iter()
            .map(|(ingredient, amounts)| (ingredient.clone(), percentages::rda_percentages(amounts)))
            .collect();

        let totals = percentages::meal_totals(&per_ingredient);
        let low_and_missing = percentages::low_and_missing(&totals);
        debug!(
            "Analyzed {} ingredients: {} nutrients present, {} low or missing",
            per_ingredient.len(),
            totals.len(),
            low_and_missing.len()
        );

        MealAnalysis {
            per_ingredient,
            totals,
            low_and_missing,
        }
    }
}
