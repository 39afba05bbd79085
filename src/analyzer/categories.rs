use crate::model::NutrientTable;
use crate::nutrients::{Category, Nutrient};
use serde::Serialize;

/// A nutrient at or above this percentage counts toward its category.
pub const SATISFIED_THRESHOLD: f64 = 5.0;

pub const TOTAL_LABEL: &str = "Total";
pub const TOTAL_COLOR: &str = "#e74c3c";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub total: usize,
    pub satisfied: usize,
}

impl CategorySummary {
    /// Orb fill level, 0 to 100.
    pub fn fill_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.satisfied as f64 / self.total as f64 * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    /// One entry per category, in orb display order.
    pub categories: Vec<(Category, CategorySummary)>,
    pub total: CategorySummary,
}

impl CategoryBreakdown {
    pub fn get(&self, category: Category) -> Option<CategorySummary> {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, s)| *s)
    }
}

pub fn is_satisfied(table: &NutrientTable, nutrient: Nutrient) -> bool {
    table
        .percentage(nutrient)
        .is_some_and(|p| p >= SATISFIED_THRESHOLD)
}

pub fn summarize(table: &NutrientTable) -> CategoryBreakdown {
    let categories: Vec<(Category, CategorySummary)> = Category::ALL
        .into_iter()
        .map(|category| {
            let summary = CategorySummary {
                total: category.nutrients().count(),
                satisfied: category
                    .nutrients()
                    .filter(|&n| is_satisfied(table, n))
                    .count(),
            };
            (category, summary)
        })
        .collect();

    let total = categories.iter().fold(
        CategorySummary {
            total: 0,
            satisfied: 0,
        },
        |acc, (_, s)| CategorySummary {
            total: acc.total + s.total,
            satisfied: acc.satisfied + s.satisfied,
        },
    );

    CategoryBreakdown { categories, total }
}
