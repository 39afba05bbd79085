// Food recommendations for a meal's deficiencies

pub mod dataset;
pub mod similarity;

pub use dataset::FoodDataset;
pub use similarity::cosine_similarity;

use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub description: String,
    pub similarity: f64,
}

/// Ranks dataset foods by how well their nutrient profile points toward
/// the nutrients a meal lacks.
pub struct Recommender {
    dataset: FoodDataset,
}

impl Recommender {
    pub fn new(dataset: FoodDataset) -> Self {
        Self { dataset }
    }

    /// One-hot vector over the dataset's nutrient columns.
    fn deficiency_vector(&self, deficiencies: &[String]) -> Vec<f64> {
        let wanted: HashSet<&str> = deficiencies.iter().map(String::as_str).collect();
        self.dataset
            .nutrient_names
            .iter()
            .map(|name| if wanted.contains(name.as_str()) { 1.0 } else { 0.0 })
            .collect()
    }

    /// Foods with a positive score, best first; equal scores keep dataset order.
    pub fn rank(&self, deficiencies: &[String]) -> Vec<Recommendation> {
        let target = self.deficiency_vector(deficiencies);
        let mut ranked: Vec<Recommendation> = self
            .dataset
            .foods
            .iter()
            .filter_map(|food| {
                let vector: Vec<f64> = self
                    .dataset
                    .nutrient_names
                    .iter()
                    .map(|name| food.nutrients.get(name).copied().unwrap_or(0.0))
                    .collect();
                let similarity = cosine_similarity(&vector, &target);
                (similarity > 0.0).then(|| Recommendation {
                    description: food.description.clone(),
                    similarity,
                })
            })
            .collect();

        ranked.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        ranked
    }

    pub fn recommend(&self, deficiencies: &[String], top_n: usize) -> Vec<String> {
        let ranked = self.rank(deficiencies);
        debug!(
            "{} of {} foods score above zero",
            ranked.len(),
            self.dataset.len()
        );
        ranked
            .into_iter()
            .take(top_n)
            .map(|r| r.description)
            .collect()
    }
}
