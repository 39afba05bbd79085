// Client-side meal session: what the user submitted, what is selected, what to draw.
use crate::analyzer::categories::{self, TOTAL_COLOR, TOTAL_LABEL};
use crate::analyzer::severity::{self, Severity, HIGHLIGHTED_MISSING_COLOR};
use crate::client::{CodexApi, RECOMMENDATION_FALLBACK};
use crate::model::{ClientError, IngredientNutrients, NutrientTable, NutrientUpdate, ProcessFoodResponse};
use crate::normalizer::normalize_suggestions;
use crate::nutrients::{Category, Nutrient};
use crate::utils::format_percentage;
use serde::Serialize;
use tracing::{info, warn};

/// Synthetic selection showing the sum over every ingredient.
pub const FULL_MEAL: &str = "Full Meal";

/// After a recommendation, present nutrients below this still count as lacking.
pub const RECOMMENDATION_LOW_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbView {
    pub label: &'static str,
    pub satisfied: usize,
    pub total: usize,
    pub fill_percentage: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientRow {
    pub name: &'static str,
    pub display_name: &'static str,
    pub percentage: Option<f64>,
    /// Hover text; only for nutrients with data.
    pub tooltip: Option<String>,
    pub severity: Severity,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPanel {
    pub label: &'static str,
    pub rows: Vec<NutrientRow>,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodexView {
    pub heading: String,
    /// Selectable sources, `Full Meal` first.
    pub sources: Vec<String>,
    pub orbs: Vec<OrbView>,
    pub panels: Vec<CategoryPanel>,
    pub low_on: Vec<String>,
    pub suggestions: Vec<String>,
    pub error: Option<String>,
    pub loading: bool,
    pub show_results: bool,
}

#[derive(Debug, Clone)]
pub struct MealSession {
    ingredients: Vec<String>,
    per_ingredient: IngredientNutrients,
    meal_totals: NutrientTable,
    selected: String,
    selected_table: NutrientTable,
    missing: Vec<String>,
    initial_missing: Vec<String>,
    suggestions: Vec<String>,
    highlighted: Vec<String>,
    loading: bool,
    error: Option<String>,
}

impl Default for MealSession {
    fn default() -> Self {
        Self::new()
    }
}

impl MealSession {
    pub fn new() -> Self {
        Self {
            ingredients: Vec::new(),
            per_ingredient: IngredientNutrients::new(),
            meal_totals: NutrientTable::new(),
            selected: FULL_MEAL.to_string(),
            selected_table: NutrientTable::new(),
            missing: Vec::new(),
            initial_missing: Vec::new(),
            suggestions: Vec::new(),
            highlighted: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn selected_table(&self) -> &NutrientTable {
        &self.selected_table
    }

    pub fn meal_totals(&self) -> &NutrientTable {
        &self.meal_totals
    }

    pub fn highlighted(&self) -> &[String] {
        &self.highlighted
    }

    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    /// Accepts a submission unless it is blank or one is already in flight.
    /// Returns the trimmed description to send.
    pub fn begin_submit(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() || self.loading {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(text.to_string())
    }

    pub fn finish_submit(&mut self, result: Result<ProcessFoodResponse, ClientError>) {
        self.loading = false;
        match result {
            Ok(response) => self.apply_analysis(response),
            Err(e) => {
                warn!("Food submission failed: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    pub async fn submit(&mut self, api: &dyn CodexApi, text: &str) {
        let Some(description) = self.begin_submit(text) else {
            return;
        };
        let result = api.process_food(&description).await;
        self.finish_submit(result);
    }

    fn apply_analysis(&mut self, response: ProcessFoodResponse) {
        let mut totals = NutrientTable::new();
        for ingredient in &response.ingredients {
            if let Some(table) = response.nutrients.get(ingredient) {
                for (name, pct) in table.iter() {
                    totals.add(name, pct);
                }
            }
        }
        info!(
            "Analysis received: {} ingredients, {} nutrients in meal",
            response.ingredients.len(),
            totals.len()
        );

        self.ingredients = response.ingredients;
        self.per_ingredient = response.nutrients;
        self.missing = response.missing_nutrients.clone();
        self.initial_missing = response.missing_nutrients;
        self.suggestions = response.suggestions;
        self.selected = FULL_MEAL.to_string();
        self.selected_table = totals.clone();
        self.meal_totals = totals;
        self.highlighted.clear();
    }

    pub fn select_ingredient(&mut self, name: &str) {
        self.highlighted.clear();
        if name == FULL_MEAL {
            self.selected = FULL_MEAL.to_string();
            self.selected_table = self.meal_totals.clone();
        } else {
            self.selected = name.to_string();
            self.selected_table = self.per_ingredient.get(name).cloned().unwrap_or_default();
        }
    }

    pub async fn choose_suggestion(&mut self, api: &dyn CodexApi, label: &str) {
        let result = api.fetch_nutrient_data(label, &self.meal_totals).await;
        self.apply_recommendation(label, result);
    }

    pub fn apply_recommendation(&mut self, label: &str, result: Result<NutrientUpdate, ClientError>) {
        match result {
            Ok(update) => {
                self.missing = below_threshold(&update.nutrients, RECOMMENDATION_LOW_THRESHOLD);
                self.selected = label.to_string();
                self.selected_table = update.nutrients;
                self.highlighted = update.changed_nutrients;
            }
            Err(e) => {
                warn!("Recommendation lookup failed: {}", e);
                self.error = Some(RECOMMENDATION_FALLBACK.to_string());
            }
        }
    }

    fn row_color(&self, nutrient: Nutrient, severity: Severity) -> &'static str {
        let name = nutrient.name();
        let highlighted = self.highlighted.iter().any(|n| n == name);
        let missing = self.missing.iter().any(|n| n == name);
        if highlighted && missing {
            HIGHLIGHTED_MISSING_COLOR
        } else {
            severity.color()
        }
    }

    pub fn view(&self) -> CodexView {
        let breakdown = categories::summarize(&self.selected_table);
        let mut orbs: Vec<OrbView> = breakdown
            .categories
            .iter()
            .map(|(category, summary)| OrbView {
                label: category.label(),
                satisfied: summary.satisfied,
                total: summary.total,
                fill_percentage: summary.fill_percentage(),
                color: category.color(),
            })
            .collect();
        orbs.push(OrbView {
            label: TOTAL_LABEL,
            satisfied: breakdown.total.satisfied,
            total: breakdown.total.total,
            fill_percentage: breakdown.total.fill_percentage(),
            color: TOTAL_COLOR,
        });

        let panels = Category::ALL
            .into_iter()
            .map(|category| CategoryPanel {
                label: category.label(),
                rows: category
                    .nutrients()
                    .map(|nutrient| {
                        let percentage = self.selected_table.percentage(nutrient);
                        let severity = severity::classify(percentage);
                        NutrientRow {
                            name: nutrient.name(),
                            display_name: nutrient.display_name(),
                            percentage,
                            tooltip: match (severity, percentage) {
                                (Severity::None, _) | (_, None) => None,
                                (_, Some(p)) => Some(format_percentage(p)),
                            },
                            severity,
                            color: self.row_color(nutrient, severity),
                        }
                    })
                    .collect(),
            })
            .collect();

        let sources = std::iter::once(FULL_MEAL.to_string())
            .chain(self.ingredients.iter().cloned())
            .collect();

        CodexView {
            heading: format!("Bioessence Extracted from: {}", self.selected),
            sources,
            orbs,
            panels,
            low_on: self.initial_missing.clone(),
            suggestions: normalize_suggestions(&self.suggestions),
            error: self.error.clone(),
            loading: self.loading,
            show_results: !self.loading && self.error.is_none() && !self.ingredients.is_empty(),
        }
    }
}

/// Present nutrients under `threshold`, catalog nutrients first.
fn below_threshold(table: &NutrientTable, threshold: f64) -> Vec<String> {
    let mut lacking: Vec<String> = table
        .iter()
        .filter(|(_, pct)| *pct < threshold)
        .map(|(name, _)| name.to_string())
        .collect();
    lacking.sort_by_key(|name| {
        Nutrient::from_name(name)
            .map(|n| n as usize)
            .unwrap_or(usize::MAX)
    });
    lacking
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Replays canned answers and records what was sent.
    struct FakeApi {
        analysis: Mutex<Option<Result<ProcessFoodResponse, ClientError>>>,
        update: Mutex<Option<Result<NutrientUpdate, ClientError>>>,
        sent: Mutex<Vec<(String, NutrientTable)>>,
    }

    impl FakeApi {
        fn new(
            analysis: Result<ProcessFoodResponse, ClientError>,
            update: Result<NutrientUpdate, ClientError>,
        ) -> Self {
            Self {
                analysis: Mutex::new(Some(analysis)),
                update: Mutex::new(Some(update)),
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl CodexApi for FakeApi {
        async fn process_food(&self, _: &str) -> Result<ProcessFoodResponse, ClientError> {
            self.analysis.lock().unwrap().take().expect("one analysis per test")
        }

        async fn fetch_nutrient_data(
            &self,
            food_description: &str,
            current_nutrients: &NutrientTable,
        ) -> Result<NutrientUpdate, ClientError> {
            self.sent
                .lock()
                .unwrap()
                .push((food_description.to_string(), current_nutrients.clone()));
            self.update.lock().unwrap().take().expect("one update per test")
        }
    }

    fn breakfast() -> ProcessFoodResponse {
        let mut nutrients = IngredientNutrients::new();
        nutrients.insert(
            "eggs".into(),
            [("Vitamin B12", 20.0), ("Choline", 30.0), ("Iron", 3.0)].into_iter().collect(),
        );
        nutrients.insert(
            "toast".into(),
            [("Iron", 6.0), ("Vitamin B1", 10.0)].into_iter().collect(),
        );
        ProcessFoodResponse {
            ingredients: vec!["eggs".into(), "toast".into()],
            nutrients,
            missing_nutrients: vec!["Vitamin C".into(), "Calcium".into()],
            suggestions: vec![
                "Fatty Acids, Salmon".into(),
                "Dairy, Store".into(),
                "dairy".into(),
            ],
        }
    }

    fn ok_update() -> Result<NutrientUpdate, ClientError> {
        Ok(NutrientUpdate {
            nutrients: [("Iron", 9.0), ("Vitamin C", 60.0), ("Calcium", 12.0)]
                .into_iter()
                .collect(),
            changed_nutrients: vec!["Vitamin C".into(), "Calcium".into()],
        })
    }

    #[tokio::test]
    async fn submit_builds_full_meal_totals() {
        let api = FakeApi::new(Ok(breakfast()), ok_update());
        let mut session = MealSession::new();
        session.submit(&api, "  eggs and toast ").await;

        assert!(!session.is_loading());
        assert_eq!(session.selected(), FULL_MEAL);
        assert_eq!(session.meal_totals().get("Iron"), Some(9.0));
        assert_eq!(session.selected_table().get("Choline"), Some(30.0));

        let view = session.view();
        assert!(view.show_results);
        assert_eq!(view.sources, vec!["Full Meal", "eggs", "toast"]);
        assert_eq!(view.suggestions, vec!["Salmon", "Dairy"]);
        assert_eq!(view.low_on, vec!["Vitamin C", "Calcium"]);
        assert_eq!(view.orbs.len(), 5);
        assert_eq!(view.orbs[4].label, "Total");
        // Iron, B12, B1, Choline reach 5 %.
        assert_eq!(view.orbs[4].satisfied, 4);
    }

    #[tokio::test]
    async fn blank_or_concurrent_submissions_are_ignored() {
        let mut session = MealSession::new();
        assert_eq!(session.begin_submit("   "), None);
        assert_eq!(session.begin_submit("soup").as_deref(), Some("soup"));
        assert!(session.is_loading());
        assert_eq!(session.begin_submit("more soup"), None);
        session.finish_submit(Err(ClientError::Api("Food description is required".into())));
        assert!(!session.is_loading());
        assert_eq!(session.error(), Some("Food description is required"));
        assert!(!session.view().show_results);
    }

    #[tokio::test]
    async fn selecting_sources_swaps_the_table() {
        let api = FakeApi::new(Ok(breakfast()), ok_update());
        let mut session = MealSession::new();
        session.submit(&api, "eggs and toast").await;

        session.select_ingredient("toast");
        assert_eq!(session.selected_table().get("Iron"), Some(6.0));
        assert_eq!(session.view().heading, "Bioessence Extracted from: toast");

        session.select_ingredient("unknown");
        assert!(session.selected_table().is_empty());

        session.select_ingredient(FULL_MEAL);
        assert_eq!(session.selected_table().get("Iron"), Some(9.0));
    }

    #[tokio::test]
    async fn suggestion_sends_meal_totals_and_highlights_changes() {
        let api = FakeApi::new(Ok(breakfast()), ok_update());
        let mut session = MealSession::new();
        session.submit(&api, "eggs and toast").await;
        session.choose_suggestion(&api, "Salmon").await;

        let sent = api.sent.lock().unwrap();
        assert_eq!(sent[0].0, "Salmon");
        assert_eq!(sent[0].1.get("Iron"), Some(9.0));
        drop(sent);

        assert_eq!(session.selected(), "Salmon");
        assert_eq!(session.highlighted(), ["Vitamin C", "Calcium"]);
        assert_eq!(session.missing(), ["Calcium", "Iron"]);

        let view = session.view();
        let minerals = &view.panels[0];
        let calcium = minerals.rows.iter().find(|r| r.name == "Calcium").unwrap();
        assert_eq!(calcium.color, HIGHLIGHTED_MISSING_COLOR);
        assert_eq!(calcium.tooltip.as_deref(), Some("12.0%"));
        let vitamins = &view.panels[1];
        let vitamin_c = vitamins.rows.iter().find(|r| r.name == "Vitamin C").unwrap();
        assert_eq!(vitamin_c.severity, Severity::High);
        assert_eq!(vitamin_c.color, Severity::High.color());
        // The deficiency panel keeps the first analysis.
        assert_eq!(view.low_on, vec!["Vitamin C", "Calcium"]);
    }

    #[tokio::test]
    async fn failed_suggestion_sets_fixed_message() {
        let api = FakeApi::new(
            Ok(breakfast()),
            Err(ClientError::Api("Error fetching nutrient data: boom".into())),
        );
        let mut session = MealSession::new();
        session.submit(&api, "eggs and toast").await;
        session.choose_suggestion(&api, "Salmon").await;

        assert_eq!(session.error(), Some(RECOMMENDATION_FALLBACK));
        assert_eq!(session.selected(), FULL_MEAL);
    }

    #[test]
    fn rows_without_data_have_no_tooltip() {
        let view = MealSession::new().view();
        let fatty = &view.panels[3];
        assert_eq!(fatty.label, "Fatty Acids");
        assert_eq!(fatty.rows.len(), 5);
        assert!(fatty.rows.iter().all(|r| r.tooltip.is_none() && r.severity == Severity::None));
        assert_eq!(fatty.rows[1].display_name, "ALA");
    }
}
