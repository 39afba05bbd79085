use crate::model::{IngredientNutrients, NutrientAmounts, NutrientTable, NutrientUpdate};
use crate::nutrients::{Nutrient, Unit};

/// Meal totals and merged recommendations never report more than a full RDA.
pub const PERCENT_CAP: f64 = 100.0;

/// A meal total at or below this percentage counts as low or missing.
pub const LOW_THRESHOLD: f64 = 3.5;

pub fn to_milligrams(amount: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Milligram => amount,
        Unit::Microgram => amount / 1000.0,
        Unit::Gram => amount * 1000.0,
    }
}

pub fn rda_percentage(nutrient: Nutrient, amount: f64) -> f64 {
    to_milligrams(amount, nutrient.source_unit()) / nutrient.rda() * 100.0
}

/// Converts raw source amounts of one ingredient into percentages of RDA.
/// Names outside the catalog are kept with a percentage of 0.
pub fn rda_percentages(amounts: &NutrientAmounts) -> NutrientTable {
    amounts
        .iter()
        .map(|(name, &amount)| {
            let pct = Nutrient::from_name(name)
                .map(|n| rda_percentage(n, amount))
                .unwrap_or(0.0);
            (name.clone(), pct)
        })
        .collect()
}

/// Sums every ingredient per nutrient, capped at [`PERCENT_CAP`].
pub fn meal_totals(per_ingredient: &IngredientNutrients) -> NutrientTable {
    let mut totals = NutrientTable::new();
    for table in per_ingredient.values() {
        for (name, pct) in table.iter() {
            totals.add(name, pct);
        }
    }
    for value in totals.values_mut() {
        *value = value.min(PERCENT_CAP);
    }
    totals
}

/// Catalog nutrients that are absent from `totals` or at most [`LOW_THRESHOLD`].
pub fn low_and_missing(totals: &NutrientTable) -> Vec<String> {
    Nutrient::ALL
        .into_iter()
        .filter(|&n| match totals.percentage(n) {
            Some(pct) => pct <= LOW_THRESHOLD,
            None => true,
        })
        .map(|n| n.name().to_string())
        .collect()
}

/// Adds a suggested food to the current meal. `changed_nutrients` lists the
/// nutrients the addition actually contributed to, in catalog order first.
pub fn merge_recommendation(current: &NutrientTable, addition: &NutrientTable) -> NutrientUpdate {
    let mut nutrients = current.clone();
    let mut changed = Vec::new();

    for (name, pct) in addition.iter() {
        let merged = (nutrients.get(name).unwrap_or(0.0) + pct).min(PERCENT_CAP);
        nutrients.insert(name, merged);
        if pct > 0.0 {
            changed.push(name.to_string());
        }
    }

    changed.sort_by_key(|name| {
        Nutrient::from_name(name)
            .map(|n| n as usize)
            .unwrap_or(usize::MAX)
    });

    NutrientUpdate {
        nutrients,
        changed_nutrients: changed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn converts_units_to_milligrams() {
        assert_relative_eq!(to_milligrams(250.0, Unit::Milligram), 250.0);
        assert_relative_eq!(to_milligrams(500.0, Unit::Microgram), 0.5);
        assert_relative_eq!(to_milligrams(1.5, Unit::Gram), 1500.0);
    }

    #[test]
    fn computes_percentages_from_source_units() {
        let amounts: NutrientAmounts = [
            ("Potassium".to_string(), 470.0),
            ("Leucine".to_string(), 3.9),
            ("Selenium".to_string(), 20.0),
            ("Fiber".to_string(), 4.0),
        ]
        .into_iter()
        .collect();

        let table = rda_percentages(&amounts);
        assert_relative_eq!(table.get("Potassium").unwrap(), 10.0);
        assert_relative_eq!(table.get("Leucine").unwrap(), 10.0);
        assert_relative_eq!(table.get("Selenium").unwrap(), 5.0);
        assert_eq!(table.get("Fiber"), Some(0.0));
    }

    #[test]
    fn meal_totals_are_summed_and_capped() {
        let mut per_ingredient = IngredientNutrients::new();
        per_ingredient.insert(
            "spinach".into(),
            [("Iron", 60.0), ("Vitamin K", 80.0)].into_iter().collect(),
        );
        per_ingredient.insert(
            "lentils".into(),
            [("Iron", 55.0), ("Zinc", 12.0)].into_iter().collect(),
        );

        let totals = meal_totals(&per_ingredient);
        assert_eq!(totals.get("Iron"), Some(100.0));
        assert_eq!(totals.get("Vitamin K"), Some(80.0));
        assert_eq!(totals.get("Zinc"), Some(12.0));
    }

    #[test]
    fn low_and_missing_uses_inclusive_threshold() {
        let mut totals: NutrientTable = Nutrient::ALL
            .into_iter()
            .map(|n| (n.name(), 50.0))
            .collect();
        totals.insert("Iron", 3.5);
        totals.insert("Zinc", 3.6);
        totals.insert("Copper", 0.0);

        let sparse: NutrientTable = totals
            .iter()
            .filter(|(name, _)| *name != "Choline")
            .collect();

        assert_eq!(low_and_missing(&totals), vec!["Iron", "Copper"]);
        assert_eq!(low_and_missing(&sparse), vec!["Iron", "Copper", "Choline"]);
    }

    #[test]
    fn empty_meal_is_missing_everything() {
        let missing = low_and_missing(&NutrientTable::new());
        assert_eq!(missing.len(), Nutrient::ALL.len());
        assert_eq!(missing.first().map(String::as_str), Some("Potassium"));
    }

    #[test]
    fn merging_a_recommendation_caps_and_reports_changes() {
        let current: NutrientTable = [("Iron", 90.0), ("Calcium", 20.0)].into_iter().collect();
        let addition: NutrientTable = [("Iron", 30.0), ("Vitamin C", 40.0), ("Calcium", 0.0)]
            .into_iter()
            .collect();

        let update = merge_recommendation(&current, &addition);
        assert_eq!(update.nutrients.get("Iron"), Some(100.0));
        assert_eq!(update.nutrients.get("Calcium"), Some(20.0));
        assert_eq!(update.nutrients.get("Vitamin C"), Some(40.0));
        assert_eq!(update.changed_nutrients, vec!["Iron", "Vitamin C"]);
    }
}
