use crate::model::{DatasetError, FoodItem};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Foods with per-nutrient amounts, read from a CSV whose header is
/// `fdc_id,description,<nutrient>,<nutrient>,...`.
#[derive(Debug, Clone, Default)]
pub struct FoodDataset {
    pub nutrient_names: Vec<String>,
    pub foods: Vec<FoodItem>,
}

impl FoodDataset {
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path)?;
        let dataset = Self::from_reader(file)?;
        info!(
            "Loaded {} foods with {} nutrient columns from {}",
            dataset.foods.len(),
            dataset.nutrient_names.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Short rows are tolerated: rows without a description are skipped, and
    /// missing trailing columns are simply absent. Unparsable amounts read as 0.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let nutrient_names: Vec<String> = rdr
            .headers()?
            .iter()
            .skip(2)
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = 0usize;
        let mut foods = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows += 1;
            if record.len() < 2 {
                continue;
            }

            let nutrients: BTreeMap<String, f64> = nutrient_names
                .iter()
                .zip(record.iter().skip(2))
                .map(|(name, raw)| (name.clone(), raw.trim().parse().unwrap_or(0.0)))
                .collect();

            foods.push(FoodItem {
                fdc_id: record[0].to_string(),
                description: record[1].to_string(),
                nutrients,
            });
        }

        if rows == 0 {
            return Err(DatasetError::Empty);
        }
        Ok(Self {
            nutrient_names,
            foods,
        })
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
