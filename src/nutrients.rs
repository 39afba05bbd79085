// Nutrient catalog: names, categories, RDA reference values, source units.
use serde::Serialize;

/// Unit a nutrient amount is reported in by the nutrient source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Milligram,
    Microgram,
    Gram,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    Minerals,
    Vitamins,
    #[serde(rename = "Amino Acids")]
    AminoAcids,
    #[serde(rename = "Fatty Acids & Choline")]
    FattyAcidsAndCholine,
}

impl Category {
    /// Display order of the orbs.
    pub const ALL: [Category; 4] = [
        Category::Minerals,
        Category::Vitamins,
        Category::AminoAcids,
        Category::FattyAcidsAndCholine,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Minerals => "Minerals",
            Category::Vitamins => "Vitamins",
            Category::AminoAcids => "Amino Acids",
            Category::FattyAcidsAndCholine => "Fatty Acids & Choline",
        }
    }

    /// Heading shown above the orb and its nutrient list.
    pub fn label(self) -> &'static str {
        match self {
            Category::FattyAcidsAndCholine => "Fatty Acids",
            other => other.name(),
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Category::Minerals => "#2ecc71",
            Category::Vitamins => "#3498db",
            Category::AminoAcids => "#e67e22",
            Category::FattyAcidsAndCholine => "#B47EB3",
        }
    }

    pub fn nutrients(self) -> impl Iterator<Item = Nutrient> {
        Nutrient::ALL.into_iter().filter(move |n| n.category() == self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nutrient {
    Potassium,
    Sodium,
    Calcium,
    Phosphorus,
    Magnesium,
    Iron,
    Zinc,
    Manganese,
    Copper,
    Selenium,

    VitaminA,
    VitaminB1,
    VitaminB2,
    VitaminB3,
    VitaminB5,
    VitaminB6,
    VitaminB9,
    VitaminB12,
    VitaminC,
    VitaminD,
    VitaminE,
    VitaminK,

    Histidine,
    Isoleucine,
    Leucine,
    Lysine,
    Methionine,
    Phenylalanine,
    Threonine,
    Tryptophan,
    Valine,

    LinoleicAcid,
    AlphaLinolenicAcid,
    Epa,
    Dha,
    Choline,
}

impl Nutrient {
    /// Every tracked nutrient, grouped by category in display order.
    pub const ALL: [Nutrient; 36] = [
        Nutrient::Potassium,
        Nutrient::Sodium,
        Nutrient::Calcium,
        Nutrient::Phosphorus,
        Nutrient::Magnesium,
        Nutrient::Iron,
        Nutrient::Zinc,
        Nutrient::Manganese,
        Nutrient::Copper,
        Nutrient::Selenium,
        Nutrient::VitaminA,
        Nutrient::VitaminB1,
        Nutrient::VitaminB2,
        Nutrient::VitaminB3,
        Nutrient::VitaminB5,
        Nutrient::VitaminB6,
        Nutrient::VitaminB9,
        Nutrient::VitaminB12,
        Nutrient::VitaminC,
        Nutrient::VitaminD,
        Nutrient::VitaminE,
        Nutrient::VitaminK,
        Nutrient::Histidine,
        Nutrient::Isoleucine,
        Nutrient::Leucine,
        Nutrient::Lysine,
        Nutrient::Methionine,
        Nutrient::Phenylalanine,
        Nutrient::Threonine,
        Nutrient::Tryptophan,
        Nutrient::Valine,
        Nutrient::LinoleicAcid,
        Nutrient::AlphaLinolenicAcid,
        Nutrient::Epa,
        Nutrient::Dha,
        Nutrient::Choline,
    ];

    /// Canonical name used as the key of every nutrient table on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Nutrient::Potassium => "Potassium",
            Nutrient::Sodium => "Sodium",
            Nutrient::Calcium => "Calcium",
            Nutrient::Phosphorus => "Phosphorus",
            Nutrient::Magnesium => "Magnesium",
            Nutrient::Iron => "Iron",
            Nutrient::Zinc => "Zinc",
            Nutrient::Manganese => "Manganese",
            Nutrient::Copper => "Copper",
            Nutrient::Selenium => "Selenium",
            Nutrient::VitaminA => "Vitamin A",
            Nutrient::VitaminB1 => "Vitamin B1",
            Nutrient::VitaminB2 => "Vitamin B2",
            Nutrient::VitaminB3 => "Vitamin B3",
            Nutrient::VitaminB5 => "Vitamin B5",
            Nutrient::VitaminB6 => "Vitamin B6",
            Nutrient::VitaminB9 => "Vitamin B9",
            Nutrient::VitaminB12 => "Vitamin B12",
            Nutrient::VitaminC => "Vitamin C",
            Nutrient::VitaminD => "Vitamin D",
            Nutrient::VitaminE => "Vitamin E",
            Nutrient::VitaminK => "Vitamin K",
            Nutrient::Histidine => "Histidine",
            Nutrient::Isoleucine => "Isoleucine",
            Nutrient::Leucine => "Leucine",
            Nutrient::Lysine => "Lysine",
            Nutrient::Methionine => "Methionine",
            Nutrient::Phenylalanine => "Phenylalanine",
            Nutrient::Threonine => "Threonine",
            Nutrient::Tryptophan => "Tryptophan",
            Nutrient::Valine => "Valine",
            Nutrient::LinoleicAcid => "Linoleic Acid",
            Nutrient::AlphaLinolenicAcid => "Alpha-Linolenic Acid",
            Nutrient::Epa => "EPA",
            Nutrient::Dha => "DHA",
            Nutrient::Choline => "Choline",
        }
    }

    pub fn from_name(name: &str) -> Option<Nutrient> {
        Nutrient::ALL.into_iter().find(|n| n.name() == name)
    }

    /// Short label for the nutrient lists; falls back to the canonical name.
    pub fn display_name(self) -> &'static str {
        match self {
            Nutrient::AlphaLinolenicAcid => "ALA",
            Nutrient::LinoleicAcid => "LA",
            other => other.name(),
        }
    }

    pub fn category(self) -> Category {
        use Nutrient::*;
        match self {
            Potassium | Sodium | Calcium | Phosphorus | Magnesium | Iron | Zinc | Manganese
            | Copper | Selenium => Category::Minerals,
            VitaminA | VitaminB1 | VitaminB2 | VitaminB3 | VitaminB5 | VitaminB6 | VitaminB9
            | VitaminB12 | VitaminC | VitaminD | VitaminE | VitaminK => Category::Vitamins,
            Histidine | Isoleucine | Leucine | Lysine | Methionine | Phenylalanine | Threonine
            | Tryptophan | Valine => Category::AminoAcids,
            LinoleicAcid | AlphaLinolenicAcid | Epa | Dha | Choline => {
                Category::FattyAcidsAndCholine
            }
        }
    }

    /// Daily reference amount, in milligrams.
    pub fn rda(self) -> f64 {
        use Nutrient::*;
        match self {
            Potassium => 4700.0,
            Sodium => 2300.0,
            Calcium => 1000.0,
            Phosphorus => 700.0,
            Magnesium => 400.0,
            Iron => 10.0,
            Zinc => 10.0,
            Manganese => 2.3,
            Copper => 0.9,
            Selenium => 0.4,

            Histidine => 10000.0,
            Isoleucine => 19000.0,
            Leucine => 39000.0,
            Lysine => 30000.0,
            Methionine => 14000.0,
            Phenylalanine => 25000.0,
            Threonine => 15000.0,
            Tryptophan => 5000.0,
            Valine => 24000.0,

            AlphaLinolenicAcid => 1.2,
            LinoleicAcid => 1.0,
            Epa => 5000.0,
            Dha => 3750.0,

            VitaminA => 0.9,
            VitaminB1 => 1.2,
            VitaminB2 => 1.3,
            VitaminB3 => 16.0,
            VitaminB5 => 5.0,
            VitaminB6 => 1.5,
            VitaminB9 => 0.4,
            VitaminB12 => 0.06,
            VitaminC => 90.0,
            VitaminD => 2.0,
            VitaminE => 15.0,
            VitaminK => 0.18,

            Choline => 550.0,
        }
    }

    pub fn source_unit(self) -> Unit {
        use Nutrient::*;
        match self {
            Selenium | VitaminA | VitaminB9 | VitaminB12 | VitaminD | VitaminK => Unit::Microgram,
            Histidine | Isoleucine | Leucine | Lysine | Methionine | Phenylalanine | Threonine
            | Tryptophan | Valine | Epa | Dha => Unit::Gram,
            _ => Unit::Milligram,
        }
    }

    /// Nutritionix `full_nutrients[].attr_id` carrying this nutrient.
    pub fn nutritionix_attr_id(self) -> u32 {
        use Nutrient::*;
        match self {
            Potassium => 306,
            Sodium => 307,
            Calcium => 301,
            Phosphorus => 305,
            Magnesium => 304,
            Iron => 303,
            Zinc => 309,
            Manganese => 315,
            Copper => 312,
            Selenium => 317,
            Histidine => 512,
            Isoleucine => 503,
            Leucine => 504,
            Lysine => 505,
            Methionine => 506,
            Phenylalanine => 508,
            Threonine => 502,
            Tryptophan => 501,
            Valine => 510,
            AlphaLinolenicAcid => 851,
            LinoleicAcid => 675,
            Epa => 629,
            Dha => 621,
            VitaminA => 320,
            VitaminB1 => 404,
            VitaminB2 => 405,
            VitaminB3 => 406,
            VitaminB5 => 410,
            VitaminB6 => 415,
            VitaminB9 => 417,
            VitaminB12 => 418,
            VitaminC => 401,
            VitaminD => 324,
            VitaminE => 323,
            VitaminK => 430,
            Choline => 421,
        }
    }
}
