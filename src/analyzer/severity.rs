use serde::Serialize;

/// Upper bound (inclusive) of the `Low` tier.
pub const LOW_MAX: f64 = 4.0;
/// Upper bound (inclusive) of the `Average` tier.
pub const AVERAGE_MAX: f64 = 15.0;

/// Color of a nutrient that the last recommendation touched but is still missing.
pub const HIGHLIGHTED_MISSING_COLOR: &str = "#5d473a";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Low,
    Average,
    High,
}

impl Severity {
    pub fn color(self) -> &'static str {
        match self {
            Severity::None => "#7d7d7d",
            Severity::Low => "#d9534f",
            Severity::Average => "#f0ad4e",
            Severity::High => "#5cb85c",
        }
    }
}

/// Buckets a percentage of RDA. Missing data, NaN and anything at or below
/// zero classify as `None`.
pub fn classify(percentage: Option<f64>) -> Severity {
    match percentage {
        Some(p) if p.is_nan() || p <= 0.0 => Severity::None,
        Some(p) if p <= LOW_MAX => Severity::Low,
        Some(p) if p <= AVERAGE_MAX => Severity::Average,
        Some(_) => Severity::High,
        None => Severity::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_zero_are_none() {
        assert_eq!(classify(None), Severity::None);
        assert_eq!(classify(Some(0.0)), Severity::None);
        assert_eq!(classify(Some(f64::NAN)), Severity::None);
    }

    #[test]
    fn boundaries_are_inclusive_upward() {
        assert_eq!(classify(Some(0.01)), Severity::Low);
        assert_eq!(classify(Some(4.0)), Severity::Low);
        assert_eq!(classify(Some(4.01)), Severity::Average);
        assert_eq!(classify(Some(15.0)), Severity::Average);
        assert_eq!(classify(Some(15.01)), Severity::High);
        assert_eq!(classify(Some(250.0)), Severity::High);
    }

    #[test]
    fn colors_follow_tiers() {
        assert_eq!(classify(Some(2.0)).color(), "#d9534f");
        assert_eq!(classify(Some(40.0)).color(), "#5cb85c");
    }
}
