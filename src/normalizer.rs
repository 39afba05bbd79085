use crate::utils::title_case;
use std::collections::HashSet;

/// First segments that only name a food group; the useful label follows them.
const GROUP_PREFIXES: [&str; 2] = ["fatty acids", "amino acids"];

/// Second segments containing one of these carry no useful detail.
const BOILERPLATE_MARKERS: [&str; 4] = ["pass", "region", "store", "other"];

pub fn normalize_suggestions(suggestions: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    suggestions
        .iter()
        .map(|s| normalize_suggestion(s))
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

/// Turns a dataset food description into a short button label.
pub fn normalize_suggestion(suggestion: &str) -> String {
    let parts: Vec<&str> = suggestion.split(',').map(str::trim).collect();
    let first = parts[0];
    let second = parts.get(1).copied();

    if GROUP_PREFIXES.contains(&first.to_lowercase().as_str()) {
        return title_case(second.unwrap_or(first));
    }

    match second {
        Some(second) => {
            let second_lower = second.to_lowercase();
            if BOILERPLATE_MARKERS.iter().any(|m| second_lower.contains(m)) {
                title_case(first)
            } else {
                title_case(&parts[..2].join(", "))
            }
        }
        None => title_case(first),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_prefix_prefers_second_segment() {
        assert_eq!(normalize_suggestion("Fatty Acids, Salmon"), "Salmon");
        assert_eq!(normalize_suggestion("amino acids, EGG WHITE, dried"), "Egg White");
        assert_eq!(normalize_suggestion("Fatty acids"), "Fatty Acids");
    }

    #[test]
    fn boilerplate_second_segment_is_dropped() {
        assert_eq!(normalize_suggestion("Dairy, Store"), "Dairy");
        assert_eq!(normalize_suggestion("Beef, pass 2 region 1"), "Beef");
        assert_eq!(normalize_suggestion("Lettuce, other varieties"), "Lettuce");
    }

    #[test]
    fn keeps_two_segments_otherwise() {
        assert_eq!(
            normalize_suggestion("Cheese, cheddar, sharp, sliced"),
            "Cheese, Cheddar"
        );
        assert_eq!(normalize_suggestion("  kale  "), "Kale");
    }

    #[test]
    fn deduplicates_after_normalization() {
        let raw = vec![
            "Dairy, Store".to_string(),
            "DAIRY".to_string(),
            "Fatty Acids, Salmon".to_string(),
            "".to_string(),
            "salmon, store bought".to_string(),
        ];
        assert_eq!(normalize_suggestions(&raw), vec!["Dairy", "Salmon"]);
    }
}
