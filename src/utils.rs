// Utility functions

/// Lowercases `text` and capitalizes the first letter of every space-separated word.
pub fn title_case(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Formats a percentage the way the nutrient tooltips show it.
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}
