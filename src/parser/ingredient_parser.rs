// Bullet-list parsing of extractor replies
use crate::parser::Parser;
use std::collections::HashSet;

/// Characters stripped from both ends of every line.
const BULLET_CHARS: &[char] = &['-', '•', '*', ',', '.'];

/// Reads one ingredient per line from a bulleted reply such as
/// `"* Eggs\n* Whole wheat toast\n"`.
pub struct BulletListParser;

impl BulletListParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BulletListParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for BulletListParser {
    fn parse(&self, text: &str) -> Vec<String> {
        text.lines()
            .map(|line| line.trim().trim_matches(BULLET_CHARS).trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect()
    }
}

/// Trims every entry, drops the blank ones and keeps only the first of
/// any repeated name.
pub fn clean_ingredient_list(ingredients: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    ingredients
        .into_iter()
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty())
        .filter(|i| seen.insert(i.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bullets_and_lowercases() {
        let reply = "* Eggs\n- Whole Wheat Toast.\n•  Butter,\n\n**\n";
        assert_eq!(
            BulletListParser::new().parse(reply),
            vec!["eggs", "whole wheat toast", "butter"]
        );
    }

    #[test]
    fn keeps_inner_punctuation() {
        let reply = "- salt-cured ham\n- 2.5 oz. cheddar";
        assert_eq!(
            BulletListParser::new().parse(reply),
            vec!["salt-cured ham", "2.5 oz. cheddar"]
        );
    }

    #[test]
    fn clean_list_drops_blanks() {
        let cleaned = clean_ingredient_list(vec![" rice ".into(), "   ".into(), "beans".into()]);
        assert_eq!(cleaned, vec!["rice", "beans"]);
    }

    #[test]
    fn repeated_ingredients_are_kept_once() {
        let parsed = BulletListParser::new().parse("* Eggs\n* Toast\n* eggs\n- EGGS.");
        assert_eq!(clean_ingredient_list(parsed), vec!["eggs", "toast"]);
        let cleaned = clean_ingredient_list(vec!["rice".into(), " rice ".into()]);
        assert_eq!(cleaned, vec!["rice"]);
    }
}
