// Parsing of free-text model output into ingredient lists

pub mod ingredient_parser;

pub use ingredient_parser::{clean_ingredient_list, BulletListParser};

pub trait Parser: Send + Sync {
    fn parse(&self, text: &str) -> Vec<String>;
}
