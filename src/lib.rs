//! Nutrient analysis for free-text meal descriptions: the HTTP service that
//! extracts ingredients and RDA coverage, a typed client for it, and the
//! session model that turns responses into gauges, severity rows and
//! suggestion labels.

pub mod analyzer;
pub mod client;
pub mod config;
pub mod model;
pub mod normalizer;
pub mod nutrients;
pub mod parser;
pub mod recommender;
pub mod server;
pub mod session;
pub mod sources;
pub mod utils;
