use crate::config::GeminiConfig;
use crate::model::SourceError;
use crate::parser::{clean_ingredient_list, BulletListParser, Parser};
use crate::sources::traits::IngredientExtractor;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Extracts ingredients by asking Gemini for a bullet list.
pub struct GeminiExtractor {
    client: Client,
    api_key: String,
    url: String,
    parser: BulletListParser,
}

impl GeminiExtractor {
    pub fn new(config: &GeminiConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(concat!("nutrimancer-codex/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &GeminiConfig) -> Self {
        let url = format!(
            "{}/models/{}:generateContent",
            config.endpoint.trim_end_matches('/'),
            config.model
        );
        Self {
            client,
            api_key: config.api_key.clone(),
            url,
            parser: BulletListParser::new(),
        }
    }

    fn prompt(food_description: &str) -> String {
        format!(
            "Extract the list of ingredients from the following food description: '{}'. \
             List the main ingredients as bullet points with no descriptions.",
            food_description
        )
    }
}

#[async_trait::async_trait]
impl IngredientExtractor for GeminiExtractor {
    async fn extract(&self, food_description: &str) -> Result<Vec<String>, SourceError> {
        if self.api_key.is_empty() {
            return Err(SourceError::MissingCredentials("Gemini"));
        }

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Self::prompt(food_description),
                }],
            }],
        };

        let response = self
            .client
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "unknown".into());
            warn!("Gemini responded [{}]: {}", status, body);
            return Err(SourceError::Api {
                service: "Gemini",
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or(SourceError::EmptyResponse("Gemini"))?;

        debug!("Gemini reply: {:?}", text);
        Ok(clean_ingredient_list(self.parser.parse(&text)))
    }
}
