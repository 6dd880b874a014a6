use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::core::ServiceRules;
use crate::models::{CatalogEntity, Recommendation, RecommendRequest};

/// Errors that can occur when talking to the completion provider
#[derive(Debug, Error)]
pub enum AiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("completion API returned error: {0}")]
    ApiError(String),

    #[error("no completion API credential configured")]
    MissingCredential,

    #[error("completion response contained no content")]
    EmptyResponse,

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Chat-completion client
///
/// Grounds the model in the same catalog and rule table the fallback
/// matcher uses, and expects a JSON answer. Exactly one attempt per
/// request; any failure is the caller's cue to fall back.
pub struct AiClient {
    base_url: String,
    api_key: String,
    model: String,
    temperature: f64,
    max_tokens: u32,
    client: Client,
}

impl AiClient {
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        temperature: f64,
        max_tokens: u32,
        timeout_secs: u64,
    ) -> Result<Self, AiError> {
        // Explicit timeout; expiry counts as an upstream failure
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            api_key,
            model,
            temperature,
            max_tokens,
            client,
        })
    }

    /// Ask the model for recommendations against one catalog family
    pub async fn recommend(
        &self,
        request: &RecommendRequest,
        catalog: &[CatalogEntity],
        rules: &ServiceRules,
    ) -> Result<Vec<Recommendation>, AiError> {
        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: build_user_prompt(request, catalog, rules),
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let url = format!(
            "{}/v1/chat/completions",
            self.base_url.trim_end_matches('/')
        );

        tracing::debug!("Requesting completion from {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AiError::ApiError(format!(
                "completion call failed: {}",
                response.status()
            )));
        }

        let completion: ChatCompletionResponse = response.json().await?;

        let content = completion
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .ok_or(AiError::EmptyResponse)?;

        parse_recommendations(content)
    }
}

const SYSTEM_PROMPT: &str = "You are an event-planning assistant. Recommend only entities \
from the provided catalog, by their exact id. Respond with a JSON array of objects with \
fields entityId, confidence (0 to 1), reasoning, bestPackage, whyPerfect. Respond with \
JSON only, no prose and no markdown fences.";

/// Serialize the catalog and rule table into the instruction prompt.
/// Request fields are interpolated verbatim.
pub fn build_user_prompt(
    request: &RecommendRequest,
    catalog: &[CatalogEntity],
    rules: &ServiceRules,
) -> String {
    let mut listing = String::new();
    for entity in catalog {
        listing.push_str(&format!(
            "- id: {} | name: {} | kind: {:?}{} | guests: {}-{} | budget: {}-{} | packages: {}\n",
            entity.id,
            entity.name,
            entity.kind,
            entity
                .category
                .as_deref()
                .map(|c| format!(" ({})", c))
                .unwrap_or_default(),
            entity.guest_range.min,
            entity.guest_range.max,
            entity.budget_range.min,
            entity.budget_range.max,
            entity
                .packages
                .iter()
                .map(|p| format!("{} (${})", p.name, p.price))
                .collect::<Vec<_>>()
                .join("; "),
        ));
    }

    format!(
        "Catalog:\n{listing}\n{rules}\nRequest:\n\
- event type: {event_type}\n\
- guest count: {guests}\n\
- budget: {budget} ({budget_label})\n\
- location: {location}\n\
- venue: {venue}\n\
- preferences: {preferences}\n\n\
Rank the best matches for this request and answer with the JSON array only.",
        rules = rules.render(),
        event_type = request.event_type,
        guests = request.guest_count,
        budget = request.budget.as_str(),
        budget_label = request.budget.label(),
        location = request.location.as_deref().unwrap_or("not specified"),
        venue = request.venue.as_deref().unwrap_or("not specified"),
        preferences = request.preferences.as_deref().unwrap_or("none"),
    )
}

/// Parse the model's content as recommendations.
/// Accepts a bare JSON array or an object with a `recommendations`
/// array field; anything else is a parse failure.
fn parse_recommendations(content: &str) -> Result<Vec<Recommendation>, AiError> {
    let value: Value = serde_json::from_str(content.trim())
        .map_err(|e| AiError::InvalidResponse(format!("content is not JSON: {}", e)))?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("recommendations") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(AiError::InvalidResponse(
                    "object has no recommendations array".to_string(),
                ))
            }
        },
        _ => {
            return Err(AiError::InvalidResponse(
                "content is neither an array nor an object".to_string(),
            ))
        }
    };

    items
        .into_iter()
        .map(|item| {
            serde_json::from_value::<Recommendation>(item)
                .map(Recommendation::clamped)
                .map_err(|e| AiError::InvalidResponse(format!("bad recommendation: {}", e)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::models::BudgetTier;

    fn request() -> RecommendRequest {
        RecommendRequest {
            event_type: "Holiday Party".into(),
            guest_count: 50,
            budget: BudgetTier::Tier4,
            location: Some("Downtown".into()),
            venue: None,
            preferences: None,
        }
    }

    #[test]
    fn test_prompt_lists_every_catalog_entity() {
        let catalog = catalog::restaurants();
        let prompt = build_user_prompt(&request(), &catalog, &ServiceRules);

        for entity in &catalog {
            assert!(prompt.contains(&entity.id), "prompt missing {}", entity.id);
        }
        assert!(prompt.contains("Holiday Party"));
        assert!(prompt.contains("budget-4"));
    }

    #[test]
    fn test_parse_bare_array() {
        let recs = parse_recommendations(
            r#"[{"entityId": "saint-restaurant", "confidence": 0.9,
                 "reasoning": "fits", "bestPackage": "Holiday Party Package",
                 "whyPerfect": "festive"}]"#,
        )
        .unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].entity_id, "saint-restaurant");
    }

    #[test]
    fn test_parse_wrapped_object() {
        let recs = parse_recommendations(
            r#"{"recommendations": [{"entityId": "bella-vista", "confidence": 1.4,
                 "reasoning": "r", "bestPackage": "", "whyPerfect": ""}]}"#,
        )
        .unwrap();
        assert_eq!(recs[0].confidence, 1.0);
    }

    #[test]
    fn test_parse_rejects_non_array_content() {
        assert!(parse_recommendations("\"just a string\"").is_err());
        assert!(parse_recommendations("{\"answer\": 42}").is_err());
        assert!(parse_recommendations("not json at all").is_err());
    }
}
