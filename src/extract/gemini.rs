//! Gemini `generateContent` client.
//!
//! The model is asked for `application/json` output constrained by [`RESPONSE_SCHEMA`]; the
//! text of the first candidate is then parsed as a deck. No retries: a failed request is
//! reported once and the caller decides what to do.

use log::{debug, error, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::prompt::{build_prompt, RESPONSE_SCHEMA};
use super::Extractor;
use crate::config::ExtractorConfig;
use crate::deck::export::parse_engine_response;
use crate::deck::types::Flashcard;
use crate::error::{Error, Result};

/// Longest slice of an error body kept in [`Error::Http`].
const MAX_ERROR_BODY: usize = 500;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize, Debug)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize, Debug)]
struct RequestPart {
    text: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

#[derive(Deserialize, Debug, Default)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize, Debug)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Debug)]
struct ResponsePart {
    text: Option<String>,
}

fn request_body(transcript: &str) -> GenerateRequest<'static> {
    GenerateRequest {
        contents: vec![RequestContent {
            parts: vec![RequestPart {
                text: build_prompt(transcript),
            }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: &RESPONSE_SCHEMA,
        },
    }
}

/// Concatenated text parts of the first candidate, if it has any.
fn candidate_text(response: GenerateResponse) -> Option<String> {
    let content = response.candidates.into_iter().next()?.content?;
    let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Decode a raw `generateContent` response body into a deck.
fn decode_body(body: &str) -> Result<Vec<Flashcard>> {
    let response: GenerateResponse = serde_json::from_str(body).map_err(|e| {
        error!("Parsing engine sent a non-JSON envelope: {}", e);
        Error::InvalidFormat
    })?;
    let text = candidate_text(response).ok_or_else(|| {
        error!("Parsing engine response has no candidate text");
        Error::InvalidFormat
    })?;
    parse_engine_response(&text)
}

pub struct GeminiExtractor {
    client: Client,
    config: ExtractorConfig,
    api_key: String,
}

impl GeminiExtractor {
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or(Error::MissingApiKey)?;
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            config,
            api_key,
        })
    }
}

impl Extractor for GeminiExtractor {
    async fn extract(&self, transcript: &str) -> Result<Vec<Flashcard>> {
        let url = self.config.generate_url();
        info!(
            "Requesting flashcards from {} ({} bytes of PGN)",
            self.config.model,
            transcript.len()
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body(transcript))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Parsing engine returned {}", status);
            return Err(Error::Http {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        debug!("Parsing engine response: {} bytes", body.len());
        let cards = decode_body(&body)?;
        info!("Parsing engine returned {} cards", cards.len());
        Ok(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::types::Side;

    fn envelope(text: &str) -> String {
        serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": text }], "role": "model" } }]
        })
        .to_string()
    }

    #[test]
    fn request_shape() {
        let body = serde_json::to_value(request_body("1. e4 {Best by test}")).unwrap();
        let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.contains("1. e4 {Best by test}"));
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "ARRAY");
    }

    #[test]
    fn decodes_candidate_text() {
        let deck = r#"[{"card_id": 1, "front_content": {"comment_text": "Black develops solidly."},
            "back_content": {"position_fen": "r1bqk2r/2ppbppp/p1n2n2/1p2p3/4P3/1B3N2/PPPP1PPP/RNBQ1RK1 w kq - 0 7",
            "variations_text": "(5. Qe2 b5 6. Bb3 Be7)", "move_number": 5, "player_to_move": "White"}}]"#;
        let cards = decode_body(&envelope(deck)).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].back_content.player_to_move, Side::White);
        assert_eq!(cards[0].variations(), Some("(5. Qe2 b5 6. Bb3 Be7)"));
    }

    #[test]
    fn split_parts_are_joined() {
        let body = serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "[" }, { "text": "]" }] } }]
        })
        .to_string();
        assert!(decode_body(&body).unwrap().is_empty());
    }

    #[test]
    fn prose_instead_of_json_is_invalid_format() {
        let err = decode_body(&envelope("I could not find any comments.")).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat));
    }

    #[test]
    fn missing_candidates_is_invalid_format() {
        assert!(matches!(decode_body("{}"), Err(Error::InvalidFormat)));
        assert!(matches!(
            decode_body(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#),
            Err(Error::InvalidFormat)
        ));
    }

    #[test]
    fn blank_candidate_text_is_invalid_format() {
        let err = decode_body(&envelope("   ")).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat));
        assert_eq!(err.to_string(), "Invalid format received from parsing engine.");
    }

    #[test]
    fn garbage_envelope_is_invalid_format() {
        assert!(matches!(decode_body("<html>502</html>"), Err(Error::InvalidFormat)));
    }

    #[test]
    fn requires_api_key() {
        let err = GeminiExtractor::new(ExtractorConfig::default()).err().unwrap();
        assert!(matches!(err, Error::MissingApiKey));
    }
}
