//! Client for a LibreTranslate-compatible translation service.
//!
//! Only the whole-page-translation feature uses this; the rest of the core
//! never sees translated content.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{config::TranslateConfig, error::TranslateError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The page is rendered in English; translation is always en → target.
const SOURCE_LANG: &str = "en";

#[derive(Debug, Clone)]
pub struct Translator {
    http: Client,
    endpoint: String,
    target: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl Translator {
    pub fn from_config(config: &TranslateConfig) -> Self {
        Self {
            http: Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            target: config.target.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Language code the page is translated into.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Translate an HTML fragment, keeping its markup intact.
    pub async fn translate_html(&self, html: &str) -> Result<String, TranslateError> {
        let url = format!("{}/translate", self.endpoint);

        let request = TranslateRequest {
            q: html,
            source: SOURCE_LANG,
            target: &self.target,
            format: "html",
            api_key: self.api_key.as_deref(),
        };

        let res = self
            .http
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(TranslateError::Status { status, body });
        }

        let parsed: TranslateResponse = serde_json::from_str(&body)?;
        Ok(parsed.translated_text)
    }
}
