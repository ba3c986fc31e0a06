//! X (Twitter) API v2 platform implementation
//!
//! Posts through `POST /2/tweets` with OAuth 1.0a user-context signing
//! (HMAC-SHA1 over consumer key/secret and access token/secret).

use async_trait::async_trait;
use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response};
use sha1::Sha1;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::XConfig;
use crate::credentials::XCredentials;
use crate::error::{PlatformError, Result};
use crate::platforms::Platform;
use crate::types::{PostReceipt, TWEET_CHAR_LIMIT};

fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// OAuth 1.0a signature base string
///
/// `params` holds every oauth_* parameter plus any query or form
/// parameters. JSON bodies are not part of the signature.
pub fn signature_base_string(method: &str, url: &str, params: &[(&str, &str)]) -> String {
    let mut encoded: Vec<(String, String)> =
        params.iter().map(|(k, v)| (encode(k), encode(v))).collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        encode(url),
        encode(&param_string)
    )
}

/// Base64 HMAC-SHA1 of `base_string`, keyed by both secrets
pub fn sign(base_string: &str, consumer_secret: &str, token_secret: &str) -> Result<String> {
    let signing_key = format!("{}&{}", encode(consumer_secret), encode(token_secret));

    let mut mac = Hmac::<Sha1>::new_from_slice(signing_key.as_bytes())
        .map_err(|e| PlatformError::ClientInit(format!("Invalid signing key: {}", e)))?;
    mac.update(base_string.as_bytes());

    Ok(base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
}

/// Build the `Authorization: OAuth ...` header value
pub fn authorization_header(
    credentials: &XCredentials,
    method: &str,
    url: &str,
    extra_params: &[(&str, &str)],
    nonce: &str,
    timestamp: &str,
) -> Result<String> {
    let oauth_params = [
        ("oauth_consumer_key", credentials.consumer_key()),
        ("oauth_nonce", nonce),
        ("oauth_signature_method", "HMAC-SHA1"),
        ("oauth_timestamp", timestamp),
        ("oauth_token", credentials.access_token()),
        ("oauth_version", "1.0"),
    ];

    let all_params: Vec<(&str, &str)> = oauth_params
        .iter()
        .chain(extra_params.iter())
        .copied()
        .collect();

    let base_string = signature_base_string(method, url, &all_params);
    let signature = sign(
        &base_string,
        credentials.consumer_secret(),
        credentials.access_token_secret(),
    )?;

    let mut header_params: Vec<(&str, &str)> = oauth_params.to_vec();
    header_params.push(("oauth_signature", signature.as_str()));
    header_params.sort_by(|a, b| a.0.cmp(b.0));

    let parts: Vec<String> = header_params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, encode(v)))
        .collect();

    Ok(format!("OAuth {}", parts.join(", ")))
}

fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Pull a human-readable message out of an X error body
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v["detail"]
                .as_str()
                .or(v["title"].as_str())
                .or(v["errors"][0]["message"].as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| body.to_string())
}

pub struct XClient {
    client: Client,
    api_base: String,
    credentials: XCredentials,
}

impl XClient {
    pub const NAME: &'static str = "x";

    /// Create a new X client
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ClientInit` if the HTTP client cannot be built.
    pub fn new(config: &XConfig, credentials: XCredentials) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PlatformError::ClientInit(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    fn tweets_url(&self) -> String {
        format!("{}/tweets", self.api_base)
    }

    async fn check_response(response: Response) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| PlatformError::Network(e.to_string()))?;

        Err(PlatformError::Api {
            status,
            message: error_message(&body),
        }
        .into())
    }
}

#[async_trait]
impl Platform for XClient {
    async fn post(&self, content: &str) -> Result<PostReceipt> {
        let url = self.tweets_url();
        let timestamp = Utc::now().timestamp().to_string();
        let header = authorization_header(
            &self.credentials,
            "POST",
            &url,
            &[],
            &generate_nonce(),
            &timestamp,
        )?;

        debug!("Posting to X: {} characters", content.chars().count());

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, header)
            .json(&serde_json::json!({ "text": content }))
            .send()
            .await
            .map_err(|e| PlatformError::Network(e.to_string()))?;

        let response = Self::check_response(response).await?;
        let body = response
            .text()
            .await
            .map_err(|e| PlatformError::Network(e.to_string()))?;

        let post_id = match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(data) => data["data"]["id"].as_str().map(String::from),
            Err(e) => {
                warn!("X accepted the post but the response was not JSON: {}", e);
                None
            }
        };

        Ok(PostReceipt {
            platform: Self::NAME.to_string(),
            post_id,
        })
    }

    fn name(&self) -> &str {
        Self::NAME
    }

    fn character_limit(&self) -> Option<usize> {
        Some(TWEET_CHAR_LIMIT)
    }

    fn is_configured(&self) -> bool {
        [
            self.credentials.consumer_key(),
            self.credentials.consumer_secret(),
            self.credentials.access_token(),
            self.credentials.access_token_secret(),
        ]
        .iter()
        .all(|value| !value.trim().is_empty())
    }
}
