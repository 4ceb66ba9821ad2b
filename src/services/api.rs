//! Client for the wordle.click HTTP API
//!
//! Endpoints (all take `?lang=en|es`):
//! - `GET /word` → `{ "word", "date", "lang" }`
//! - `GET /word/{YYYY-MM-DD}` → same shape, for another day
//! - `GET /validate/{WORD}` → `{ "word", "valid", "lang" }`
//! - `GET /stats` → `{ "total_words", "api_version", "lang" }`

use super::{ServiceError, WordProvider, WordValidator};
use crate::core::{Language, Word};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct WordResponse {
    word: String,
}

#[derive(Debug, Deserialize)]
struct ValidateResponse {
    valid: bool,
}

/// Word-list statistics reported by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiStats {
    pub total_words: usize,
    pub api_version: String,
    pub lang: String,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` (e.g. `https://api.wordle.click/api/v1`)
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        language: Language,
    ) -> Result<T, ServiceError> {
        let url = self.url(path);
        debug!(%url, lang = language.code(), "GET");

        let response = self
            .http
            .get(&url)
            .query(&[("lang", language.code())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.json::<T>().await?)
    }

    async fn fetch_word(&self, path: &str, language: Language) -> Result<Word, ServiceError> {
        let body: WordResponse = self.get_json(path, language).await?;
        Word::in_language(&body.word, language).map_err(|source| ServiceError::BadWord {
            word: body.word,
            source,
        })
    }

    /// The target word of another day
    ///
    /// # Errors
    /// Transport failures, non-success statuses and unusable words.
    pub async fn word_for_date(
        &self,
        language: Language,
        date: NaiveDate,
    ) -> Result<Word, ServiceError> {
        let path = format!("/word/{}", date.format("%Y-%m-%d"));
        self.fetch_word(&path, language).await
    }

    /// Word-list statistics for a language
    ///
    /// # Errors
    /// Transport failures, non-success statuses and malformed payloads.
    pub async fn stats(&self, language: Language) -> Result<ApiStats, ServiceError> {
        self.get_json("/stats", language).await
    }
}

#[async_trait]
impl WordProvider for ApiClient {
    async fn target_word(&self, language: Language) -> Result<Word, ServiceError> {
        self.fetch_word("/word", language).await
    }
}

#[async_trait]
impl WordValidator for ApiClient {
    async fn is_valid(&self, word: &Word, language: Language) -> Result<bool, ServiceError> {
        let body: ValidateResponse = self
            .get_json(&format!("/validate/{word}"), language)
            .await?;
        Ok(body.valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serve one canned HTTP response; the request line is sent back on the channel
    async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let request = String::from_utf8_lossy(&request);
            let request_line = request.lines().next().unwrap_or_default().to_string();
            let _ = tx.send(request_line);

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        (format!("http://{addr}/api/v1"), rx)
    }

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = client("https://api.wordle.click/api/v1/");
        assert_eq!(api.base_url(), "https://api.wordle.click/api/v1");
        assert_eq!(api.url("/stats"), "https://api.wordle.click/api/v1/stats");
    }

    #[tokio::test]
    async fn target_word_parses_payload() {
        let (base, request) = serve_once(
            "200 OK",
            r#"{"word":"house","date":"2025-03-14","lang":"en"}"#,
        )
        .await;

        let word = client(&base).target_word(Language::En).await.unwrap();
        assert_eq!(word, Word::new("HOUSE").unwrap());
        assert_eq!(request.await.unwrap(), "GET /api/v1/word?lang=en HTTP/1.1");
    }

    #[tokio::test]
    async fn target_word_outside_alphabet_is_rejected() {
        let (base, _request) = serve_once("200 OK", r#"{"word":"niños"}"#).await;

        let result = client(&base).target_word(Language::En).await;
        assert!(matches!(result, Err(ServiceError::BadWord { .. })));
    }

    #[tokio::test]
    async fn word_for_date_uses_dated_path() {
        let (base, request) = serve_once("200 OK", r#"{"word":"PLAYA","lang":"es"}"#).await;

        let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let word = client(&base).word_for_date(Language::Es, date).await.unwrap();
        assert_eq!(word.to_string(), "PLAYA");
        assert_eq!(
            request.await.unwrap(),
            "GET /api/v1/word/2025-01-02?lang=es HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn validate_reports_validity() {
        let (base, request) =
            serve_once("200 OK", r#"{"word":"MOUSE","valid":true,"lang":"en"}"#).await;

        let word = Word::new("mouse").unwrap();
        assert!(client(&base).is_valid(&word, Language::En).await.unwrap());
        assert_eq!(
            request.await.unwrap(),
            "GET /api/v1/validate/MOUSE?lang=en HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn validate_rejects_unknown_word() {
        let (base, _request) = serve_once("200 OK", r#"{"word":"XXXXX","valid":false}"#).await;

        let word = Word::new("xxxxx").unwrap();
        assert!(!client(&base).is_valid(&word, Language::En).await.unwrap());
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let (base, _request) = serve_once("500 Internal Server Error", "{}").await;

        let result = client(&base).target_word(Language::Es).await;
        assert!(matches!(
            result,
            Err(ServiceError::Status { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn malformed_payload_is_an_error() {
        let (base, _request) = serve_once("200 OK", r#"{"unexpected":1}"#).await;

        let word = Word::new("mouse").unwrap();
        assert!(client(&base).is_valid(&word, Language::En).await.is_err());
    }

    #[tokio::test]
    async fn stats_parses_payload() {
        let (base, _request) = serve_once(
            "200 OK",
            r#"{"total_words":2315,"api_version":"1.1.0","lang":"en"}"#,
        )
        .await;

        let stats = client(&base).stats(Language::En).await.unwrap();
        assert_eq!(
            stats,
            ApiStats {
                total_words: 2315,
                api_version: "1.1.0".into(),
                lang: "en".into(),
            }
        );
    }

    #[tokio::test]
    async fn unreachable_server_is_an_http_error() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = client(&format!("http://{addr}")).target_word(Language::En).await;
        assert!(matches!(result, Err(ServiceError::Http(_))));
    }
}
