use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::domain::solution::DATE_FORMAT;
use crate::error::{Result, SolutionsError};

#[derive(Debug, Deserialize)]
struct PuzzleResponse {
    #[serde(default)]
    solution: Option<String>,
}

/// 1 回の取得が失敗した理由。呼び出し側では「結果なし」として扱う
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("invalid response body: {0}")]
    Body(#[from] serde_json::Error),

    #[error("response has no solution")]
    MissingSolution,
}

/// `<base_url>/<YYYY-MM-DD>.json` から解答を取得するクライアント
pub struct NytClient {
    base_url: String,
    client: Client,
}

impl NytClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| SolutionsError::HttpClientInit(e.to_string()))?,
        })
    }

    pub fn endpoint(&self, date: NaiveDate) -> String {
        format!("{}/{}.json", self.base_url, date.format(DATE_FORMAT))
    }

    /// 1 回だけ GET し、`solution` を大文字化して返す。再試行はしない
    pub async fn fetch_solution(&self, date: NaiveDate) -> std::result::Result<String, FetchError> {
        let response = self.client.get(self.endpoint(date)).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let parsed: PuzzleResponse = serde_json::from_str(&body)?;

        match parsed.solution {
            Some(word) if !word.is_empty() => Ok(word.to_uppercase()),
            _ => Err(FetchError::MissingSolution),
        }
    }
}
