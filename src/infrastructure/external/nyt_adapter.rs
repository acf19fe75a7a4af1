//! NYT クライアントのアダプター実装
//! Application層のSolutionFetcherトレイトを実装

use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;
use tracing::debug;

use crate::application::traits::SolutionFetcher;
use crate::error::Result;
use crate::infrastructure::external::nyt::NytClient;

/// NYT APIのアダプター
pub struct NytSolutionFetcher {
    client: NytClient,
}

impl NytSolutionFetcher {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: NytClient::new(base_url, timeout)?,
        })
    }
}

#[async_trait]
impl SolutionFetcher for NytSolutionFetcher {
    async fn fetch(&self, date: NaiveDate) -> Option<String> {
        match self.client.fetch_solution(date).await {
            Ok(word) => Some(word),
            Err(e) => {
                debug!(url = %self.client.endpoint(date), error = %e, "no solution fetched");
                None
            }
        }
    }
}
