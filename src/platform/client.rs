use reqwest::{Client, Url};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tokio::time::{Duration, timeout};

use crate::{
    allocation::types::Item,
    catalog::Catalog,
    platform::{
        error::PlatformError,
        wire::{ChapterContentData, ChapterListData, Envelope},
    },
};

fn default_base_url() -> String {
    "https://www.webnovel.com".to_string()
}

fn default_request_timeout_ms() -> u64 {
    15_000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

/// Thin client over the platform's public chapter endpoints.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    client: Client,
    base_url: String,
    request_timeout: Duration,
}

impl PlatformClient {
    pub fn new(config: &PlatformConfig) -> Result<Self, PlatformError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        match Url::parse(&base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(PlatformError::InvalidUrl(config.base_url.clone())),
        }

        // No cookie store: session cookies make the public endpoints reject requests.
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url,
            request_timeout: Duration::from_millis(config.request_timeout_ms.max(1)),
        })
    }

    pub async fn chapter_list(&self, book_id: &str) -> Result<ChapterListData, PlatformError> {
        self.get("apiajax/chapter/GetChapterList", &[("bookId", book_id)])
            .await
    }

    pub async fn chapter_cost(
        &self,
        book_id: &str,
        chapter_id: &str,
    ) -> Result<u64, PlatformError> {
        let content: ChapterContentData = self
            .get(
                "apiajax/chapter/GetContent",
                &[("bookId", book_id), ("chapterId", chapter_id)],
            )
            .await?;
        Ok(content.chapter_info.ss_price)
    }

    /// Every chapter across all volumes, in reading order.
    pub async fn catalog(&self, book_id: &str) -> Result<Catalog, PlatformError> {
        let data = self.chapter_list(book_id).await?;
        let items = data
            .volume_items
            .into_iter()
            .flat_map(|volume| volume.chapter_items)
            .enumerate()
            .map(|(position, chapter)| Item {
                locked: chapter.is_locked(),
                id: chapter.id,
                position,
                cost: None,
                number: chapter.index,
                title: chapter.name,
            })
            .collect();

        Ok(Catalog::new(book_id, items))
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, PlatformError> {
        let url = format!("{}/{}", self.base_url, path);
        let timeout_ms = self.request_timeout.as_millis() as u64;

        let request = self
            .client
            .get(&url)
            .query(&[("_csrfToken", "")])
            .query(params);

        let response = timeout(self.request_timeout, request.send())
            .await
            .map_err(|_| PlatformError::Timeout(timeout_ms))??;

        let status = response.status().as_u16();
        let body = timeout(self.request_timeout, response.text())
            .await
            .map_err(|_| PlatformError::Timeout(timeout_ms))??;

        if !(200..300).contains(&status) {
            return Err(PlatformError::Status {
                status,
                body: body.chars().take(240).collect(),
            });
        }

        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        envelope.into_data()
    }
}
