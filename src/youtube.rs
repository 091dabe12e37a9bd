use serde::Deserialize;
use std::env;
use std::time::Duration;
use tracing::{debug, info, warn};

use commentscope::config::FetchConfig;
use commentscope::extract_video_id;

#[derive(Clone)]
pub struct YouTubeClient {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    page_size: u32,
    page_delay: Duration,
}

impl YouTubeClient {
    pub fn from_env(config: &FetchConfig) -> Result<Self, String> {
        let api_key = env::var("YOUTUBE_API_KEY")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| "YOUTUBE_API_KEY is not set".to_string())?;
        Self::new(api_key, config)
    }

    pub fn new(api_key: String, config: &FetchConfig) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|err| format!("failed to build YouTube client: {}", err))?;
        Ok(Self {
            client,
            api_base: config.api_base.clone(),
            api_key,
            page_size: config.page_size.max(1),
            page_delay: Duration::from_millis(config.page_delay_ms),
        })
    }

    // Collects until the requested maximum, the end of pagination, or the
    // first request failure. Errors degrade to whatever was collected so far.
    pub async fn fetch_comments(&self, video_url: &str, max_comments: usize) -> Vec<String> {
        let Some(video_id) = extract_video_id(video_url) else {
            warn!(url = %video_url, "invalid video URL, no video id found");
            return Vec::new();
        };

        info!(video_id = %video_id, max_comments, "fetching comment threads");

        let mut comments: Vec<String> = Vec::new();
        let mut page_token: Option<String> = None;

        while comments.len() < max_comments {
            let remaining = (max_comments - comments.len()) as u32;
            let page = match self
                .fetch_page(&video_id, self.page_size.min(remaining), page_token.as_deref())
                .await
            {
                Ok(page) => page,
                Err(err) => {
                    warn!(error = %err, fetched = comments.len(), "comment listing failed, stopping collection");
                    break;
                }
            };

            for item in page.items {
                if comments.len() >= max_comments {
                    break;
                }
                comments.push(item.snippet.top_level_comment.snippet.text_display);
            }
            debug!(total = comments.len(), "fetched comment page");

            match page.next_page_token {
                Some(token) if comments.len() < max_comments => {
                    page_token = Some(token);
                    tokio::time::sleep(self.page_delay).await;
                }
                _ => break,
            }
        }

        info!(total = comments.len(), "comment collection finished");
        comments
    }

    async fn fetch_page(
        &self,
        video_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<CommentThreadsPage, String> {
        let url = format!("{}/commentThreads", self.api_base.trim_end_matches('/'));
        let mut query: Vec<(&str, String)> = vec![
            ("part", "snippet".to_string()),
            ("videoId", video_id.to_string()),
            ("maxResults", page_size.to_string()),
            ("key", self.api_key.clone()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token.to_string()));
        }

        let response = self
            .client
            .get(url)
            .query(&query)
            .send()
            .await
            .map_err(|err| format!("YouTube API request failed: {}", err))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_else(|_| String::new());
            let detail = error_body.trim();
            if detail.is_empty() {
                return Err(format!("YouTube API error: {}", status));
            }
            return Err(format!("YouTube API error: {} {}", status, detail));
        }

        response
            .json::<CommentThreadsPage>()
            .await
            .map_err(|err| format!("YouTube API response parse failed: {}", err))
    }
}

#[derive(Debug, Deserialize)]
struct CommentThreadsPage {
    #[serde(default)]
    items: Vec<CommentThread>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
struct CommentThreadSnippet {
    #[serde(rename = "topLevelComment")]
    top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
struct CommentSnippet {
    #[serde(rename = "textDisplay")]
    text_display: String,
}
