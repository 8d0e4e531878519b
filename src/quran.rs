//! Reference-text provider backed by a remote Quran text API.
//!
//! The provider returns plain verse texts; filtering punctuation and
//! annotation signs out of them is the word-extraction step's job, not the
//! provider's. Fetch failures are collaborator failures: the caller surfaces
//! them and may retry, the engine is unaffected.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_API_URL: &str = "https://api.quran.com/api/v4";
const PAGE_SIZE: usize = 50;
const REQUEST_TIMEOUT_SECS: u64 = 15;

/// One verse of a chapter as the API returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct Verse {
    /// 1-indexed position within the chapter.
    pub number: u32,
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct VersesResponse {
    verses: Vec<Verse>,
}

/// HTTP client for the reference text source.
#[derive(Clone)]
pub struct QuranClient {
    base_url: String,
    client: reqwest::Client,
}

impl QuranClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Fetch the verses of one chapter, optionally limited to a 1-indexed
    /// inclusive verse range. Pages through the chapter by offset/limit until
    /// a short page arrives.
    pub async fn fetch_chapter(
        &self,
        chapter: u32,
        range: Option<(u32, u32)>,
    ) -> Result<Vec<Verse>> {
        let url = format!("{}/chapters/{}/verses", self.base_url, chapter);
        let mut verses: Vec<Verse> = Vec::new();
        let mut offset = 0usize;

        loop {
            tracing::debug!(%url, offset, limit = PAGE_SIZE, "fetching reference verses");
            let response = self
                .client
                .get(&url)
                .query(&[
                    ("offset", offset.to_string()),
                    ("limit", PAGE_SIZE.to_string()),
                ])
                .send()
                .await
                .with_context(|| format!("requesting chapter {chapter}"))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                anyhow::bail!("reference API returned {status}: {body}");
            }

            let page: VersesResponse = response
                .json()
                .await
                .context("decoding verses response")?;
            let fetched = page.verses.len();
            verses.extend(page.verses);

            if fetched < PAGE_SIZE {
                break;
            }
            offset += fetched;
        }

        tracing::info!(chapter, count = verses.len(), "fetched reference chapter");
        Ok(apply_range(verses, range))
    }

    /// Concatenated plain text of a passage, ready for word extraction.
    pub async fn fetch_passage(&self, chapter: u32, range: Option<(u32, u32)>) -> Result<String> {
        let verses = self.fetch_chapter(chapter, range).await?;
        Ok(verses
            .iter()
            .map(|v| v.text.as_str())
            .collect::<Vec<_>>()
            .join(" "))
    }
}

/// Keep only verses inside the inclusive 1-indexed range, when one is given.
fn apply_range(verses: Vec<Verse>, range: Option<(u32, u32)>) -> Vec<Verse> {
    match range {
        Some((start, end)) => verses
            .into_iter()
            .filter(|v| v.number >= start && v.number <= end)
            .collect(),
        None => verses,
    }
}
