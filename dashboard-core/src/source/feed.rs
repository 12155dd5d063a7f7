use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::events::Event;
use reqwest::Client;

use crate::model::{FeedSummary, FetchError, Fetched};

use super::{HTTP_TIMEOUT, SummarySource, truncate_body};

/// Sentinel summary for a feed that parsed cleanly but carried no item
/// description. Not an error: quiet agencies publish empty feeds.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Fetches a syndication feed and extracts the first item's description.
#[derive(Debug, Clone)]
pub struct FeedFetcher {
    http: Client,
}

impl FeedFetcher {
    pub fn new() -> anyhow::Result<Self> {
        let http = Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self { http })
    }

    async fn fetch(&self, url: &str) -> Fetched<String> {
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| FetchError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        summary_text(&body)
    }
}

/// Reduce a feed body to its summary text: the first item description, or
/// the no-description sentinel.
fn summary_text(body: &str) -> Fetched<String> {
    match first_item_description(body)? {
        Some(text) => Ok(text),
        None => Ok(NO_DESCRIPTION.to_string()),
    }
}

#[async_trait]
impl SummarySource for FeedFetcher {
    async fn first_summary(&self, url: &str) -> FeedSummary {
        let text = self.fetch(url).await;

        if let Err(err) = &text {
            tracing::warn!("feed fetch from {url} degraded: {err}");
        }

        FeedSummary { source_url: url.to_string(), text }
    }
}

/// Pull the first `<item>`'s first `<description>` text out of a feed body.
///
/// Pure function of the input bytes. Descriptions arrive both as plain text
/// and as CDATA depending on the agency.
fn first_item_description(body: &str) -> Result<Option<String>, FetchError> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut in_item = false;
    let mut in_description = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"item" => in_item = true,
                b"description" if in_item => in_description = true,
                _ => {}
            },
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"item" => in_item = false,
                // The first item's description closed without any text; its
                // empty content is the answer, not a later item's.
                b"description" if in_description => return Ok(None),
                _ => {}
            },
            Ok(Event::Empty(e)) if in_item && e.local_name().as_ref() == b"description" => {
                return Ok(None);
            }
            Ok(Event::Text(t)) if in_description => {
                let text = t.unescape().map_err(|e| FetchError::Parse(e.to_string()))?;
                return Ok(Some(text.into_owned()));
            }
            Ok(Event::CData(t)) if in_description => {
                let text = String::from_utf8_lossy(&t.into_inner()).into_owned();
                return Ok(Some(text));
            }
            Ok(Event::Eof) => return Ok(None),
            Err(e) => return Err(FetchError::Parse(e.to_string())),
            Ok(_) => {}
        }
    }
}
