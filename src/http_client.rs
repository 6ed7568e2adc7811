//! Assessor page fetching.
//!
//! - Current data: `GET {base}/displaygeneral.do?sch={schedule}`
//! - History: the server only serves `displayhistory.do` to a session that
//!   has already opened the schedule's general page, so each history query
//!   gets its own cookie jar and visits both pages in order.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{debug, info, instrument};
use url::Url;

use crate::config::AssessorConfig;
use crate::extract::PropertyExtractor;
use crate::record::Record;

/// HTTP client for one assessor site.
pub struct AssessorClient {
    client: Client,
    config: AssessorConfig,
    extractor: PropertyExtractor,
}

impl AssessorClient {
    /// Create a client using the config file (or defaults).
    pub fn new() -> Result<Self> {
        Self::with_config(AssessorConfig::load()?)
    }

    /// Create a client with explicit settings.
    pub fn with_config(config: AssessorConfig) -> Result<Self> {
        let client = build_client(&config, false)?;
        let extractor = PropertyExtractor::new().with_column_policy(config.column_policy);

        Ok(Self {
            client,
            config,
            extractor,
        })
    }

    /// URL of the current-data page for `schedule`.
    pub fn general_url(&self, schedule: &str) -> Result<Url> {
        page_url(&self.config.base_url, "displaygeneral.do", &[("sch", schedule)])
    }

    /// URL of the history page for `schedule` in `year`.
    pub fn history_url(&self, schedule: &str, year: &str) -> Result<Url> {
        page_url(
            &self.config.base_url,
            "displayhistory.do",
            &[("sch", schedule), ("year", year)],
        )
    }

    /// Fetch the current-data page as HTML.
    #[instrument(skip(self))]
    pub async fn fetch_general(&self, schedule: &str) -> Result<String> {
        let url = self.general_url(schedule)?;
        fetch_text(&self.client, url).await
    }

    /// Fetch the history page for `year` as HTML, in a fresh session.
    #[instrument(skip(self))]
    pub async fn fetch_history(&self, schedule: &str, year: &str) -> Result<String> {
        let session = build_client(&self.config, true)?;

        let general = self.general_url(schedule)?;
        fetch_text(&session, general)
            .await
            .context("Failed to open history session")?;

        let history = self.history_url(schedule, year)?;
        fetch_text(&session, history).await
    }

    /// Fetch and extract the current record for `schedule`.
    pub async fn get_property_data(&self, schedule: &str) -> Result<Record> {
        let html = self.fetch_general(schedule).await?;
        let record = self
            .extractor
            .extract_html(&html)
            .with_context(|| format!("Failed to extract schedule {schedule}"))?;
        Ok(record)
    }

    /// Fetch and extract the record for `schedule` as of `year`.
    pub async fn get_property_history(&self, schedule: &str, year: &str) -> Result<Record> {
        let html = self.fetch_history(schedule, year).await?;
        let record = self
            .extractor
            .extract_html(&html)
            .with_context(|| format!("Failed to extract schedule {schedule} for {year}"))?;
        Ok(record)
    }
}

fn build_client(config: &AssessorConfig, cookies: bool) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .gzip(true)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.timeout_secs))
        .redirect(reqwest::redirect::Policy::limited(10))
        .cookie_store(cookies)
        .build()?;
    Ok(client)
}

fn page_url(base: &str, page: &str, params: &[(&str, &str)]) -> Result<Url> {
    let endpoint = format!("{}/{page}", base.trim_end_matches('/'));
    Url::parse_with_params(&endpoint, params)
        .with_context(|| format!("Invalid assessor base URL: {base}"))
}

async fn fetch_text(client: &Client, url: Url) -> Result<String> {
    debug!(url = %url, "Fetching assessor page");
    let response = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("Request to {url} failed"))?
        .error_for_status()
        .with_context(|| format!("Assessor returned an error for {url}"))?;

    info!(status = %response.status(), "Response received");

    response
        .text()
        .await
        .with_context(|| format!("Failed to read body of {url}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base_url: &str) -> AssessorClient {
        AssessorClient::with_config(AssessorConfig {
            base_url: base_url.to_string(),
            ..AssessorConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn builds_general_url() {
        let client = client_for("http://ats.jeffco.us/ats");
        assert_eq!(
            client.general_url("300123").unwrap().as_str(),
            "http://ats.jeffco.us/ats/displaygeneral.do?sch=300123"
        );
    }

    #[test]
    fn builds_history_url_with_trailing_slash_base() {
        let client = client_for("http://ats.jeffco.us/ats/");
        assert_eq!(
            client.history_url("300123", "2015").unwrap().as_str(),
            "http://ats.jeffco.us/ats/displayhistory.do?sch=300123&year=2015"
        );
    }

    #[test]
    fn schedule_is_query_encoded() {
        let client = client_for("http://localhost/ats");
        let url = client.general_url("30 01&x=1").unwrap();
        assert_eq!(url.query(), Some("sch=30+01%26x%3D1"));
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let client = client_for("not a url");
        let err = client.general_url("1").unwrap_err();
        assert!(err.to_string().contains("not a url"));
    }
}
