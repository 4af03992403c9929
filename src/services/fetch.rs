use crate::engine::Fetcher as FetcherT;
use crate::error::{AdcrawlError, Result};
use crate::types::FetchConfig;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use std::time::Duration;
use url::Url;

const REDIRECT_LIMIT: usize = 10;

pub struct ReqwestFetcher {
    client: Client,
    user_agent: String,
}

impl ReqwestFetcher {
    pub fn new(cfg: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .redirect(reqwest::redirect::Policy::limited(REDIRECT_LIMIT))
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            user_agent: cfg.user_agent.clone(),
        })
    }
}

impl FetcherT for ReqwestFetcher {
    fn name(&self) -> &'static str {
        "reqwest-blocking"
    }

    fn fetch(&self, url: &str) -> Result<String> {
        let parsed = Url::parse(url).map_err(|_| AdcrawlError::InvalidUrl(url.into()))?;
        let resp = self
            .client
            .get(parsed)
            .header(USER_AGENT, self.user_agent.as_str())
            .send()?;
        // No status gating: a non-2xx body is still HTML, and a status page
        // without the marker link records NOT FOUND rather than an error.
        Ok(resp.text()?)
    }
}
