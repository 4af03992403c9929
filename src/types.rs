use serde::{Deserialize, Serialize};

/// Anchor text that marks the weekly ad link on a store page.
pub const MARKER_PHRASE: &str = "View Weekly Ad";

/// Origin prefixed onto site-relative ad links.
pub const BASE_ORIGIN: &str = "https://www.aldi.us";

pub const DEFAULT_WORKERS: usize = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Header row of the harvester output file.
pub const OUTPUT_HEADER: [&str; 2] = ["store_url", "weekly_ad_url"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: "Mozilla/5.0".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    pub workers: usize,
    pub marker: String,
    pub base_origin: String,
    pub fetch: FetchConfig,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            marker: MARKER_PHRASE.into(),
            base_origin: BASE_ORIGIN.into(),
            fetch: FetchConfig::default(),
        }
    }
}

/// Terminal state of one work item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdResult {
    /// Resolved absolute link to the weekly ad.
    Found(String),
    /// Page fetched fine but carried no matching link.
    NotFound,
    /// Fetch-layer failure, described.
    Failed(String),
}

impl AdResult {
    /// The exact string recorded in the `weekly_ad_url` column.
    pub fn into_field(self) -> String {
        match self {
            AdResult::Found(url) => url,
            AdResult::NotFound => "NOT FOUND".to_string(),
            AdResult::Failed(reason) => format!("ERROR: {reason}"),
        }
    }
}

/// One completed work item, as handed to the sink.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub store_url: String,
    pub result: AdResult,
}

/// One data row of the harvester output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkRecord {
    pub store_url: String,
    pub weekly_ad_url: String,
}

impl From<Outcome> for LinkRecord {
    fn from(o: Outcome) -> Self {
        Self {
            store_url: o.store_url,
            weekly_ad_url: o.result.into_field(),
        }
    }
}
