//! Public facade over the extractor and the harvester.

use crate::engine::{Fetcher, Harvester};
use crate::error::Result;
use crate::services::fetch::ReqwestFetcher;
use crate::services::sink::CsvSink;
use crate::types::HarvestConfig;
use std::fs;
use std::path::Path;

/// Everything the harvester needs, bundled for callers.
pub struct Components {
    pub fetcher: Box<dyn Fetcher>,
    pub cfg: HarvestConfig,
}

impl Default for Components {
    fn default() -> Self {
        let cfg = HarvestConfig::default();
        let fetcher = ReqwestFetcher::new(&cfg.fetch).expect("failed to init reqwest client");
        Self {
            fetcher: Box::new(fetcher),
            cfg,
        }
    }
}

/// Filter predicate for the URL list: trim every line, keep the non-empty
/// ones. Dropping whitespace-only lines is intentional, not an error.
pub fn accepted_urls(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read the URL list file and harvest every entry into `output`.
///
/// Setup failures (unreadable input, uncreatable output) propagate;
/// per-item failures only ever become recorded rows.
pub fn harvest_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    components: &Components,
) -> Result<()> {
    let urls = accepted_urls(&fs::read_to_string(input)?);
    let sink = CsvSink::create(output)?;
    Harvester::new(&*components.fetcher, &components.cfg).run(urls, &sink);
    sink.finish()
}

/// See [`crate::extract::extract_column`].
pub fn extract_column_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<usize> {
    crate::extract::extract_column(input, output)
}
