use crate::error::Result;
use crate::services::{scrape, sink::CsvSink};
use crate::types::{AdResult, HarvestConfig, Outcome};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::thread;

/// Transport seam. The real implementation is
/// [`ReqwestFetcher`](crate::services::fetch::ReqwestFetcher); tests drive
/// the pool with a stub.
pub trait Fetcher: Send + Sync {
    fn name(&self) -> &'static str;
    fn fetch(&self, url: &str) -> Result<String>;
}

pub struct Harvester<'a> {
    fetcher: &'a dyn Fetcher,
    cfg: &'a HarvestConfig,
}

impl<'a> Harvester<'a> {
    pub fn new(fetcher: &'a dyn Fetcher, cfg: &'a HarvestConfig) -> Self {
        Self { fetcher, cfg }
    }

    /// Run every URL through fetch → parse → record.
    ///
    /// A fixed pool of workers pulls from a shared queue; whichever worker
    /// frees up first takes the next URL. Per-item failures become recorded
    /// rows, never a pool shutdown. Output order is completion order.
    pub fn run(&self, urls: Vec<String>, sink: &CsvSink) {
        let queue = Mutex::new(VecDeque::from(urls));
        let workers = self.cfg.workers.max(1);

        thread::scope(|s| {
            for _ in 0..workers {
                let tx = sink.sender();
                let queue = &queue;
                s.spawn(move || loop {
                    let url = queue.lock().unwrap().pop_front();
                    let Some(url) = url else { break };
                    let result = self.process(&url);
                    let outcome = Outcome {
                        store_url: url,
                        result,
                    };
                    // Sink gone means the writer bailed; stop pulling work.
                    if tx.send(outcome).is_err() {
                        break;
                    }
                });
            }
        });
    }

    fn process(&self, url: &str) -> AdResult {
        match self.fetcher.fetch(url) {
            Ok(html) => scrape::find_ad_link(&html, &self.cfg.marker, &self.cfg.base_origin),
            Err(e) => AdResult::Failed(e.to_string()),
        }
    }
}
