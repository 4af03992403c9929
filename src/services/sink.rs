use crate::error::{AdcrawlError, Result};
use crate::services::log::{self, LogLevel};
use crate::types::{AdResult, LinkRecord, Outcome, OUTPUT_HEADER};
use std::fs::File;
use std::path::Path;
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

/// Single owner of the output file.
///
/// Workers hand completed [`Outcome`]s over a channel to a dedicated writer
/// thread; the thread appends one full CSV row per outcome and flushes, so
/// rows can never interleave no matter how workers finish.
pub struct CsvSink {
    tx: Sender<Outcome>,
    writer: JoinHandle<Result<()>>,
}

impl CsvSink {
    /// Create (truncating) the output file, write the header row, and start
    /// the writer thread.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        wtr.write_record(OUTPUT_HEADER)?;
        wtr.flush()?;

        let (tx, rx) = mpsc::channel::<Outcome>();
        let writer = thread::spawn(move || -> Result<()> {
            for outcome in rx {
                let level = match outcome.result {
                    AdResult::Failed(_) => LogLevel::Error,
                    _ => LogLevel::Info,
                };
                let record = LinkRecord::from(outcome);
                wtr.serialize(&record)?;
                wtr.flush()?;
                let detail = match level {
                    LogLevel::Info => format!("→ {}", record.weekly_ad_url),
                    LogLevel::Error => record.weekly_ad_url.clone(),
                };
                log::notice(level, &record.store_url, &detail);
            }
            wtr.flush()?;
            Ok(())
        });

        Ok(Self { tx, writer })
    }

    /// Handle a worker uses to submit outcomes.
    pub fn sender(&self) -> Sender<Outcome> {
        self.tx.clone()
    }

    /// Close the channel and wait for the writer to drain.
    pub fn finish(self) -> Result<()> {
        drop(self.tx);
        match self.writer.join() {
            Ok(res) => res,
            Err(_) => Err(AdcrawlError::Other("record writer panicked".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_written_before_any_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let sink = CsvSink::create(&path).unwrap();
        sink.finish().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "store_url,weekly_ad_url\n");
    }

    #[test]
    fn fields_with_commas_stay_one_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let sink = CsvSink::create(&path).unwrap();
        let tx = sink.sender();
        tx.send(Outcome {
            store_url: "https://stores.aldi.us/a".into(),
            result: AdResult::Failed("boom, with comma".into()),
        })
        .unwrap();
        drop(tx);
        sink.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> =
            rdr.records().collect::<std::result::Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(&rows[0][1], "ERROR: boom, with comma");
    }

    #[test]
    fn rerun_truncates_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let sink = CsvSink::create(&path).unwrap();
        let tx = sink.sender();
        tx.send(Outcome {
            store_url: "https://stores.aldi.us/a".into(),
            result: AdResult::NotFound,
        })
        .unwrap();
        drop(tx);
        sink.finish().unwrap();

        let sink = CsvSink::create(&path).unwrap();
        sink.finish().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "store_url,weekly_ad_url\n");
    }
}
