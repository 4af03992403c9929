//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

/// Selector for anchor elements. Plain `a`, not `a[href]`: a matching
/// anchor without an href still decides the page as NOT FOUND.
pub static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("valid anchor selector"));
