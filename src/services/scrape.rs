use crate::selectors::ANCHOR_SELECTOR;
use crate::types::AdResult;
use scraper::Html;

/// Search `html` for the first anchor whose text content contains `marker`
/// (case-sensitive substring match) and return its link.
///
/// Site-relative hrefs (leading `/`) are resolved by prefixing
/// `base_origin`; everything else passes through verbatim. The first
/// matching anchor decides: if it has no `href`, the page is NOT FOUND.
pub fn find_ad_link(html: &str, marker: &str, base_origin: &str) -> AdResult {
    let doc = Html::parse_document(html);
    for el in doc.select(&ANCHOR_SELECTOR) {
        let text = el.text().collect::<String>();
        if !text.contains(marker) {
            continue;
        }
        return match el.value().attr("href") {
            Some(href) if href.starts_with('/') => {
                AdResult::Found(format!("{base_origin}{href}"))
            }
            Some(href) => AdResult::Found(href.to_string()),
            None => AdResult::NotFound,
        };
    }
    AdResult::NotFound
}
