use regex::Regex;
use scraper::{Html, Selector};

/// Works out how many result pages a filtered search produced.
///
/// The portal renders pagination as an HTML fragment; each page link carries
/// its page index inside the `data-request-data` attribute. The first
/// contiguous digit run in that attribute is the page number. No usable
/// links means everything fit on the page already fetched.
pub fn discover_page_count(fragment: &str) -> u32 {
    let document = Html::parse_fragment(fragment);
    let link_selector = Selector::parse("a.page-link").unwrap();
    let digit_run = Regex::new(r"\d+").unwrap();

    let mut max_page = 1;
    for link in document.select(&link_selector) {
        let Some(page_data) = link.value().attr("data-request-data") else {
            continue;
        };
        let Some(digits) = digit_run.find(page_data) else {
            continue;
        };
        if let Ok(page_number) = digits.as_str().parse::<u32>() {
            max_page = max_page.max(page_number);
        }
    }
    max_page
}
