use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

pub const PAGE_SIZE: u32 = 100;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Search criteria posted to the transactions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct FilterPayload {
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub contract: i64,
}

impl FilterPayload {
    /// The portal's date filter is end-exclusive at midnight, so the upper
    /// bound is advanced by one day to keep `to_date` itself in range.
    pub fn new(from_date: NaiveDate, to_date: NaiveDate, contract: i64) -> Self {
        Self {
            start_date: from_date.format(DATE_FORMAT).to_string(),
            start_time: "00:00".to_string(),
            end_date: (to_date + Days::new(1)).format(DATE_FORMAT).to_string(),
            end_time: "00:00".to_string(),
            contract,
        }
    }
}

/// The transactions endpoint answers with partial-update fragments keyed by
/// CSS selector rather than structured data; the interesting payload is two
/// server-rendered HTML snippets.
#[derive(Debug, Deserialize)]
pub struct FilterResponse {
    #[serde(rename = "#data-pagination")]
    pub pagination: String,
    #[serde(rename = "#data-table")]
    pub table: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn end_date_is_advanced_one_day() {
        let payload = FilterPayload::new(date(2024, 1, 1), date(2024, 7, 1), 1);
        assert_eq!(payload.start_date, "2024-01-01");
        assert_eq!(payload.end_date, "2024-07-02");
    }

    #[test]
    fn end_date_rolls_over_month_and_leap_day() {
        let payload = FilterPayload::new(date(2024, 1, 1), date(2024, 2, 28), 1);
        assert_eq!(payload.end_date, "2024-02-29");

        let payload = FilterPayload::new(date(2023, 1, 1), date(2023, 12, 31), 1);
        assert_eq!(payload.end_date, "2024-01-01");
    }

    #[test]
    fn both_bounds_are_midnight() {
        let payload = FilterPayload::new(date(2024, 1, 1), date(2024, 1, 2), 3);
        assert_eq!(payload.start_time, "00:00");
        assert_eq!(payload.end_time, "00:00");
    }

    #[test]
    fn payload_serializes_with_wire_field_names() {
        let payload = FilterPayload::new(date(2024, 1, 1), date(2024, 1, 2), 3);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["start_date"], "2024-01-01");
        assert_eq!(value["end_date"], "2024-01-03");
        assert_eq!(value["contract"], 3);
    }

    #[test]
    fn envelope_decodes_selector_keyed_fragments() {
        let raw = r##"{
            "#data-pagination": "<ul><li><a class=\"page-link\">2</a></li></ul>",
            "#data-table": "<table><tr><th>h</th></tr></table>",
            "X_OCTOBER_ASSETS": {}
        }"##;
        let envelope: FilterResponse = serde_json::from_str(raw).unwrap();
        assert!(envelope.pagination.contains("page-link"));
        assert!(envelope.table.starts_with("<table>"));
    }
}
