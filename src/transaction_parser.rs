use anyhow::Context;
use chrono::NaiveDateTime;
use scraper::{Html, Selector};

use crate::models::{Credential, Transaction};
use crate::stations::StationDirectory;
use crate::text_manipulators::extract_text;

// Rows carrying this service are balance top-ups, not fuel purchases.
const TOP_UP_SERVICE: &str = "Пополнение баланса";

const ROW_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Turns one `#data-table` fragment into transactions, one per data row.
///
/// Column layout is fixed: 0 = code, 1 = timestamp, 3 = card, 4 = station
/// name, 5 = service; the last two columns are volume and sum. The first
/// row is the column header. Parsing is purely row-local.
pub fn parse_transaction_table(
    fragment: &str,
    stations: &StationDirectory,
    credential: &Credential,
) -> anyhow::Result<Vec<Transaction>> {
    let document = Html::parse_fragment(fragment);
    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let table = document
        .select(&table_selector)
        .next()
        .context("no <table> in transaction fragment")?;

    let mut transactions = vec![];
    for row in table.select(&row_selector).skip(1) {
        let cells: Vec<String> = row
            .select(&cell_selector)
            .map(|cell| extract_text(cell).trim().to_string())
            .collect();
        if cells.len() < 6 {
            anyhow::bail!(
                "transaction row has {} cells, expected at least 6",
                cells.len()
            );
        }

        let service = cells[5].clone();
        if service == TOP_UP_SERVICE {
            continue;
        }

        let date = NaiveDateTime::parse_from_str(&cells[1], ROW_DATE_FORMAT)
            .with_context(|| format!("unparsable transaction date {:?}", cells[1]))?;

        transactions.push(Transaction {
            credential: credential.clone(),
            station: stations.lookup(&cells[4]),
            card: cells[3].clone(),
            code: cells[0].clone(),
            date,
            service,
            sum: parse_decimal(&cells[cells.len() - 1])?,
            volume: parse_decimal(&cells[cells.len() - 2])?,
        });
    }

    Ok(transactions)
}

// Amounts come back in Russian locale formatting: decimal comma, regular or
// non-breaking spaces as thousands separators.
fn parse_decimal(raw: &str) -> anyhow::Result<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    cleaned
        .parse::<f64>()
        .with_context(|| format!("unparsable numeric field {raw:?}"))
}
