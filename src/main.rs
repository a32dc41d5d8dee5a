use dotenv::dotenv;
use tankman::{PortalConfig, TransactionScraper};

extern crate env_logger;
extern crate log;

use log::LevelFilter;

use log::{error, info};

async fn run_transaction_scraper_job() -> anyhow::Result<()> {
    let config = PortalConfig::new()?;
    let credential = config.credential();

    let mut scraper = TransactionScraper::new()?;
    scraper.auth(credential).await?;

    let transactions = scraper
        .get_transactions(config.fetch_from_date()?, config.fetch_to_date()?)
        .await?;

    info!("Fetched {} transactions", transactions.len());
    for transaction in transactions.iter().take(10) {
        println!("{transaction:?}");
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .init();

    if let Err(e) = run_transaction_scraper_job().await {
        error!("Scrape failed: {e:#}");
        std::process::exit(1);
    }
}
