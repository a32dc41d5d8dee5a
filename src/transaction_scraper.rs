use anyhow::Context;
use chrono::NaiveDate;
use log::{info, warn};
use reqwest::StatusCode;

use crate::filter::{FilterPayload, FilterResponse, PAGE_SIZE};
use crate::invalid_credentials_error::InvalidCredentialsError;
use crate::models::{Credential, Transaction};
use crate::pagination::discover_page_count;
use crate::requests::{FILTER_HANDLER, RequestClient, SIGNIN_HANDLER};
use crate::stations::{StationDirectory, StationRecord};
use crate::transaction_parser::parse_transaction_table;

const DEFAULT_BASE_URL: &str = "https://test-app.avtoversant.ru";

/// Scrapes the fuel-card portal: one login session, then a filtered search
/// per contract, walking every result page and accumulating transactions.
pub struct TransactionScraper {
    base_url: String,
    client: RequestClient,
    credential: Option<Credential>,
    stations: StationDirectory,
    transactions: Vec<Transaction>,
}

impl TransactionScraper {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client: RequestClient::new()?,
            credential: None,
            stations: StationDirectory::default(),
            transactions: vec![],
        })
    }

    /// Logs in against the portal. The session cookie lands in the client's
    /// jar and authenticates every later request.
    pub async fn auth(&mut self, credential: Credential) -> anyhow::Result<()> {
        if let Some(url) = &credential.url {
            self.base_url = url.clone();
        }

        let auth_url = format!("{}/account/login", self.base_url);
        let payload = serde_json::json!({
            "login": credential.login,
            "password": credential.password,
        });
        let response = self
            .client
            .post_json(&auth_url, &payload, SIGNIN_HANDLER)
            .await?;
        check_login_status(response.status())?;

        self.credential = Some(credential);
        Ok(())
    }

    async fn get_stations(&mut self) -> anyhow::Result<()> {
        let stations_url = format!("{}/abakam/gasstations/stations", self.base_url);
        let response = self.client.get(&stations_url).await?;
        let records: Vec<StationRecord> = response.json().await?;
        self.stations.rebuild(records);
        if self.stations.is_empty() {
            warn!("Station directory came back empty; transactions will not be enriched");
        } else {
            info!("Loaded {} stations from the portal directory", self.stations.len());
        }
        Ok(())
    }

    /// Fetches every transaction in `[from_date, to_date]` across all of the
    /// credential's contracts, in contract-then-page-then-row order.
    ///
    /// Strictly sequential, no retries: the first transport or parse failure
    /// aborts the whole fetch.
    pub async fn get_transactions(
        &mut self,
        from_date: NaiveDate,
        to_date: NaiveDate,
    ) -> anyhow::Result<Vec<Transaction>> {
        let credential = self
            .credential
            .clone()
            .context("get_transactions called before auth")?;

        self.transactions.clear();
        self.get_stations().await?;

        for contract in parse_contracts(&credential.contracts)? {
            let payload = FilterPayload::new(from_date, to_date, contract);

            // The first page also tells us how many pages there are.
            let first_page = self.fetch_page(&payload, 1).await?;
            let total_pages = discover_page_count(&first_page.pagination);
            info!("Contract {contract}: {total_pages} result pages");

            let parsed =
                parse_transaction_table(&first_page.table, &self.stations, &credential)?;
            self.transactions.extend(parsed);

            for page in 2..=total_pages {
                let response = self.fetch_page(&payload, page).await?;
                let parsed =
                    parse_transaction_table(&response.table, &self.stations, &credential)?;
                self.transactions.extend(parsed);
            }
        }

        Ok(std::mem::take(&mut self.transactions))
    }

    async fn fetch_page(
        &self,
        payload: &FilterPayload,
        page: u32,
    ) -> anyhow::Result<FilterResponse> {
        let url = format!(
            "{}/account/transactions?page_size={PAGE_SIZE}&page={page}",
            self.base_url
        );
        let response = self.client.post_json(&url, payload, FILTER_HANDLER).await?;
        let envelope = response
            .json::<FilterResponse>()
            .await
            .context("transactions response is missing the expected fragments")?;
        Ok(envelope)
    }
}

fn check_login_status(status: StatusCode) -> Result<(), InvalidCredentialsError> {
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(InvalidCredentialsError)
    }
}

// Contract numbers come as one comma-separated string on the credential.
// Listed order is processing order; duplicates are kept.
fn parse_contracts(contracts: &str) -> anyhow::Result<Vec<i64>> {
    contracts
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .with_context(|| format!("bad contract number {token:?}"))
        })
        .collect()
}
