use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, de::DeserializeOwned};

use crate::models::Credential;

/// The env vars needed for scraping the portal.
#[derive(Debug, Deserialize)]
pub struct PortalEnv {
    portal_url: Option<String>,
    portal_login: String,
    portal_password: String,
    portal_token: Option<String>,
    portal_contracts: String,
    fetch_from_date: String,
    fetch_to_date: String,
}

pub struct PortalConfig {
    env: PortalEnv,
}

impl PortalConfig {
    pub fn new() -> anyhow::Result<Self> {
        let env = PortalEnv::load_from_env()?;
        Ok(Self { env })
    }

    pub fn credential(&self) -> Credential {
        Credential {
            url: self.env.portal_url.clone(),
            login: self.env.portal_login.clone(),
            password: self.env.portal_password.clone(),
            token: self.env.portal_token.clone(),
            contracts: self.env.portal_contracts.clone(),
        }
    }

    pub fn fetch_from_date(&self) -> anyhow::Result<NaiveDate> {
        parse_fetch_date(&self.env.fetch_from_date).context("couldn't parse FETCH_FROM_DATE")
    }

    pub fn fetch_to_date(&self) -> anyhow::Result<NaiveDate> {
        parse_fetch_date(&self.env.fetch_to_date).context("couldn't parse FETCH_TO_DATE")
    }
}

fn parse_fetch_date(raw: &str) -> anyhow::Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")?;
    Ok(date)
}

// Extension trait.
pub trait LoadFromEnv: DeserializeOwned {
    fn load_from_env() -> anyhow::Result<Self> {
        // Don't throw an error if .env file doesn't exist.
        let _ = dotenv::dotenv();
        let config =
            envy::from_env::<Self>().context("failed to load env variables into config struct")?;
        Ok(config)
    }
}

impl<T: DeserializeOwned> LoadFromEnv for T {}
