mod config;
mod invalid_credentials_error;
mod models;

mod filter;
mod pagination;
mod requests;
mod stations;
mod text_manipulators;
mod transaction_parser;
mod transaction_scraper;

pub use config::PortalConfig;
pub use invalid_credentials_error::InvalidCredentialsError;
pub use models::{Credential, Point, Station, Transaction};
pub use transaction_scraper::TransactionScraper;
