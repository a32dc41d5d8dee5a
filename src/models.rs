use chrono::NaiveDateTime;

/// Login details for one portal account. `contracts` is the comma-separated
/// list of contract numbers covered by the account, possibly empty.
#[derive(Debug, Clone)]
pub struct Credential {
    pub url: Option<String>,
    pub login: String,
    pub password: String,
    pub token: Option<String>,
    pub contracts: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone)]
pub struct Station {
    pub code: Option<String>,
    pub name: String,
    pub brand: Option<String>,
    pub point: Option<Point>,
    pub address: Option<String>,
}

/// One fuel purchase, as extracted from a transaction table row.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub credential: Credential,
    pub station: Option<Station>,
    pub card: String,
    pub code: String,
    pub date: NaiveDateTime,
    pub service: String,
    pub sum: f64,
    pub volume: f64,
}
