use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{ClientBuilder, Response};
use serde::Serialize;

const PORTAL_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/81.0.4044.129 Safari/537.36";

// The portal backend dispatches AJAX calls on this header; its value names
// the server-side handler for the logical operation.
const WINTER_REQUEST_HANDLER: &str = "x-winter-request-handler";
pub const SIGNIN_HANDLER: &str = "onSignin";
pub const FILTER_HANDLER: &str = "onFilter";

pub struct RequestClient {
    client: reqwest::Client,
}

impl RequestClient {
    pub fn new() -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(PORTAL_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(
            "x-requested-with",
            HeaderValue::from_static("XMLHttpRequest"),
        );

        // The session cookie set at login lives in the jar and rides along
        // on every later request.
        let client = ClientBuilder::new()
            .danger_accept_invalid_certs(true)
            .default_headers(headers)
            .cookie_store(true)
            .build()?;
        Ok(Self { client })
    }

    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        payload: &T,
        handler: &str,
    ) -> anyhow::Result<Response> {
        let response = self
            .client
            .post(url)
            .header(WINTER_REQUEST_HANDLER, handler)
            .json(payload)
            .send()
            .await?;
        Ok(response)
    }

    pub async fn get(&self, url: &str) -> anyhow::Result<Response> {
        let response = self.client.get(url).send().await?;
        Ok(response)
    }
}
