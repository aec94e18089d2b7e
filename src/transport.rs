use crate::{error::Error, params::Params};
use async_trait::async_trait;
use http::Method;

/// Carries one already-encoded request to the server and hands back the raw
/// response body. The bot goes through this seam for every call, which is
/// also what lets tests swap the network out for canned answers.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(
        &self,
        method: Method,
        url: &str,
        params: &Params,
    ) -> Result<String, Error>;
}

pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        method: Method,
        url: &str,
        params: &Params,
    ) -> Result<String, Error> {
        let text = self
            .client
            .request(method, url)
            .form(params)
            .send()
            .await?
            .text()
            .await?;
        Ok(text)
    }
}
