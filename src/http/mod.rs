mod response;

pub use response::Response;

use reqwest::Client;
use thiserror::Error;

const USER_AGENT: &str = concat!("ghlatest/", env!("CARGO_PKG_VERSION"));

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|cause| Error::NetworkError { cause })?;

        Ok(HttpClient { client })
    }

    pub async fn get_json<T>(&self, url: &str) -> Result<Response<T>, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|cause| Error::NetworkError { cause })?;

        Response::from_reqwest(response).await
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed with status {status}")]
    RequestFailed { status: u16 },
    #[error("network error")]
    NetworkError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("failed to parse response")]
    DecodeError {
        #[source]
        cause: serde_json::Error,
    },
    #[error("response has no `{field}` field")]
    MissingField { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use mockito::{Matcher, Server};
    use serde_json::Value;

    #[tokio::test]
    async fn get_json_sends_only_a_user_agent() -> Result<()> {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/")
            .match_header("user-agent", USER_AGENT)
            .match_header("authorization", Matcher::Missing)
            .with_body(r#"{"key": "value"}"#)
            .create_async()
            .await;

        let response = HttpClient::new()?.get_json::<Value>(&server.url()).await?;

        m.assert_async().await;
        assert_eq!(response.collect()["key"], "value");

        Ok(())
    }

    #[tokio::test]
    async fn get_json_rejects_non_ok_status() -> Result<()> {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/")
            .with_status(500)
            .with_body(r#"{"message": "boom"}"#)
            .create_async()
            .await;

        let result = HttpClient::new()?.get_json::<Value>(&server.url()).await;

        assert!(matches!(result, Err(Error::RequestFailed { status: 500 })));

        Ok(())
    }

    #[tokio::test]
    async fn get_json_reports_decode_errors() -> Result<()> {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/")
            .with_body("{\"truncated\": ")
            .create_async()
            .await;

        let result = HttpClient::new()?.get_json::<Value>(&server.url()).await;

        assert!(matches!(result, Err(Error::DecodeError { .. })));

        Ok(())
    }
}
