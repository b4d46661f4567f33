//! Request executor
//!
//! Sends one test case to one URL and reports what happened. Only a
//! serialization failure is returned as an error; send and read failures
//! come back as [`Outcome`] variants so the run can continue.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::common::{Error, Result};

use super::config::TestCase;

/// A completed request/response cycle
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    /// The literal JSON body that was sent
    pub request_body: String,
    /// HTTP status code of the response
    pub status: u16,
    /// Response body, decoded as UTF-8 (lossy)
    pub response_body: String,
}

/// What happened to a single test case
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The server answered and its body was read
    Completed(Exchange),
    /// The request could not be sent (connection refused, DNS, timeout)
    SendFailed(String),
    /// The response arrived but its body could not be read
    ReadFailed(String),
}

/// Executes a single test case against a URL
#[async_trait]
pub trait RequestExecutor {
    async fn execute(&self, url: &str, case: &TestCase) -> Result<Outcome>;
}

/// Serialize a test case's values into the request payload
pub fn request_body(case: &TestCase) -> Result<String> {
    serde_json::to_string(&case.values).map_err(|e| Error::Serialize {
        name: case.name.clone(),
        source: e,
    })
}

/// Executor that POSTs JSON payloads over HTTP
pub struct HttpExecutor {
    client: reqwest::Client,
}

impl HttpExecutor {
    /// Create an executor with the HTTP client's default settings
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("apitest/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(&self, url: &str, case: &TestCase) -> Result<Outcome> {
        let request_body = request_body(case)?;

        tracing::debug!(url, bytes = request_body.len(), test_case = %case.name, "Sending request");

        let response = match self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(request_body.clone())
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Ok(Outcome::SendFailed(e.to_string())),
        };

        let status = response.status().as_u16();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => return Ok(Outcome::ReadFailed(e.to_string())),
        };

        Ok(Outcome::Completed(Exchange {
            request_body,
            status,
            response_body: String::from_utf8_lossy(&bytes).into_owned(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn case(name: &str, values: Value) -> TestCase {
        TestCase {
            name: name.to_string(),
            values: values.as_object().cloned().unwrap_or_default(),
            output: String::new(),
        }
    }

    #[test]
    fn test_request_body_is_values_json() {
        let case = case("t1", json!({"x": 1}));
        let body = request_body(&case).unwrap();
        assert_eq!(body, r#"{"x":1}"#);
    }

    #[test]
    fn test_request_body_deserializes_to_values() {
        let values = json!({
            "email": "a@b.com",
            "tags": ["a", "b"],
            "profile": {"age": 42, "score": 1.5, "admin": false, "nick": null}
        });
        let case = case("nested", values.clone());

        let body = request_body(&case).unwrap();
        let sent: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(sent, values);
    }

    #[test]
    fn test_empty_values_is_empty_object() {
        let case = case("empty", json!({}));
        assert_eq!(request_body(&case).unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_send_failure() {
        // Bind then drop to get a local port with nothing listening
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = format!("http://127.0.0.1:{}/ping", port);

        let executor = HttpExecutor::new().unwrap();
        let outcome = executor.execute(&url, &case("t1", json!({"x": 1}))).await.unwrap();
        assert!(matches!(outcome, Outcome::SendFailed(_)), "got {:?}", outcome);
    }

    #[tokio::test]
    async fn test_truncated_body_is_read_failure() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/short", listener.local_addr().unwrap());

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
            // Promise 100 bytes, deliver 5, then hang up
            let _ = stream
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\nshort")
                .await;
            let _ = stream.shutdown().await;
        });

        let executor = HttpExecutor::new().unwrap();
        let outcome = executor.execute(&url, &case("t1", json!({"x": 1}))).await.unwrap();
        assert!(matches!(outcome, Outcome::ReadFailed(_)), "got {:?}", outcome);
    }
}
