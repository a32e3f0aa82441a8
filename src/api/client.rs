//! Blocking HTTP client for the session schedule API.

use reqwest::blocking::Client;
use std::time::Duration;

use super::error::ConnectionError;
use super::session::SessionKey;

/// Default Ergast-compatible API base.
pub const DEFAULT_BASE_URL: &str = "https://api.jolpi.ca/ergast/f1";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches round schedules over HTTP/HTTPS.
pub struct SessionClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

/// Raw schedule response, kept as text so it can be cached verbatim.
#[derive(Debug)]
pub struct ScheduleResponse {
    /// The URL that was requested.
    pub url: String,
    /// Response body.
    pub body: String,
}

impl SessionClient {
    /// Create a client with the default 30-second timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConnectionError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ConnectionError> {
        let client = Client::builder()
            .user_agent(concat!("pitwall/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(ConnectionError::ClientSetup)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL of the schedule for `key`.
    pub fn schedule_url(&self, key: &SessionKey) -> String {
        format!("{}{}", self.base_url, key.schedule_path())
    }

    /// Fetch the schedule for the round named by `key`.
    pub fn fetch_schedule(&self, key: &SessionKey) -> Result<ScheduleResponse, ConnectionError> {
        let url = self.schedule_url(key);
        tracing::debug!("Fetching schedule from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| ConnectionError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConnectionError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response
            .text()
            .map_err(|source| ConnectionError::Transport {
                url: url.clone(),
                source,
            })?;

        Ok(ScheduleResponse { url, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::session::tests::BAHRAIN_2023;
    use crate::api::SessionCode;
    use httpmock::prelude::*;

    fn fp1() -> SessionKey {
        SessionKey::new(2023, 1, SessionCode::Practice1)
    }

    #[test]
    fn default_timeout_is_30_seconds() {
        let client = SessionClient::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn schedule_url_joins_base_without_double_slash() {
        let client = SessionClient::new("http://localhost:9/ergast/f1/").unwrap();
        assert_eq!(
            client.schedule_url(&fp1()),
            "http://localhost:9/ergast/f1/2023/1.json"
        );
    }

    #[test]
    fn fetch_returns_body_and_url() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/2023/1.json");
            then.status(200)
                .header("content-type", "application/json")
                .body(BAHRAIN_2023);
        });

        let client = SessionClient::new(server.base_url()).unwrap();
        let response = client.fetch_schedule(&fp1()).unwrap();

        assert_eq!(response.url, server.url("/2023/1.json"));
        assert!(response.body.contains("Bahrain Grand Prix"));
    }

    #[test]
    fn fetch_reports_http_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/2023/1.json");
            then.status(503).body("Service Unavailable");
        });

        let client = SessionClient::new(server.base_url()).unwrap();
        let err = client.fetch_schedule(&fp1()).unwrap_err();

        assert!(
            matches!(err, ConnectionError::HttpStatus { status: 503, .. }),
            "unexpected error: {:?}",
            err
        );
    }

    #[test]
    fn fetch_reports_transport_failure() {
        // Port 1 is reserved; nothing listens there.
        let client =
            SessionClient::with_timeout("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
        let err = client.fetch_schedule(&fp1()).unwrap_err();

        assert!(matches!(err, ConnectionError::Transport { .. }));
    }
}
