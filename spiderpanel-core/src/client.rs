//! Async HTTP client for the spider's data and control endpoints.

use reqwest::Url;
use tracing::debug;
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::error::{PanelError, PanelResult};
use crate::model::{ControlResponse, ExposedFunction, ReservationRecord, ServerStatusReport};

pub struct SpiderClient {
    client: reqwest::Client,
    base_url: String,
}

/// Result of one polling pass over the two read endpoints.
///
/// Each field is independently optional: a failed fetch leaves its field
/// `None` so the caller keeps whatever it rendered last.
pub struct PanelSnapshot {
    pub connected: bool,
    pub error: Option<String>,
    pub status: Option<ServerStatusReport>,
    pub functions: Option<Vec<ExposedFunction>>,
}

impl SpiderClient {
    pub fn new(config: &ServerConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(std::time::Duration::from_millis(config.connect_timeout_ms))
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> PanelResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "GET");
        let resp = self.client.get(&url).query(query).send().await?;
        Ok(resp.json::<T>().await?)
    }

    /// Submit a control request and unwrap the `true`-or-error reply.
    async fn control(&self, path: &str, query: &[(&str, &str)]) -> PanelResult<()> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "POST");
        let resp = self.client.post(&url).query(query).send().await?;
        match resp.json::<ControlResponse>().await? {
            ControlResponse::Ack(_) => Ok(()),
            ControlResponse::Failure { error, traceback } => {
                Err(PanelError::ControlRejected {
                    message: error,
                    traceback,
                })
            }
        }
    }

    // ------------------------------------------------------------------
    // Read endpoints
    // ------------------------------------------------------------------

    pub async fn get_server_status(&self) -> PanelResult<ServerStatusReport> {
        self.get("/data/server", &[]).await
    }

    pub async fn get_exposed_function_details(&self) -> PanelResult<Vec<ExposedFunction>> {
        self.get("/data/exposed_function_details", &[]).await
    }

    pub async fn show_reservation(&self, uuid: &str) -> PanelResult<ReservationRecord> {
        let uuid = validate_uuid(uuid)?;
        self.get("/data/show_reservation", &[("uuid", uuid.as_str())])
            .await
    }

    /// Run a single reservation immediately, returning whatever the exposed
    /// function produced.
    pub async fn execute_reservation(&self, uuid: &str) -> PanelResult<serde_json::Value> {
        let uuid = validate_uuid(uuid)?;
        self.get("/data/execute_reservation", &[("uuid", uuid.as_str())])
            .await
    }

    // ------------------------------------------------------------------
    // Control endpoints
    // ------------------------------------------------------------------

    /// Force a scheduler query pass.
    pub async fn query(&self) -> PanelResult<()> {
        self.control("/control/query", &[]).await
    }

    /// Ask the server to re-run peer discovery.
    pub async fn check_peers(&self) -> PanelResult<()> {
        self.control("/peer/check", &[]).await
    }

    pub async fn pause(&self) -> PanelResult<()> {
        self.control("/control/pause", &[]).await
    }

    pub async fn resume(&self) -> PanelResult<()> {
        self.control("/control/resume", &[]).await
    }

    /// Stop the spider. Callers are responsible for confirming with the
    /// operator first; once sent, the server cannot be restarted from here.
    pub async fn shutdown(&self) -> PanelResult<()> {
        self.control("/control/shutdown", &[]).await
    }

    pub async fn delete_reservation(&self, uuid: &str) -> PanelResult<()> {
        let uuid = validate_uuid(uuid)?;
        self.control("/control/delete_reservation", &[("uuid", uuid.as_str())])
            .await
    }

    pub async fn delete_function_reservations(&self, function_name: &str) -> PanelResult<()> {
        self.control(
            "/control/delete_function_reservations",
            &[("function_name", function_name)],
        )
        .await
    }

    // ------------------------------------------------------------------
    // Polling
    // ------------------------------------------------------------------

    /// Fetch both read endpoints for one panel refresh. The two requests
    /// are independent; either may fail without affecting the other.
    pub async fn refresh(&self) -> PanelSnapshot {
        let mut snapshot = PanelSnapshot {
            connected: false,
            error: None,
            status: None,
            functions: None,
        };

        match self.get_server_status().await {
            Ok(status) => {
                snapshot.connected = true;
                snapshot.status = Some(status);
            }
            Err(e) => {
                snapshot.error = Some(e.to_string());
            }
        }

        match self.get_exposed_function_details().await {
            Ok(functions) => {
                snapshot.connected = true;
                snapshot.functions = Some(functions);
            }
            Err(e) => {
                if snapshot.error.is_none() {
                    snapshot.error = Some(e.to_string());
                }
            }
        }

        snapshot
    }
}

/// Reservation ids are UUIDs; reject malformed input before it reaches the
/// server. Returns the canonical hyphenated form.
fn validate_uuid(raw: &str) -> PanelResult<String> {
    Uuid::parse_str(raw.trim())
        .map(|u| u.to_string())
        .map_err(|_| PanelError::InvalidReservationId(raw.to_string()))
}

/// Parse and normalize a base URL supplied on the command line.
pub fn parse_base_url(raw: &str) -> PanelResult<String> {
    let url = Url::parse(raw).map_err(|_| PanelError::InvalidServerUrl(raw.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(PanelError::InvalidServerUrl(raw.to_string()));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_uuid() {
        let canonical = validate_uuid("ad9c9b38-d588-4658-8a4f-8960cad20aa9").unwrap();
        assert_eq!(canonical, "ad9c9b38-d588-4658-8a4f-8960cad20aa9");

        // Padding is tolerated, garbage is not.
        assert!(validate_uuid(" ad9c9b38-d588-4658-8a4f-8960cad20aa9 ").is_ok());
        assert!(validate_uuid("not-a-uuid").is_err());
        assert!(validate_uuid("").is_err());
    }

    #[test]
    fn test_parse_base_url() {
        assert_eq!(
            parse_base_url("http://localhost:5000/").unwrap(),
            "http://localhost:5000"
        );
        assert!(parse_base_url("ftp://example.com").is_err());
        assert!(parse_base_url("localhost:5000").is_err());
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let config = ServerConfig {
            url: "http://localhost:5000/".to_string(),
            ..Default::default()
        };
        let client = SpiderClient::new(&config);
        assert_eq!(client.base_url(), "http://localhost:5000");
    }
}
