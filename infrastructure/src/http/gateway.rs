//! reqwest-backed [`AnalysisGateway`].

use async_trait::async_trait;
use estate_application::ports::analysis_gateway::{AnalysisGateway, GatewayError, HealthReport};
use estate_domain::util::ellipsize;
use estate_domain::{Query, RawPayload};
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, trace};

/// Default analysis endpoint
pub const DEFAULT_ENDPOINT: &str = "https://real-estate-chatbot-1-tp68.onrender.com/api/analyze/";

/// Longest error body kept in a [`GatewayError::Status`]
const MAX_ERROR_BODY: usize = 200;

const USER_AGENT: &str = concat!("estate-chat/", env!("CARGO_PKG_VERSION"));

/// Posts queries to the analysis service over HTTP.
///
/// One call to [`analyze`](AnalysisGateway::analyze) is exactly one POST.
/// The client has no request timeout: a request runs until the server
/// answers or the connection fails.
pub struct HttpAnalysisGateway {
    client: Client,
    endpoint: Url,
    health_url: Url,
    endpoint_str: String,
}

impl HttpAnalysisGateway {
    /// Create a gateway for `endpoint`, deriving the health URL from it.
    pub fn new(endpoint: &str) -> Result<Self, GatewayError> {
        let endpoint = parse_url(endpoint)?;
        let health_url = derive_health_url(&endpoint);
        Ok(Self {
            client: Client::new(),
            endpoint_str: endpoint.to_string(),
            endpoint,
            health_url,
        })
    }

    /// Use an explicit health URL instead of the derived one.
    pub fn with_health_url(mut self, health_url: &str) -> Result<Self, GatewayError> {
        self.health_url = parse_url(health_url)?;
        Ok(self)
    }

    pub fn health_url(&self) -> &Url {
        &self.health_url
    }
}

#[async_trait]
impl AnalysisGateway for HttpAnalysisGateway {
    async fn analyze(&self, query: &Query) -> Result<RawPayload, GatewayError> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .json(&serde_json::json!({ "query": query.text() }))
            .send()
            .await
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        let value: Value = read_json(response).await?;
        trace!("Analysis payload: {}", value);
        Ok(RawPayload::new(value))
    }

    async fn health(&self) -> Result<HealthReport, GatewayError> {
        debug!("GET {}", self.health_url);

        let response = self
            .client
            .get(self.health_url.clone())
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        read_json(response).await
    }

    fn endpoint(&self) -> &str {
        &self.endpoint_str
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, GatewayError> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| GatewayError::Connection(format!("Failed to read response body: {}", e)))?;

    if !status.is_success() {
        let text = String::from_utf8_lossy(&body);
        return Err(GatewayError::Status {
            status: status.as_u16(),
            body: ellipsize(text.trim(), MAX_ERROR_BODY),
        });
    }

    serde_json::from_slice(&body).map_err(|e| GatewayError::Decode(e.to_string()))
}

fn parse_url(raw: &str) -> Result<Url, GatewayError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| GatewayError::InvalidEndpoint(format!("{}: {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(GatewayError::InvalidEndpoint(format!(
            "{}: unsupported scheme '{}'",
            raw, other
        ))),
    }
}

/// `…/analyze/` → `…/health/`. Endpoints not ending in `analyze` get
/// `health/` appended.
pub fn derive_health_url(endpoint: &Url) -> Url {
    let mut url = endpoint.clone();
    let trimmed = endpoint.path().trim_end_matches('/');
    let path = match trimmed.strip_suffix("analyze") {
        Some(prefix) => format!("{}health/", prefix),
        None => format!("{}/health/", trimmed),
    };
    url.set_path(&path);
    url.set_query(None);
    url
}
