/*
[INPUT]:  HTTP configuration (base URL, timeouts), credentials, transport
[OUTPUT]: Configured client that sends requests and returns raw bodies
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::http::signature::{QueryParams, encode_query};
use crate::http::transport::{HttpRequest, HttpTransport, ReqwestTransport};
use crate::http::{OkcoinError, Result};

/// Base URL for the OKCoin v1 REST API
const OKCOIN_BASE_URL: &str = "https://www.okcoin.com/api/v1/";

pub const ENV_API_KEY: &str = "OKCOIN_API_KEY";
pub const ENV_API_SECRET: &str = "OKCOIN_API_SECRET";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Credentials for signed requests
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub api_key: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret: secret.into(),
        }
    }

    /// Read `OKCOIN_API_KEY` and `OKCOIN_API_SECRET`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve both variables through `lookup`, reporting every missing name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut read = |name: &'static str| match lookup(name).filter(|value| !value.is_empty()) {
            Some(value) => value,
            None => {
                missing.push(name);
                String::new()
            }
        };

        let api_key = read(ENV_API_KEY);
        let secret = read(ENV_API_SECRET);
        if !missing.is_empty() {
            return Err(OkcoinError::MissingEnv { vars: missing });
        }
        Ok(Self { api_key, secret })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

struct ClientState {
    transport: Arc<dyn HttpTransport>,
    credentials: Credentials,
}

/// Main HTTP client for the OKCoin API
///
/// Transport and credentials sit behind one lock and can be replaced through
/// `&self`, so a client can be shared across tasks in an `Arc`.
pub struct OkcoinClient {
    base_url: Url,
    state: RwLock<ClientState>,
}

impl OkcoinClient {
    /// Create a new client with default configuration and no credentials
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, OKCOIN_BASE_URL)
    }

    /// Create a client against a different API root, e.g. a mock server.
    ///
    /// Endpoints are resolved relative to `base_url`, so
    /// `http://host/api/v1` serves `http://host/api/v1/ticker.do`.
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let transport = ReqwestTransport::with_config(&config)?;
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };
        if base_url.cannot_be_a_base() {
            return Err(OkcoinError::Config(format!(
                "base URL {base_url} cannot carry endpoint paths"
            )));
        }

        Ok(Self {
            base_url,
            state: RwLock::new(ClientState {
                transport: Arc::new(transport),
                credentials: Credentials::default(),
            }),
        })
    }

    /// Create a client whose credentials come from the environment
    pub fn from_env() -> Result<Self> {
        let credentials = Credentials::from_env()?;
        let client = Self::new()?;
        client.set_credentials(credentials);
        Ok(client)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Replace the object that performs HTTP calls
    pub fn set_transport<T>(&self, transport: T)
    where
        T: HttpTransport + 'static,
    {
        self.write_state().transport = Arc::new(transport);
    }

    /// Replace key and secret together. `None` leaves them untouched.
    pub fn set_credentials(&self, credentials: impl Into<Option<Credentials>>) {
        if let Some(credentials) = credentials.into() {
            self.write_state().credentials = credentials;
        }
    }

    /// Snapshot of the current credentials
    pub fn credentials(&self) -> Credentials {
        self.read_state().credentials.clone()
    }

    pub fn api_key(&self) -> String {
        self.read_state().credentials.api_key.clone()
    }

    pub fn api_secret(&self) -> String {
        self.read_state().credentials.secret.clone()
    }

    fn transport(&self) -> Arc<dyn HttpTransport> {
        Arc::clone(&self.read_state().transport)
    }

    fn read_state(&self) -> RwLockReadGuard<'_, ClientState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ClientState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Build full URL for an endpoint with its query string
    pub(crate) fn endpoint_url(&self, endpoint: &str, params: &QueryParams) -> Result<Url> {
        let mut url = self.base_url.join(endpoint)?;
        if !params.is_empty() {
            url.set_query(Some(&encode_query(params)));
        }
        Ok(url)
    }

    /// Execute a request and return the body of a 2xx response
    pub(crate) async fn send(&self, request: HttpRequest) -> Result<Vec<u8>> {
        let transport = self.transport();
        let method = request.method.clone();
        let path = request.url.path().to_string();
        debug!(method = %method, path = %path, "sending request");

        let response = transport.execute(request).await?;
        if !response.status.is_success() {
            let text = String::from_utf8_lossy(&response.body).trim().to_string();
            let message = if text.is_empty() {
                response
                    .status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string()
            } else {
                text
            };
            warn!(
                method = %method,
                path = %path,
                status = response.status.as_u16(),
                "request rejected"
            );
            return Err(OkcoinError::api_error(response.status, message));
        }

        debug!(
            path = %path,
            status = response.status.as_u16(),
            bytes = response.body.len(),
            "response received"
        );
        Ok(response.body)
    }

    pub(crate) async fn send_json<T>(&self, request: HttpRequest) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.send(request).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl fmt::Debug for OkcoinClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OkcoinClient")
            .field("base_url", &self.base_url.as_str())
            .field("credentials", &self.read_state().credentials)
            .finish_non_exhaustive()
    }
}
