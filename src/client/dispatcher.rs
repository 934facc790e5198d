//! Request dispatch
//!
//! Turns `(method, parameters)` into a validated [`RequestContext`] and
//! runs it against the transport.

use crate::config::ClientConfig;
use crate::decode::{decoder_for, ApiResponse};
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, Transport};
use crate::registry::{self, EndpointSpec};
use crate::types::{ParamValue, RequestParameters, ResponseFormat};
use crate::validate::{validate_for, INPUT_JSON};
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};
use url::{form_urlencoded, Url};

/// Everything needed to issue one request, fixed before any I/O
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    /// Endpoint being called
    pub endpoint: &'static EndpointSpec,
    /// Parameters after validation and rewriting
    pub params: RequestParameters,
    /// Format the body will be decoded as
    pub format: ResponseFormat,
    /// Final request URL, including the API key when one is injected
    pub url: Url,
}

impl RequestContext {
    /// Query string of the request URL
    pub fn query(&self) -> Option<&str> {
        self.url.query()
    }
}

/// Client for the Steam Web API
#[derive(Clone)]
pub struct SteamClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl SteamClient {
    /// Create a client with the default configuration and no API key
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with a custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = HttpClient::with_config(HttpClientConfig::from(&config))?;
        Ok(Self::with_transport(config, Arc::new(http)))
    }

    /// Create a client that sends requests through `transport`
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Create a client configured from `STEAM_API_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Set the response format (`json`, `xml` or `vdf`).
    ///
    /// Returns false and keeps the current format for anything else.
    pub fn set_format(&mut self, format: &str) -> bool {
        self.config.set_format(format)
    }

    /// Set the API key. Returns false and keeps the current key unless the
    /// input is exactly 32 characters.
    pub fn set_api_key(&mut self, key: &str) -> bool {
        self.config.set_api_key(key)
    }

    /// Run every stage up to and including URL building, without I/O
    pub fn prepare(&self, method: &str, mut params: RequestParameters) -> Result<RequestContext> {
        let endpoint = registry::lookup(method).ok_or_else(|| {
            debug!(method, "Unknown method");
            Error::method_not_found(method)
        })?;

        if endpoint.requires_key && !self.config.has_api_key() {
            return Err(Error::ApiKeyNotSet {
                method: method.to_string(),
            });
        }

        validate_for(endpoint, &mut params)?;

        let missing: Vec<String> = endpoint
            .required_params()
            .filter(|p| !params.contains(p.name))
            .map(|p| p.name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(Error::ParametersMissing {
                method: method.to_string(),
                missing,
            });
        }

        let url = self.build_url(endpoint, &params)?;

        Ok(RequestContext {
            endpoint,
            params,
            format: self.config.format,
            url,
        })
    }

    /// Call a method and wait for the decoded response
    #[instrument(skip(self, params))]
    pub async fn send(&self, method: &str, params: RequestParameters) -> Result<ApiResponse> {
        let ctx = match self.prepare(method, params) {
            Ok(ctx) => ctx,
            Err(e) => {
                debug!(method, error = %e, "Request rejected before sending");
                return Err(e);
            }
        };
        self.execute(&ctx).await
    }

    /// Call a method with parameters given as a JSON object
    pub async fn send_value(&self, method: &str, params: &Value) -> Result<ApiResponse> {
        // An unknown method is reported before a malformed parameter set
        if registry::lookup(method).is_none() {
            return Err(Error::method_not_found(method));
        }
        let params = RequestParameters::from_json(params)?;
        self.send(method, params).await
    }

    /// Call a method, giving up with [`Error::Cancelled`] if `cancel`
    /// completes first
    pub async fn send_until<F>(
        &self,
        method: &str,
        params: RequestParameters,
        cancel: F,
    ) -> Result<ApiResponse>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            result = self.send(method, params) => result,
            () = cancel => {
                debug!(method, "Request cancelled");
                Err(Error::Cancelled)
            }
        }
    }

    /// Call a method in the background and hand the result to `callback`.
    ///
    /// Returns as soon as the request task is spawned. The callback runs
    /// exactly once, on the runtime thread that completes the request.
    /// Must be called from within a tokio runtime.
    pub fn send_with_callback<C>(
        &self,
        method: impl Into<String>,
        params: RequestParameters,
        callback: C,
    ) -> JoinHandle<()>
    where
        C: FnOnce(Result<ApiResponse>) + Send + 'static,
    {
        let client = self.clone();
        let method = method.into();
        tokio::spawn(async move {
            let result = client.send(&method, params).await;
            callback(result);
        })
    }

    async fn execute(&self, ctx: &RequestContext) -> Result<ApiResponse> {
        let name = ctx.endpoint.name;
        debug!(method = name, "Sending request");

        let response = match tokio::time::timeout(self.config.timeout, self.transport.get(&ctx.url))
            .await
        {
            Ok(result) => result?,
            Err(_) => {
                warn!(method = name, "Request timeout after {:?}", self.config.timeout);
                #[allow(clippy::cast_possible_truncation)]
                return Err(Error::Timeout {
                    timeout_ms: self.config.timeout.as_millis() as u64,
                });
            }
        };

        if !response.is_success() {
            warn!(method = name, status = response.status, "Non-success response");
            return Err(Error::http_status(response.status, response.body));
        }

        let decoded = decoder_for(ctx.format).decode(&response.body);
        if let Err(ref e) = decoded {
            warn!(method = name, format = %ctx.format, "Failed to decode response: {e}");
        }
        decoded
    }

    /// `base + category + method/ + version ? pairs`
    fn build_url(&self, endpoint: &EndpointSpec, params: &RequestParameters) -> Result<Url> {
        let mut pairs = Vec::with_capacity(params.len() + 2);

        if endpoint.requires_key {
            if let Some(key) = &self.config.api_key {
                pairs.push(format!("key={}", form_encode(key.expose())));
            }
        }

        // Declared parameters first, in declaration order
        for spec in endpoint.parameters {
            if let Some(value) = params.get(spec.name) {
                pairs.push(query_pair(spec.name, value));
            }
        }

        for (name, value) in params.iter() {
            if endpoint.param(name).is_none() {
                pairs.push(query_pair(name, value));
            }
        }

        if self.config.format != ResponseFormat::Json {
            pairs.push(format!("format={}", self.config.format));
        }

        let mut url = self.config.base_url.clone();
        if !url.ends_with('/') {
            url.push('/');
        }
        url.push_str(&endpoint.path());
        if !pairs.is_empty() {
            url.push('?');
            url.push_str(&pairs.join("&"));
        }

        Ok(Url::parse(&url)?)
    }
}

/// `name=value` with both sides form-encoded.
///
/// `input_json` is already percent-encoded by validation and is written
/// as is, as long as it holds nothing but encoder output.
fn query_pair(name: &str, value: &ParamValue) -> String {
    let value = value.to_string();
    let value = if name == INPUT_JSON && is_form_encoded(&value) {
        value
    } else {
        form_encode(&value)
    };
    format!("{}={value}", form_encode(name))
}

fn form_encode(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

fn is_form_encoded(s: &str) -> bool {
    s.bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'%' | b'*' | b'-' | b'.' | b'_'))
}

impl std::fmt::Debug for SteamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SteamClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
