//! # Backend Client
//!
//! [`LaminateApi`] is the seam between the front ends and the laminate
//! backend. [`HttpClient`] implements it over `reqwest`; tests and offline
//! front ends can supply their own implementation.
//!
//! Every call is one `POST` with a JSON body. A non-2xx answer is turned into
//! [`LaminaError::Backend`] by [`parse_error_body`]; a request that never got
//! an answer becomes [`LaminaError::Network`].

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ApiSettings;
use crate::errors::{LaminaError, LaminaResult, GENERIC_SERVER_ERROR};
use crate::laminate::{
    CalculateResponse, EnvelopePoint, FailureRequest, LaminateInput, PolarSample,
};

pub const CALCULATE_PATH: &str = "/api/calculate";
pub const POLAR_PATH: &str = "/api/polar";
pub const FAILURE_PATH: &str = "/api/failure";

/// Prefix the backend puts in front of validator messages
const VALUE_ERROR_PREFIX: &str = "Value error, ";

/// `Send + Sync` on native targets, nothing on wasm where futures are local.
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSendSync: Send + Sync {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + Sync> MaybeSendSync for T {}

#[cfg(target_arch = "wasm32")]
pub trait MaybeSendSync {}
#[cfg(target_arch = "wasm32")]
impl<T> MaybeSendSync for T {}

/// The three laminate backend operations.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait LaminateApi: MaybeSendSync {
    /// Engineering constants and ABD matrix
    async fn calculate(&self, input: &LaminateInput) -> LaminaResult<CalculateResponse>;

    /// Moduli over the full angle sweep
    async fn polar(&self, input: &LaminateInput) -> LaminaResult<Vec<PolarSample>>;

    /// Closed failure boundary in the sigma_x / sigma_y plane
    async fn failure_envelope(&self, request: &FailureRequest)
        -> LaminaResult<Vec<EnvelopePoint>>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Detail>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Items(Vec<DetailItem>),
}

#[derive(Debug, Deserialize)]
struct DetailItem {
    #[serde(default)]
    loc: Vec<serde_json::Value>,
    #[serde(default)]
    msg: String,
}

impl DetailItem {
    fn field(&self) -> String {
        match self.loc.last() {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "Error".to_string(),
        }
    }

    fn describe(&self) -> String {
        format!("{}: {}", self.field(), self.msg.replacen(VALUE_ERROR_PREFIX, "", 1))
    }
}

/// Build the user-facing error for a non-2xx response body.
///
/// - `{"detail": [{"loc": [..., "E1"], "msg": "..."}]}` → one `E1: ...` line per item
/// - `{"detail": "text"}` → the text verbatim
/// - anything else → [`GENERIC_SERVER_ERROR`]
pub fn parse_error_body(status: u16, body: &str) -> LaminaError {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Some(Detail::Message(text)),
        }) if !text.is_empty() => text,
        Ok(ErrorBody {
            detail: Some(Detail::Items(items)),
        }) if !items.is_empty() => items
            .iter()
            .map(DetailItem::describe)
            .collect::<Vec<_>>()
            .join("\n"),
        _ => GENERIC_SERVER_ERROR.to_string(),
    };
    LaminaError::backend(status, message)
}

/// `reqwest`-backed [`LaminateApi`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> LaminaResult<Self> {
        let builder = reqwest::Client::builder();

        // wasm uses the browser's fetch, which has neither knob
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .user_agent(format!("Lamina/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout);
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        let client = builder
            .build()
            .map_err(|e| LaminaError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(HttpClient {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_settings(settings: &ApiSettings) -> LaminaResult<Self> {
        Self::new(settings.base_url.clone(), settings.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> LaminaResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!("Request to {} failed: {}", url, e);
                LaminaError::network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let error = parse_error_body(status.as_u16(), &text);
            warn!("{} returned {}: {}", url, status, error);
            return Err(error);
        }

        response
            .json::<R>()
            .await
            .map_err(|e| LaminaError::decode(e.to_string()))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl LaminateApi for HttpClient {
    async fn calculate(&self, input: &LaminateInput) -> LaminaResult<CalculateResponse> {
        self.post(CALCULATE_PATH, input).await
    }

    async fn polar(&self, input: &LaminateInput) -> LaminaResult<Vec<PolarSample>> {
        self.post(POLAR_PATH, input).await
    }

    async fn failure_envelope(
        &self,
        request: &FailureRequest,
    ) -> LaminaResult<Vec<EnvelopePoint>> {
        self.post(FAILURE_PATH, request).await
    }
}
