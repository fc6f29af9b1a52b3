use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde_json::{json, Value};

use crate::api::error::ApiError;
use crate::api::types::{
    EndTripResponse, MinutePack, RefreshTokensResponse, StartTripResponse, TripReport,
    TripStatus,
};
use crate::config::ApiConfig;

const JSON: &str = "application/json";

/// HTTP client for the trip API.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    timeout_secs: u64,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut raw = config.base_url.trim().to_string();
        // Url::join drops the last path segment unless it ends with a slash.
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::Connection { source: e })?;

        Ok(Self {
            client,
            base_url,
            timeout_secs: u64::from(config.timeout_seconds),
        })
    }

    /// `GET /api/trip_info[?trip_id=ID]`.
    pub async fn trip_info(&self, trip_id: Option<&str>) -> Result<TripReport, ApiError> {
        let mut url = self.endpoint("api/trip_info")?;
        if let Some(id) = trip_id {
            url.query_pairs_mut().append_pair("trip_id", id);
        }

        let response = self.send(self.client.get(url)).await?;
        let response = self.require_success(response, "API error").await?;
        let payload: TripStatus = self.decode(response).await?;
        Ok(TripReport::classify(payload))
    }

    /// `GET /api/minute_pack`.
    pub async fn minute_pack(&self) -> Result<MinutePack, ApiError> {
        let url = self.endpoint("api/minute_pack")?;
        let response = self.send(self.client.get(url)).await?;
        let response = self.require_success(response, "API error").await?;
        self.decode(response).await
    }

    /// `POST /api/start_trip` with `{code}`.
    ///
    /// Non-2xx answers become [`ApiError::Status`] carrying the body's
    /// `detail`, or `API error: <status>` when there is none.
    pub async fn start_trip(&self, code: &str) -> Result<StartTripResponse, ApiError> {
        let url = self.endpoint("api/start_trip")?;
        let request = self.client.post(url).json(&json!({ "code": code }));
        let response = self.send(request).await?;
        let response = self.require_success(response, "API error").await?;
        let value: Value = self.decode(response).await?;
        StartTripResponse::from_value(value).map_err(|e| ApiError::Decode { source: e })
    }

    /// `POST /api/end_trip` with `{trip_id}`.
    ///
    /// The body is read even for non-2xx answers so the server's message
    /// reaches the user. An undecodable body is replaced by
    /// [`EndTripResponse::malformed`].
    pub async fn end_trip(&self, trip_id: &str) -> Result<EndTripResponse, ApiError> {
        let url = self.endpoint("api/end_trip")?;
        let request = self.client.post(url).json(&json!({ "trip_id": trip_id }));
        let response = self.send(request).await?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| self.transport(e))?;

        let body = serde_json::from_slice::<EndTripResponse>(&bytes).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to decode end trip response");
            EndTripResponse::malformed()
        });

        if !status.is_success() {
            let message = body
                .failure_message()
                .map(str::to_string)
                .unwrap_or_else(|| format!("Server error: {}", status.as_u16()));
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }

    /// `POST /api/refresh_tokens`; returns the server's message.
    pub async fn refresh_tokens(&self) -> Result<RefreshTokensResponse, ApiError> {
        let url = self.endpoint("api/refresh_tokens")?;
        let response = self.send(self.client.post(url).json(&json!({}))).await?;
        let response = self.require_success(response, "API error").await?;
        self.decode(response).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url.join(path).map_err(|e| ApiError::InvalidUrl {
            url: format!("{}{}", self.base_url, path),
            reason: e.to_string(),
        })
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request
            .header(ACCEPT, JSON)
            .send()
            .await
            .map_err(|e| self.transport(e))
    }

    /// Turns a non-2xx response into [`ApiError::Status`], pulling a message
    /// out of the body when it is JSON.
    async fn require_success(
        &self,
        response: Response,
        fallback_prefix: &str,
    ) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let message = serde_json::from_slice::<Value>(&body)
            .ok()
            .and_then(|value| extract_message(&value))
            .unwrap_or_else(|| format!("{}: {}", fallback_prefix, status.as_u16()));

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        let bytes = response.bytes().await.map_err(|e| self.transport(e))?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode { source: e })
    }

    fn transport(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout {
                duration: self.timeout_secs,
            }
        } else {
            ApiError::Connection { source: err }
        }
    }
}

/// `detail` wins over `message`; both must be non-empty strings.
fn extract_message(value: &Value) -> Option<String> {
    ["detail", "message"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(Value::as_str))
        .find(|text| !text.is_empty())
        .map(str::to_string)
}
