use crate::config::{DeviceSettings, Settings};
use crate::models::responses::ApiErrorBody;
use crate::models::{
    Credentials, Gender, Message, Position, ProfileUpdate, Report, ReportCause, SwipeAction,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;
use validator::Validate;

/// Header carrying the session token once authorized
const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Errors that can occur when talking to the Lume API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error status {status}: {message}")]
    HttpError { status: u16, message: String },

    #[error("Unauthorized: unable to authorize")]
    Unauthorized,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Lume API client
///
/// Holds the fixed client-identification headers and, once `authorize` has
/// succeeded, the session token that is replayed on every request. Clones
/// share the same session.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    auth_token: Arc<RwLock<Option<String>>>,
}

impl Client {
    /// Create a client against the production endpoint
    pub fn new() -> Self {
        Self::from_settings(&Settings::default())
    }

    /// Create a client against a custom endpoint, keeping default headers
    pub fn with_base_url(base_url: &str) -> Self {
        let mut settings = Settings::default();
        settings.api.endpoint = base_url.to_string();
        Self::from_settings(&settings)
    }

    /// Create a client from loaded settings
    ///
    /// Panics if the configured device values cannot be encoded as HTTP
    /// headers (for example, embedded control characters).
    pub fn from_settings(settings: &Settings) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.api.timeout_secs))
            .default_headers(base_headers(&settings.device))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: settings.api.endpoint.trim_end_matches('/').to_string(),
            auth_token: Arc::new(RwLock::new(None)),
        }
    }

    /// GET a path on the Lume API. Returns the decoded JSON response.
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let mut request = self.http.get(&url);
        if let Some(token) = self.auth_token.read().await.as_deref() {
            request = request.header(AUTH_TOKEN_HEADER, token);
        }

        decode(request.send().await?).await
    }

    /// POST a JSON payload to a path on the Lume API. Returns the decoded
    /// JSON response.
    async fn post<T>(&self, path: &str, payload: &T) -> Result<Value, ApiError>
    where
        T: Serialize,
    {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("POST {}", url);

        let mut request = self.http.post(&url).json(payload);
        if let Some(token) = self.auth_token.read().await.as_deref() {
            request = request.header(AUTH_TOKEN_HEADER, token);
        }

        decode(request.send().await?).await
    }

    /// Authorize with the Lume API
    ///
    /// Posts the Facebook credentials to the auth endpoint. On success the
    /// returned session token is stored and attached as `X-Auth-Token` to
    /// every subsequent request.
    pub async fn authorize(
        &self,
        facebook_id: &str,
        facebook_token: &str,
    ) -> Result<(), ApiError> {
        let credentials = Credentials {
            facebook_id: facebook_id.to_string(),
            facebook_token: facebook_token.to_string(),
        };
        credentials
            .validate()
            .map_err(|e| ApiError::InvalidArgument(e.to_string()))?;

        let resp = self.post("auth", &credentials).await?;
        let token = resp
            .get("token")
            .and_then(|t| t.as_str())
            .ok_or(ApiError::Unauthorized)?;

        *self.auth_token.write().await = Some(token.to_string());
        tracing::debug!("Authorized, session token stored");
        Ok(())
    }

    /// Update discovery filter preferences
    ///
    /// `gender` is the wire code: 0 for male, 1 for female, -1 for both.
    /// Returns whether the API accepted the update (an accepted update
    /// echoes an `interests` field in the response).
    pub async fn update_profile(
        &self,
        gender: i8,
        min_age: u8,
        max_age: u8,
        distance_km: u16,
    ) -> Result<bool, ApiError> {
        let gender = Gender::from_code(gender).ok_or_else(|| {
            ApiError::InvalidArgument(format!("gender must be -1, 0 or 1, got {}", gender))
        })?;

        let update = ProfileUpdate {
            gender,
            age_filter_min: min_age,
            age_filter_max: max_age,
            distance_filter: distance_km,
        };
        update
            .validate()
            .map_err(|e| ApiError::InvalidArgument(e.to_string()))?;

        let resp = self.post("profile", &update).await?;
        Ok(resp.get("interests").is_some())
    }

    /// Update the current location
    pub async fn update_location(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Value, ApiError> {
        let position = Position {
            lat: latitude,
            lon: longitude,
        };
        self.post("user/ping", &position).await
    }

    /// Report a user
    ///
    /// `cause` is the wire code: 1 for spam, 2 for inappropriate/offensive.
    pub async fn report_user(&self, user_id: &str, cause: u8) -> Result<Value, ApiError> {
        let cause = ReportCause::from_code(cause).ok_or_else(|| {
            ApiError::InvalidArgument(format!("report cause must be 1 or 2, got {}", cause))
        })?;

        let path = format!("report/{}", urlencoding::encode(user_id));
        self.post(&path, &Report { cause }).await
    }

    /// Send a message to a match
    ///
    /// The API only delivers messages between matched users.
    pub async fn send_message(&self, match_id: &str, text: &str) -> Result<Value, ApiError> {
        let message = Message {
            message: text.to_string(),
        };
        message
            .validate()
            .map_err(|e| ApiError::InvalidArgument(e.to_string()))?;

        let path = format!("user/matches/{}", urlencoding::encode(match_id));
        self.post(&path, &message).await
    }

    /// Like (swipe right on) a user
    pub async fn like(&self, user_id: &str) -> Result<Value, ApiError> {
        self.swipe(SwipeAction::Like, user_id).await
    }

    /// Unlike (pass on) a user
    pub async fn unlike(&self, user_id: &str) -> Result<Value, ApiError> {
        self.swipe(SwipeAction::Unlike, user_id).await
    }

    async fn swipe(&self, action: SwipeAction, user_id: &str) -> Result<Value, ApiError> {
        let path = format!("{}/{}", action.as_path(), urlencoding::encode(user_id));
        self.get(&path).await
    }

    /// Profiles recommended for the current session
    pub async fn recommendations(&self) -> Result<Value, ApiError> {
        self.get("user/recs").await
    }

    /// Activity since the last poll (new matches, messages, blocks)
    pub async fn updates(&self) -> Result<Value, ApiError> {
        self.get("updates").await
    }

    /// Session token stored by a successful `authorize`, if any
    pub async fn auth_token(&self) -> Option<String> {
        self.auth_token.read().await.clone()
    }

    /// Whether a session token is stored
    pub async fn is_authorized(&self) -> bool {
        self.auth_token.read().await.is_some()
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed client-identification headers sent with every request
fn base_headers(device: &DeviceSettings) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static("app_version"),
        HeaderValue::from_str(&device.app_version).expect("Invalid app_version header value"),
    );
    headers.insert(
        HeaderName::from_static("platform"),
        HeaderValue::from_str(&device.platform).expect("Invalid platform header value"),
    );
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&device.user_agent).expect("Invalid user agent header value"),
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Map a response to its decoded JSON body, or to the matching error
async fn decode(response: reqwest::Response) -> Result<Value, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read body".to_string());
        tracing::error!("API error response: {} - {}", status, body);
        return Err(ApiError::HttpError {
            status: status.as_u16(),
            message: error_message(&body, status),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ApiError::InvalidResponse(format!("invalid JSON body: {}", e)))
}

/// Prefer the error field the API puts in failure bodies, else the raw text
fn error_message(body: &str, status: StatusCode) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) if body.trim().is_empty() => status.to_string(),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_trims_trailing_slash() {
        let client = Client::with_base_url("https://lume.test/v2/");
        assert_eq!(client.base_url, "https://lume.test/v2");
    }

    #[test]
    fn test_default_client_uses_production_endpoint() {
        let client = Client::new();
        assert_eq!(client.base_url, "https://api.lume.app");
    }

    #[test]
    #[should_panic(expected = "Invalid platform header value")]
    fn test_from_settings_rejects_malformed_header_values() {
        let mut settings = Settings::default();
        settings.device.platform = "ios\nandroid".to_string();
        let _ = Client::from_settings(&settings);
    }

    #[tokio::test]
    async fn test_fresh_client_has_no_session() {
        let client = Client::with_base_url("http://localhost:9");
        assert!(!client.is_authorized().await);
        assert!(client.auth_token().await.is_none());
    }

    #[test]
    fn test_error_message_prefers_error_field() {
        let message = error_message(r#"{"error": "Forbidden"}"#, StatusCode::FORBIDDEN);
        assert_eq!(message, "Forbidden");
    }

    #[test]
    fn test_error_message_falls_back_to_body_text() {
        let message = error_message("service melting", StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "service melting");
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        let message = error_message("", StatusCode::BAD_GATEWAY);
        assert_eq!(message, "502 Bad Gateway");
    }
}
