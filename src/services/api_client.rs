// ============================================================================
// API CLIENT - Authenticated requests against the admin REST API
// ============================================================================
// Renders path templates, attaches the bearer token, decodes envelopes and
// error bodies. No screen logic lives here.
// ============================================================================

use serde_json::Value;
use std::rc::Rc;
use thiserror::Error;

use super::transport::{HttpMethod, HttpRequest, RequestBody, Transport};
use crate::config::AppConfig;
use crate::models::Envelope;
use crate::state::session_state::SessionState;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
        field_errors: Vec<String>,
    },
    #[error("session expired")]
    Unauthorized,
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("request rejected by server")]
    Rejected { message: Option<String> },
    #[error("storage error: {0}")]
    Storage(String),
    #[error("missing path parameter `{0}`")]
    MissingParam(String),
    #[error("invalid API URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Message for the admin: first field error, then server message, then `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message, field_errors, .. } => field_errors
                .first()
                .cloned()
                .or_else(|| message.clone())
                .unwrap_or_else(|| fallback.to_string()),
            ApiError::Rejected { message } => {
                message.clone().unwrap_or_else(|| fallback.to_string())
            }
            ApiError::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Pull `{message}` and `{errors:[{message}]}` out of an error body
fn decode_error_body(status: u16, body: &str) -> ApiError {
    let json: Value = serde_json::from_str(body).unwrap_or(Value::Null);
    let message = json
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string);
    let field_errors = json
        .get("errors")
        .and_then(Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .filter_map(|error| match error {
                    Value::String(text) => Some(text.clone()),
                    other => other.get("message").and_then(Value::as_str).map(str::to_string),
                })
                .collect()
        })
        .unwrap_or_default();
    ApiError::Status { status, message, field_errors }
}

/// A request before path rendering and authentication
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path template with `:name` placeholders
    pub path: String,
    pub params: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Vec::new(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    pub fn param(mut self, name: &str, value: impl ToString) -> Self {
        self.params.push((name.to_string(), value.to_string()));
        self
    }

    pub fn params<'a>(mut self, params: impl IntoIterator<Item = &'a (String, String)>) -> Self {
        self.params.extend(params.into_iter().cloned());
        self
    }

    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Path segments with every `:name` replaced by its raw value.
    /// Unknown placeholders are an error. Encoding happens when the URL is built.
    pub fn path_segments(&self) -> Result<Vec<String>, ApiError> {
        self.path
            .trim_start_matches('/')
            .split('/')
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => self
                    .params
                    .iter()
                    .rev()
                    .find(|(key, _)| key == name)
                    .map(|(_, value)| value.clone())
                    .ok_or_else(|| ApiError::MissingParam(name.to_string())),
                None => Ok(segment.to_string()),
            })
            .collect()
    }
}

/// Shared by every screen; cheap to clone
#[derive(Clone)]
pub struct ApiClient {
    config: Rc<AppConfig>,
    transport: Rc<dyn Transport>,
    session: Rc<SessionState>,
}

impl ApiClient {
    pub fn new(config: Rc<AppConfig>, transport: Rc<dyn Transport>, session: Rc<SessionState>) -> Self {
        Self { config, transport, session }
    }

    pub fn session(&self) -> &Rc<SessionState> {
        &self.session
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub async fn send(&self, request: ApiRequest) -> Result<Envelope, ApiError> {
        let mut url = self
            .config
            .endpoint_url(request.path_segments()?)
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        let url = String::from(url);

        let mut headers = Vec::new();
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        match &request.body {
            RequestBody::Json(_) => {
                headers.push(("Content-Type".to_string(), "application/json".to_string()))
            }
            RequestBody::Multipart(_) => {
                headers.push(("Content-Type".to_string(), "multipart/form-data".to_string()))
            }
            RequestBody::Empty => {}
        }

        log::debug!("🌐 [API] {} {}", request.method, url);
        let method = request.method;
        let response = self
            .transport
            .execute(HttpRequest {
                method,
                url: url.clone(),
                headers,
                body: request.body,
            })
            .await
            .map_err(|e| {
                log::error!("❌ [API] {} {} failed: {}", method, url, e);
                ApiError::Network(e.0)
            })?;

        if response.status == 401 {
            log::warn!("⚠️ [API] 401 from {}, clearing session", url);
            self.session.clear();
            return Err(ApiError::Unauthorized);
        }
        if !response.is_success() {
            let error = decode_error_body(response.status, &response.body);
            log::error!("❌ [API] {} {} -> {}", method, url, response.status);
            return Err(error);
        }

        let body = if response.body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?
        };
        let envelope = Envelope::from_body(body);
        if !envelope.is_success() {
            return Err(ApiError::Rejected { message: envelope.message });
        }
        Ok(envelope)
    }
}
