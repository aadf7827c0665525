// ============================================================================
// TRANSPORT - Raw HTTP exchange, one implementation per target
// ============================================================================
// Browser builds go through gloo-net (fetch); native builds through reqwest.
// The API client only ever sees `HttpRequest` / `HttpResponse`.
// ============================================================================

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::models::FileUpload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        })
    }
}

/// One field of a multipart form
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Text { name: String, value: String },
    File { name: String, file: FileUpload },
}

impl Part {
    pub fn name(&self) -> &str {
        match self {
            Part::Text { name, .. } | Part::File { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(Vec<Part>),
}

impl RequestBody {
    pub fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Headers to put on the wire. The multipart content type is left to the
    /// HTTP engine so it can append the boundary.
    fn wire_headers(&self) -> impl Iterator<Item = &(String, String)> {
        let multipart = self.body.is_multipart();
        self.headers
            .iter()
            .filter(move |(key, _)| !(multipart && key.eq_ignore_ascii_case("content-type")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[async_trait(?Send)]
pub trait Transport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

// ============================================================================
// BROWSER
// ============================================================================

#[cfg(target_arch = "wasm32")]
pub use browser::GlooTransport;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use gloo_net::http::{Request, RequestBuilder};
    use wasm_bindgen::JsValue;

    #[derive(Debug, Default, Clone, Copy)]
    pub struct GlooTransport;

    fn js_error(context: &str, error: JsValue) -> TransportError {
        TransportError(format!("{}: {:?}", context, error))
    }

    fn form_data(parts: &[Part]) -> Result<web_sys::FormData, TransportError> {
        let form = web_sys::FormData::new().map_err(|e| js_error("FormData", e))?;
        for part in parts {
            match part {
                Part::Text { name, value } => form
                    .append_with_str(name, value)
                    .map_err(|e| js_error("FormData text", e))?,
                Part::File { name, file } => {
                    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
                    let chunks = js_sys::Array::of1(&bytes);
                    let options = web_sys::BlobPropertyBag::new();
                    options.set_type(&file.content_type);
                    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&chunks, &options)
                        .map_err(|e| js_error("Blob", e))?;
                    form.append_with_blob_and_filename(name, &blob, &file.file_name)
                        .map_err(|e| js_error("FormData file", e))?;
                }
            }
        }
        Ok(form)
    }

    #[async_trait(?Send)]
    impl Transport for GlooTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            let mut builder: RequestBuilder = match request.method {
                HttpMethod::Get => Request::get(&request.url),
                HttpMethod::Post => Request::post(&request.url),
                HttpMethod::Put => Request::put(&request.url),
                HttpMethod::Delete => Request::delete(&request.url),
            };
            for (key, value) in request.wire_headers() {
                builder = builder.header(key, value);
            }

            let prepared = match &request.body {
                RequestBody::Empty => builder.build(),
                RequestBody::Json(value) => builder.body(value.to_string()),
                RequestBody::Multipart(parts) => builder.body(form_data(parts)?),
            }
            .map_err(|e| TransportError(e.to_string()))?;

            let response = prepared
                .send()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Ok(HttpResponse { status, body })
        }
    }
}

// ============================================================================
// NATIVE
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestTransport;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::*;

    #[derive(Debug, Default, Clone)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new() -> Self {
            Self::default()
        }
    }

    fn multipart_form(parts: &[Part]) -> Result<reqwest::multipart::Form, TransportError> {
        let mut form = reqwest::multipart::Form::new();
        for part in parts {
            form = match part {
                Part::Text { name, value } => form.text(name.clone(), value.clone()),
                Part::File { name, file } => {
                    let body = reqwest::multipart::Part::bytes(file.bytes.clone())
                        .file_name(file.file_name.clone())
                        .mime_str(&file.content_type)
                        .map_err(|e| TransportError(e.to_string()))?;
                    form.part(name.clone(), body)
                }
            };
        }
        Ok(form)
    }

    #[async_trait(?Send)]
    impl Transport for ReqwestTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
                HttpMethod::Put => reqwest::Method::PUT,
                HttpMethod::Delete => reqwest::Method::DELETE,
            };
            let mut builder = self.client.request(method, request.url.as_str());
            for (key, value) in request.wire_headers() {
                builder = builder.header(key.as_str(), value.as_str());
            }
            builder = match &request.body {
                RequestBody::Empty => builder,
                RequestBody::Json(value) => builder.body(value.to_string()),
                RequestBody::Multipart(parts) => builder.multipart(multipart_form(parts)?),
            };

            let response = builder
                .send()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Ok(HttpResponse { status, body })
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipart_requests_drop_explicit_content_type() {
        let request = HttpRequest {
            method: HttpMethod::Post,
            url: "http://localhost/api".into(),
            headers: vec![
                ("Authorization".into(), "Bearer t".into()),
                ("Content-Type".into(), "multipart/form-data".into()),
            ],
            body: RequestBody::Multipart(vec![]),
        };
        let sent: Vec<_> = request.wire_headers().map(|(k, _)| k.as_str()).collect();
        assert_eq!(sent, vec!["Authorization"]);
        assert_eq!(request.header("content-type"), Some("multipart/form-data"));
    }

    #[test]
    fn json_requests_keep_content_type() {
        let request = HttpRequest {
            method: HttpMethod::Put,
            url: "http://localhost/api".into(),
            headers: vec![("Content-Type".into(), "application/json".into())],
            body: RequestBody::Json(serde_json::json!({})),
        };
        assert_eq!(request.wire_headers().count(), 1);
    }
}
