// ============================================================================
// SERVICES - API communication only
// ============================================================================

pub mod transport;
pub mod api_client;
pub mod endpoints;
pub mod auth_service;
pub mod dashboard_service;
pub mod bounty_service;
pub mod question_service;
pub mod sales_service;

pub use api_client::{ApiClient, ApiError, ApiRequest};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, Part, RequestBody, Transport, TransportError};
#[cfg(target_arch = "wasm32")]
pub use transport::GlooTransport;
#[cfg(not(target_arch = "wasm32"))]
pub use transport::ReqwestTransport;
