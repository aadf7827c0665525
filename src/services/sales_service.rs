// ============================================================================
// SALES SERVICE - Course access management
// ============================================================================

use serde_json::json;

use super::api_client::{ApiClient, ApiError, ApiRequest};
use super::endpoints::SALES_REMOVE_ACCESS;
use crate::models::{Envelope, Sale};

/// Revoke the student's access to the course of this sale
pub async fn remove_course_access(client: &ApiClient, sale: &Sale) -> Result<Envelope, ApiError> {
    log::info!(
        "🚫 [SALES] Removing access for {} to {}",
        sale.email,
        sale.course_name
    );
    let body = json!({ "userId": sale.user_id, "courseId": sale.course_id });
    client
        .send(ApiRequest::delete(SALES_REMOVE_ACCESS).json(body))
        .await
}
