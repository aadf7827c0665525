// ============================================================================
// QUESTION SERVICE - Moderating student questions
// ============================================================================

use serde_json::json;

use super::api_client::{ApiClient, ApiError, ApiRequest};
use super::endpoints::QUESTION_VERIFY;
use crate::models::{Envelope, RecordId};

/// Toggle the verified flag of a question
pub async fn verify_question(client: &ApiClient, id: &RecordId) -> Result<Envelope, ApiError> {
    log::info!("✔️ [QUESTIONS] Verifying {}", id);
    client
        .send(ApiRequest::put(QUESTION_VERIFY).param("id", id).json(json!({})))
        .await
}
