// ============================================================================
// BOUNTY SERVICE - Reviewing bounty submissions
// ============================================================================

use serde_json::json;

use super::api_client::{ApiClient, ApiError, ApiRequest};
use super::endpoints::BOUNTY_VERIFY;
use crate::models::{BountySubmission, Envelope, SubmissionState};

/// Set the review state of one submission
pub async fn verify_submission(
    client: &ApiClient,
    submission: &BountySubmission,
    state: SubmissionState,
) -> Result<Envelope, ApiError> {
    log::info!(
        "🏆 [BOUNTY] Submission {} -> {}",
        submission.id,
        state.as_str()
    );
    let body = json!({
        "state": { "status": state },
        "applicationId": submission.application_id,
    });
    client
        .send(
            ApiRequest::put(BOUNTY_VERIFY)
                .param("submissionId", &submission.id)
                .json(body),
        )
        .await
}
