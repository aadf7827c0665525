// ============================================================================
// BOUNTY MODELS - Paid tasks, their submissions and applications
// ============================================================================

use chrono::{NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::record::{lenient_f64, lenient_u32, RecordId, Resource};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bounty {
    pub id: RecordId,
    /// Some bounty payloads only carry the document id
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub document_id: Option<RecordId>,
    pub name: String,
    pub description: String,
    pub link: String,
    pub course_id: Option<RecordId>,
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: f64,
    #[serde(deserialize_with = "lenient_u32")]
    pub slots: u32,
    #[serde(rename = "type")]
    pub bounty_type: String,
    pub status: String,
    pub expiry_date: Option<String>,
    pub submissions: Vec<serde_json::Value>,
}

impl Resource for Bounty {
    fn id(&self) -> &RecordId {
        match &self.document_id {
            Some(document_id) if self.id.is_empty() => document_id,
            _ => &self.id,
        }
    }
}

impl Bounty {
    pub fn submission_count(&self) -> usize {
        self.submissions.len()
    }

    /// Expiry formatted for a `datetime-local` input (`YYYY-MM-DDTHH:MM`)
    pub fn expiry_for_input(&self) -> String {
        self.expiry_date
            .as_deref()
            .map(|date| date.chars().take(16).collect())
            .unwrap_or_default()
    }
}

/// Converts a `datetime-local` value into the ISO-8601 UTC string the API
/// stores. Values that already carry a zone are normalised; anything
/// unparseable is passed through untouched.
pub fn expiry_to_iso(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        return String::new();
    }
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(input) {
        return parsed
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true);
    }
    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|naive| {
            Utc.from_utc_datetime(&naive)
                .to_rfc3339_opts(SecondsFormat::Millis, true)
        })
        .unwrap_or_else(|| {
            log::warn!("⚠️ [BOUNTY] Unrecognised expiry date `{}`", input);
            input.to_string()
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubmissionState {
    Reviewing,
    Successful,
    Failed,
}

impl SubmissionState {
    pub const ALL: [SubmissionState; 3] = [
        SubmissionState::Reviewing,
        SubmissionState::Successful,
        SubmissionState::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Reviewing => "REVIEWING",
            SubmissionState::Successful => "SUCCESSFUL",
            SubmissionState::Failed => "FAILED",
        }
    }
}

impl Default for SubmissionState {
    fn default() -> Self {
        SubmissionState::Reviewing
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Participant {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BountySubmission {
    pub id: RecordId,
    pub status: SubmissionState,
    pub notes: String,
    pub submitted_link: String,
    pub created_at: Option<String>,
    pub application_id: Option<RecordId>,
    pub is_bounty_awarded: bool,
    pub user: Participant,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BountyApplication {
    pub id: RecordId,
    pub user: Participant,
    pub created_at: Option<String>,
}

impl Resource for BountySubmission {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Resource for BountyApplication {
    fn id(&self) -> &RecordId {
        &self.id
    }
}
