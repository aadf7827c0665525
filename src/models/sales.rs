// ============================================================================
// SALES MODELS - Student purchases and questions
// ============================================================================

use serde::{Deserialize, Serialize};

use super::record::{impl_resource, lenient_f64, RecordId};

/// One course sold to one student
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sale {
    pub id: RecordId,
    pub user_id: Option<RecordId>,
    pub course_id: Option<RecordId>,
    pub email: String,
    pub phone_number: String,
    pub course_name: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
    pub price_id: Option<RecordId>,
    pub is_full_payment: bool,
}

impl Sale {
    /// Paid means the full course price was settled
    pub fn is_paid(&self) -> bool {
        self.is_full_payment
    }
}

/// Purchase row used by the dashboard chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Purchase {
    pub id: RecordId,
    pub course_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserQuestion {
    pub id: RecordId,
    pub question: String,
    pub answer: Option<String>,
    pub student_name: Option<String>,
    pub is_verified: bool,
    pub is_answered: bool,
    pub created_at: Option<String>,
}

impl_resource!(Sale, Purchase, UserQuestion);
