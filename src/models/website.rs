// ============================================================================
// WEBSITE MODELS - Content shown on the public site
// ============================================================================

use serde::{Deserialize, Serialize};

use super::record::{impl_resource, lenient_f64, lenient_u32, RecordId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Mentor {
    pub id: RecordId,
    pub name: String,
    pub qualification: String,
    pub company: String,
    pub photo: Option<String>,
}

/// Mentor account that reviews student projects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectMentor {
    pub id: RecordId,
    pub email: String,
    pub mentor_name: String,
    pub course_id: Option<RecordId>,
    /// Spelled this way by the backend
    #[serde(rename = "coureName")]
    pub course_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    pub id: RecordId,
    pub name: String,
    pub collage_name: String,
    pub review: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub stars: u32,
    pub collage_logo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Faq {
    pub id: RecordId,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingPlan {
    #[serde(alias = "pricingId")]
    pub id: RecordId,
    #[serde(alias = "name")]
    pub pricing_name: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingFeature {
    pub id: RecordId,
    pub name: String,
    pub is_included: bool,
}

/// Price option a sale can be booked against
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoursePricing {
    pub id: RecordId,
    pub name: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPosting {
    pub id: RecordId,
    pub role_name: String,
    pub job_description: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub experience: String,
    pub responsibilities: String,
    pub requirements: String,
    pub application_link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl_resource!(
    Mentor,
    ProjectMentor,
    Testimonial,
    Faq,
    PricingPlan,
    PricingFeature,
    CoursePricing,
    JobPosting,
    Contact,
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pricing_plan_accepts_pricing_id() {
        let plan: PricingPlan = serde_json::from_value(json!({
            "pricingId": 4,
            "pricingName": "Pro",
            "price": "4999"
        }))
        .unwrap();

        assert_eq!(plan.id.as_str(), "4");
        assert_eq!(plan.price, 4999.0);
    }

    #[test]
    fn job_posting_type_field() {
        let job: JobPosting =
            serde_json::from_value(json!({ "id": "j", "roleName": "SRE", "type": "Remote" })).unwrap();
        assert_eq!(job.job_type, "Remote");
        assert_eq!(serde_json::to_value(&job).unwrap()["type"], json!("Remote"));
    }
}
