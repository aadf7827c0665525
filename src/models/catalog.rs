// ============================================================================
// CATALOG MODELS - Departments, courses and what hangs off a course
// ============================================================================

use serde::{Deserialize, Serialize};

use super::record::{impl_resource, lenient_u32, RecordId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Department {
    pub id: RecordId,
    pub department_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Course {
    pub id: RecordId,
    pub course_name: String,
    pub course_description: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub course_count: u32,
    pub course_thumbnail: Option<String>,
    pub department_id: Option<RecordId>,
    pub hide: bool,
}

/// Entry of the app-wide course dropdown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseName {
    pub id: RecordId,
    pub course_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Topic {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub video: String,
    pub ppt_link: String,
    pub course_id: Option<RecordId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Answer {
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizQuestion {
    pub id: RecordId,
    pub text: String,
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Content {
    pub id: RecordId,
    pub content_name: String,
    pub module_id: Option<RecordId>,
}

/// Curriculum module with its content rows embedded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurriculumModule {
    pub id: RecordId,
    pub module_name: String,
    pub contents: Vec<Content>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: RecordId,
    pub project_name: String,
    pub project_link: String,
    pub course_id: Option<RecordId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseTool {
    pub id: RecordId,
    pub tool_name: String,
    pub tool_image: Option<String>,
    pub course_id: Option<RecordId>,
}

impl_resource!(
    Department,
    Course,
    CourseName,
    Topic,
    QuizQuestion,
    Content,
    CurriculumModule,
    Project,
    CourseTool,
);
