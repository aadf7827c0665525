// ============================================================================
// ROUTE GUARD - Route table and token-based access control
// ============================================================================

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::rc::Rc;
use url::form_urlencoded;

use super::session_state::SessionState;
use crate::models::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    Unauthenticated,
    Authenticated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Departments,
    AddCourse { department_id: RecordId },
    Courses { department_id: RecordId },
    AddTopic { course_id: RecordId },
    Topics { course_id: RecordId },
    Quiz { topic_id: RecordId, course_id: Option<RecordId> },
    Projects { course_id: RecordId },
    Modules { course_id: RecordId },
    CourseTools { course_id: RecordId },
    QuestionsHub,
    Sales,
    Faqs,
    Contacts,
    Testimonials,
    Mentors,
    Pricing,
    Careers,
    ProjectMentors,
    Bounties,
    BountySubmissions { bounty_id: RecordId },
    BountyApplications { bounty_id: RecordId },
    NotFound { path: String },
}

/// Characters escaped in an id placed in a path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn query_value(query: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

fn segment(id: &RecordId) -> String {
    utf8_percent_encode(id.as_str(), SEGMENT).to_string()
}

impl Route {
    /// Parse a location (`/path?query`). Unmatched paths become `NotFound`.
    pub fn parse(location: &str) -> Route {
        let (path, query) = location.split_once('?').unwrap_or((location, ""));
        let decoded: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
            .collect();
        let segments: Vec<&str> = decoded.iter().map(String::as_str).collect();
        fn id(value: &str) -> RecordId {
            RecordId::from(value)
        }

        match segments.as_slice() {
            ["login"] => Route::Login,
            [] => Route::Dashboard,
            ["dashboard", "departments"] => Route::Departments,
            ["dashboard", "addcourses", department] => Route::AddCourse { department_id: id(department) },
            ["dashboard", "courses", "projects", course] => Route::Projects { course_id: id(course) },
            ["dashboard", "courses", "modules", course] => Route::Modules { course_id: id(course) },
            ["dashboard", "courses", "tools", course] => Route::CourseTools { course_id: id(course) },
            ["dashboard", "courses", department] => Route::Courses { department_id: id(department) },
            ["courses", "add-topic", course] => Route::AddTopic { course_id: id(course) },
            ["dashboard", "topics", course] => Route::Topics { course_id: id(course) },
            ["dashboard", "departments", "courses", "topic", topic] => Route::Quiz {
                topic_id: id(topic),
                course_id: query_value(query, "courseId").map(RecordId::from),
            },
            ["control_center", "questions_hub"] => Route::QuestionsHub,
            ["control_center", "mentors_managment"] => Route::ProjectMentors,
            ["control_center", "bounties"] => Route::Bounties,
            ["control_center", "bounty_submissions", bounty] => {
                Route::BountySubmissions { bounty_id: id(bounty) }
            }
            ["control_center", "applications", bounty] => {
                Route::BountyApplications { bounty_id: id(bounty) }
            }
            ["dashboard", "users"] => Route::Sales,
            ["website", "faq"] => Route::Faqs,
            ["contactus"] => Route::Contacts,
            ["reviews"] => Route::Testimonials,
            ["website", "mentors"] => Route::Mentors,
            ["website", "pricing"] => Route::Pricing,
            ["website", "careers"] => Route::Careers,
            _ => Route::NotFound { path: path.to_string() },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".into(),
            Route::Dashboard => "/".into(),
            Route::Departments => "/dashboard/departments".into(),
            Route::AddCourse { department_id } => format!("/dashboard/addcourses/{}", segment(department_id)),
            Route::Courses { department_id } => format!("/dashboard/courses/{}", segment(department_id)),
            Route::AddTopic { course_id } => format!("/courses/add-topic/{}", segment(course_id)),
            Route::Topics { course_id } => format!("/dashboard/topics/{}", segment(course_id)),
            Route::Quiz { topic_id, course_id } => match course_id {
                Some(course_id) => format!(
                    "/dashboard/departments/courses/topic/{}?courseId={}",
                    segment(topic_id),
                    form_urlencoded::byte_serialize(course_id.as_str().as_bytes()).collect::<String>(),
                ),
                None => format!("/dashboard/departments/courses/topic/{}", segment(topic_id)),
            },
            Route::Projects { course_id } => format!("/dashboard/courses/projects/{}", segment(course_id)),
            Route::Modules { course_id } => format!("/dashboard/courses/modules/{}", segment(course_id)),
            Route::CourseTools { course_id } => format!("/dashboard/courses/tools/{}", segment(course_id)),
            Route::QuestionsHub => "/control_center/questions_hub".into(),
            Route::Sales => "/dashboard/users".into(),
            Route::Faqs => "/website/faq".into(),
            Route::Contacts => "/contactus".into(),
            Route::Testimonials => "/reviews".into(),
            Route::Mentors => "/website/mentors".into(),
            Route::Pricing => "/website/pricing".into(),
            Route::Careers => "/website/careers".into(),
            Route::ProjectMentors => "/control_center/mentors_managment".into(),
            Route::Bounties => "/control_center/bounties".into(),
            Route::BountySubmissions { bounty_id } => {
                format!("/control_center/bounty_submissions/{}", segment(bounty_id))
            }
            Route::BountyApplications { bounty_id } => {
                format!("/control_center/applications/{}", segment(bounty_id))
            }
            Route::NotFound { path } => path.clone(),
        }
    }

    /// Everything but the sign-in page needs a session
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(Route),
}

#[derive(Clone)]
pub struct RouteGuard {
    session: Rc<SessionState>,
}

impl RouteGuard {
    pub fn new(session: Rc<SessionState>) -> Self {
        Self { session }
    }

    pub fn phase(&self) -> AuthPhase {
        self.session.phase()
    }

    pub fn resolve(&self, location: &str) -> Resolution {
        let route = Route::parse(location);
        match self.phase() {
            AuthPhase::Authenticated if route == Route::Login => {
                Resolution::Redirect(Route::Dashboard)
            }
            AuthPhase::Unauthenticated if route.is_protected() => {
                log::info!("🔒 [GUARD] {} requires a session", location);
                Resolution::Redirect(Route::Login)
            }
            _ => Resolution::Render(route),
        }
    }
}
