// ============================================================================
// APP - Wiring, navigation and session lifecycle
// ============================================================================
// `AppContext` owns the shared handles (config, session, client, notification,
// lookups). `App` turns a location into a guarded `Route`, builds the screen
// for it and mounts it.
// ============================================================================

use async_trait::async_trait;
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::AppConfig;
use crate::models::*;
use crate::services::auth_service::{self, login_error_message};
use crate::services::{ApiClient, Transport};
use crate::state::{Notification, Resolution, Route, RouteGuard, SessionState, TimerScheduler};
use crate::utils::storage::KeyValueStore;
use crate::viewmodels::list_viewmodel::ListController;
use crate::viewmodels::screens::{self, *};

pub struct AppContext {
    pub config: Rc<AppConfig>,
    pub session: Rc<SessionState>,
    pub client: ApiClient,
    pub notification: Rc<Notification>,
    pub guard: RouteGuard,
    pub lookups: Lookups,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        store: Rc<dyn KeyValueStore>,
        transport: Rc<dyn Transport>,
        timers: Rc<dyn TimerScheduler>,
    ) -> Self {
        let config = Rc::new(config);
        let session = Rc::new(SessionState::restore(store, &config.token_storage_key));
        let client = ApiClient::new(config.clone(), transport, session.clone());
        let notification = Rc::new(Notification::new(timers, config.notification_timeout_ms));
        let lookups = Lookups::new(&client, &notification);
        Self {
            guard: RouteGuard::new(session.clone()),
            config,
            session,
            client,
            notification,
            lookups,
        }
    }
}

/// First fetches of whatever a page shows
#[async_trait(?Send)]
trait Mount {
    async fn mount(&self) -> bool;
}

#[async_trait(?Send)]
impl<R: Resource> Mount for ResourceScreen<R> {
    async fn mount(&self) -> bool {
        ResourceScreen::mount(self).await
    }
}

#[async_trait(?Send)]
impl<R: Resource> Mount for ListController<R> {
    async fn mount(&self) -> bool {
        self.load().await
    }
}

macro_rules! mount_composite {
    ($($screen:ty),+ $(,)?) => {
        $(
            #[async_trait(?Send)]
            impl Mount for $screen {
                async fn mount(&self) -> bool {
                    <$screen>::mount(self).await
                }
            }
        )+
    };
}

mount_composite!(
    DashboardScreen,
    QuizScreen,
    ModulesScreen,
    PricingScreen,
    SubmissionsScreen,
    QuestionsHubScreen,
    SalesScreen,
);

/// The screen behind the current route
pub enum Page {
    Login,
    Dashboard(DashboardScreen),
    Departments(ResourceScreen<Department>),
    Courses(ResourceScreen<Course>),
    Topics(ResourceScreen<Topic>),
    Quiz(QuizScreen),
    Projects(ResourceScreen<Project>),
    Modules(ModulesScreen),
    CourseTools(ResourceScreen<CourseTool>),
    QuestionsHub(QuestionsHubScreen),
    Sales(SalesScreen),
    Faqs(ResourceScreen<Faq>),
    Contacts(Rc<ListController<Contact>>),
    Testimonials(ResourceScreen<Testimonial>),
    Mentors(ResourceScreen<Mentor>),
    Pricing(PricingScreen),
    Careers(ResourceScreen<JobPosting>),
    ProjectMentors(ResourceScreen<ProjectMentor>),
    Bounties(ResourceScreen<Bounty>),
    BountySubmissions(SubmissionsScreen),
    BountyApplications(Rc<ListController<BountyApplication>>),
    NotFound(String),
}

impl Page {
    fn build(ctx: &AppContext, route: &Route) -> Page {
        match route {
            Route::Login => Page::Login,
            Route::Dashboard => Page::Dashboard(screens::dashboard(ctx)),
            Route::Departments => Page::Departments(screens::departments(ctx)),
            Route::AddCourse { department_id } | Route::Courses { department_id } => {
                Page::Courses(screens::courses(ctx, department_id))
            }
            Route::AddTopic { course_id } | Route::Topics { course_id } => {
                Page::Topics(screens::topics(ctx, course_id))
            }
            Route::Quiz { topic_id, course_id } => {
                Page::Quiz(screens::quiz(ctx, topic_id, course_id.clone()))
            }
            Route::Projects { course_id } => Page::Projects(screens::projects(ctx, course_id)),
            Route::Modules { course_id } => Page::Modules(screens::modules(ctx, course_id)),
            Route::CourseTools { course_id } => {
                Page::CourseTools(screens::course_tools(ctx, course_id))
            }
            Route::QuestionsHub => Page::QuestionsHub(screens::questions_hub(ctx)),
            Route::Sales => Page::Sales(screens::sales(ctx)),
            Route::Faqs => Page::Faqs(screens::faqs(ctx)),
            Route::Contacts => Page::Contacts(screens::contacts(ctx)),
            Route::Testimonials => Page::Testimonials(screens::testimonials(ctx)),
            Route::Mentors => Page::Mentors(screens::mentors(ctx)),
            Route::Pricing => Page::Pricing(screens::pricing(ctx)),
            Route::Careers => Page::Careers(screens::careers(ctx)),
            Route::ProjectMentors => Page::ProjectMentors(screens::project_mentors(ctx)),
            Route::Bounties => Page::Bounties(screens::bounties(ctx)),
            Route::BountySubmissions { bounty_id } => {
                Page::BountySubmissions(screens::bounty_submissions(ctx, bounty_id))
            }
            Route::BountyApplications { bounty_id } => {
                Page::BountyApplications(screens::bounty_applications(ctx, bounty_id))
            }
            Route::NotFound { path } => Page::NotFound(path.clone()),
        }
    }

    /// Pages whose forms pick from the shared course/mentor dropdowns
    fn needs_lookups(&self) -> bool {
        matches!(self, Page::Sales(_) | Page::ProjectMentors(_) | Page::Bounties(_))
    }

    /// Initial fetches of the page
    async fn mount(&self, ctx: &AppContext) {
        let screen: &dyn Mount = match self {
            Page::Login | Page::NotFound(_) => return,
            Page::Dashboard(screen) => screen,
            Page::Departments(screen) => screen,
            Page::Courses(screen) => screen,
            Page::Topics(screen) => screen,
            Page::Quiz(screen) => screen,
            Page::Projects(screen) => screen,
            Page::Modules(screen) => screen,
            Page::CourseTools(screen) => screen,
            Page::QuestionsHub(screen) => screen,
            Page::Sales(screen) => screen,
            Page::Faqs(screen) => screen,
            Page::Contacts(list) => list.as_ref(),
            Page::Testimonials(screen) => screen,
            Page::Mentors(screen) => screen,
            Page::Pricing(screen) => screen,
            Page::Careers(screen) => screen,
            Page::ProjectMentors(screen) => screen,
            Page::Bounties(screen) => screen,
            Page::BountySubmissions(screen) => screen,
            Page::BountyApplications(list) => list.as_ref(),
        };
        if self.needs_lookups() {
            ctx.lookups.ensure_loaded().await;
        }
        screen.mount().await;
    }
}

pub struct App {
    ctx: AppContext,
    route: RefCell<Route>,
    page: RefCell<Option<Rc<Page>>>,
}

impl App {
    pub fn new(ctx: AppContext) -> Self {
        log::info!("🚀 [APP] Admin console ready (authenticated: {})", ctx.session.is_authenticated());
        Self {
            ctx,
            route: RefCell::new(Route::Login),
            page: RefCell::new(None),
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn route(&self) -> Route {
        self.route.borrow().clone()
    }

    pub fn page(&self) -> Option<Rc<Page>> {
        self.page.borrow().clone()
    }

    /// Resolve `location` through the guard, then build and mount its screen.
    /// Returns the route actually shown.
    pub async fn navigate(&self, location: &str) -> Route {
        let route = match self.ctx.guard.resolve(location) {
            Resolution::Render(route) => route,
            Resolution::Redirect(target) => {
                log::info!("↪️ [APP] {} redirected to {}", location, target.path());
                target
            }
        };

        let page = Rc::new(Page::build(&self.ctx, &route));
        *self.route.borrow_mut() = route.clone();
        *self.page.borrow_mut() = Some(page.clone());
        log::info!("🧭 [APP] Showing {}", route.path());

        page.mount(&self.ctx).await;

        // Add routes land on the list with the create form open
        match (&route, page.as_ref()) {
            (Route::AddCourse { .. }, Page::Courses(screen)) => screen.form.start_create(),
            (Route::AddTopic { .. }, Page::Topics(screen)) => screen.form.start_create(),
            _ => {}
        }
        route
    }

    /// True when the shown page needs a session that no longer exists (e.g. after a 401)
    pub fn needs_sign_in(&self) -> bool {
        self.route.borrow().is_protected() && !self.ctx.session.is_authenticated()
    }

    /// Sign in and land on the dashboard. The error is the message shown to the admin.
    pub async fn login(&self, email: &str, password: &str) -> Result<Route, String> {
        let credentials = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        match auth_service::login(&self.ctx.client, &credentials).await {
            Ok(()) => Ok(self.navigate("/").await),
            Err(error) => {
                log::error!("❌ [APP] Sign-in failed: {}", error);
                let message = login_error_message(&error);
                self.ctx.notification.show(message.clone());
                Err(message)
            }
        }
    }

    /// Drop the token and every screen's data
    pub fn logout(&self) {
        auth_service::logout(&self.ctx.client);
        self.ctx.lookups.clear();
        self.ctx.notification.dismiss();
        *self.page.borrow_mut() = None;
        *self.route.borrow_mut() = Route::Login;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::transport::HttpMethod;
    use crate::state::ManualTimers;
    use crate::testing::FakeTransport;
    use crate::utils::storage::MemoryStore;
    use serde_json::json;

    fn build_app(token: Option<&str>) -> (App, Rc<FakeTransport>) {
        let transport = Rc::new(FakeTransport::new());
        let store = match token {
            Some(token) => MemoryStore::with_entry("token", token),
            None => MemoryStore::new(),
        };
        let ctx = AppContext::new(
            AppConfig::default(),
            Rc::new(store),
            transport.clone(),
            Rc::new(ManualTimers::new()),
        );
        (App::new(ctx), transport)
    }

    #[tokio::test]
    async fn protected_route_without_session_lands_on_login() {
        let (app, transport) = build_app(None);

        let route = app.navigate("/website/faq").await;

        assert_eq!(route, Route::Login);
        assert!(matches!(app.page().as_deref(), Some(Page::Login)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn login_route_with_session_goes_to_dashboard() {
        let (app, transport) = build_app(Some("tok"));
        transport.reply(200, json!([{ "id": "p1", "courseName": "Rust" }]));

        assert_eq!(app.navigate("/login").await, Route::Dashboard);
        let Some(page) = app.page() else { panic!("no page") };
        let Page::Dashboard(screen) = page.as_ref() else { panic!("not the dashboard") };
        assert_eq!(screen.summary().total, 1);
    }

    #[tokio::test]
    async fn faq_page_loads_its_list_on_mount() {
        let (app, transport) = build_app(Some("tok"));
        transport.reply(200, json!({ "allFAQs": [{ "id": "f1", "question": "Why?" }] }));

        app.navigate("/website/faq").await;

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert!(request.url.ends_with("/api/v1/faqs/allFAQs"));
        assert_eq!(request.header("Authorization"), Some("Bearer tok"));
        let Some(page) = app.page() else { panic!("no page") };
        let Page::Faqs(screen) = page.as_ref() else { panic!("not the FAQ page") };
        assert_eq!(screen.list.len(), 1);
    }

    #[tokio::test]
    async fn add_course_route_opens_create_form() {
        let (app, _transport) = build_app(Some("tok"));

        let route = app.navigate("/dashboard/addcourses/d1").await;

        assert_eq!(route, Route::AddCourse { department_id: "d1".into() });
        let Some(page) = app.page() else { panic!("no page") };
        let Page::Courses(screen) = page.as_ref() else { panic!("not the courses page") };
        assert!(screen.form.is_open());
        assert!(!screen.form.draft().is_editing());
    }

    #[tokio::test]
    async fn encoded_route_id_reaches_the_api_encoded_once() {
        let (app, transport) = build_app(Some("tok"));
        transport.reply(200, json!({ "departmentCourses": { "courses": [] } }));

        let route = app.navigate("/dashboard/courses/a%20b").await;

        assert_eq!(route, Route::Courses { department_id: "a b".into() });
        assert!(transport
            .last_request()
            .url
            .ends_with("/api/v1/courses/getCoursesByDeptId/a%20b"));
    }

    #[tokio::test]
    async fn bounties_page_loads_lookups_before_its_list() {
        let (app, transport) = build_app(Some("tok"));
        transport.reply(200, json!({ "allCourses": [] }));
        transport.reply(200, json!({ "mentors": [] }));
        transport.reply(200, json!({ "additional": [] }));

        app.navigate("/control_center/bounties").await;

        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls.len(), 3);
        assert!(urls[0].ends_with("/api/v1/courses/allCourses"));
        assert!(urls[1].ends_with("/api/v1/mentors/getAllMentors"));
    }

    #[tokio::test]
    async fn unknown_path_is_not_found_behind_the_guard() {
        let (app, _) = build_app(Some("tok"));
        assert_eq!(
            app.navigate("/nowhere").await,
            Route::NotFound { path: "/nowhere".into() }
        );

        let (anonymous, _) = build_app(None);
        assert_eq!(anonymous.navigate("/nowhere").await, Route::Login);
    }

    #[tokio::test]
    async fn login_then_logout() {
        let (app, transport) = build_app(None);
        transport.reply(200, json!({ "token": "jwt" }));
        transport.reply(200, json!([]));

        assert_eq!(app.login("admin@academy.io ", "pw").await, Ok(Route::Dashboard));
        assert!(app.context().session.is_authenticated());

        app.logout();
        assert!(!app.context().session.is_authenticated());
        assert_eq!(app.route(), Route::Login);
        assert!(app.page().is_none());
    }

    #[tokio::test]
    async fn bad_credentials_show_fallback() {
        let (app, transport) = build_app(None);
        transport.reply(401, json!({}));

        let result = app.login("admin@academy.io", "wrong").await;

        assert_eq!(result, Err("Login failed. Please try again.".to_string()));
        assert_eq!(app.route(), Route::Login);
    }

    #[tokio::test]
    async fn expired_session_asks_for_sign_in() {
        let (app, transport) = build_app(Some("stale"));
        transport.reply(401, json!({ "message": "jwt expired" }));

        app.navigate("/reviews").await;

        assert!(app.needs_sign_in());
        assert_eq!(app.context().guard.resolve("/reviews"), Resolution::Redirect(Route::Login));
    }
}
