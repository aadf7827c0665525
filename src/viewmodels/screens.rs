// ============================================================================
// SCREENS - One list + form pairing per resource
// ============================================================================
// Each factory wires the endpoints, refresh strategy and form schema of one
// admin screen. Composite screens add the extra actions their page offers.
// ============================================================================

use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::form_viewmodel::{FormController, FormSchema, Rule, SubmitStatus};
use super::list_viewmodel::{ListController, MutationKind, PageMode, RefreshStrategy};
use crate::app::AppContext;
use crate::models::*;
use crate::services::dashboard_service::{aggregate, PurchaseSummary};
use crate::services::endpoints::{self, ResourceEndpoints};
use crate::services::{bounty_service, question_service, sales_service};
use crate::state::filters::{any_field_matches, PaymentFilter};

pub struct ResourceScreen<R: Resource> {
    pub list: Rc<ListController<R>>,
    pub form: Rc<FormController<R>>,
}

impl<R: Resource> ResourceScreen<R> {
    pub async fn mount(&self) -> bool {
        self.list.load().await
    }
}

/// Wiring shared by every list + form screen
struct ScreenSpec<'a> {
    endpoints: ResourceEndpoints,
    strategy: RefreshStrategy,
    schema: FormSchema,
    list_label: &'static str,
    form_label: &'static str,
    params: &'a [(&'static str, &'a RecordId)],
    fixed: &'a [(&'static str, &'a RecordId)],
    paging: Option<(PageMode, u32)>,
}

impl<'a> ScreenSpec<'a> {
    fn new(
        endpoints: ResourceEndpoints,
        strategy: RefreshStrategy,
        schema: FormSchema,
        list_label: &'static str,
        form_label: &'static str,
    ) -> Self {
        Self {
            endpoints,
            strategy,
            schema,
            list_label,
            form_label,
            params: &[],
            fixed: &[],
            paging: None,
        }
    }

    fn params(mut self, params: &'a [(&'static str, &'a RecordId)]) -> Self {
        self.params = params;
        self
    }

    fn fixed(mut self, fixed: &'a [(&'static str, &'a RecordId)]) -> Self {
        self.fixed = fixed;
        self
    }

    fn paging(mut self, mode: PageMode, page_size: u32) -> Self {
        self.paging = Some((mode, page_size));
        self
    }

    fn build<R: Resource>(self, ctx: &AppContext) -> ResourceScreen<R> {
        let mut list = ListController::new(
            ctx.client.clone(),
            ctx.notification.clone(),
            self.endpoints,
            self.strategy,
            self.list_label,
        );
        if let Some((mode, size)) = self.paging {
            list = list.with_paging(mode, size);
        }
        let mut form = FormController::new(
            ctx.client.clone(),
            ctx.notification.clone(),
            self.endpoints,
            self.schema,
            self.form_label,
        );
        for (name, value) in self.params {
            list.set_param(name, value);
            form.set_param(name, value);
        }
        for (name, value) in self.fixed {
            form = form.with_fixed(name, value.to_string());
        }
        let list = Rc::new(list);
        ResourceScreen {
            form: Rc::new(form.with_list(list.clone())),
            list,
        }
    }
}

fn list_only<R: Resource>(
    ctx: &AppContext,
    endpoints: ResourceEndpoints,
    strategy: RefreshStrategy,
    label: &'static str,
) -> ListController<R> {
    ListController::new(ctx.client.clone(), ctx.notification.clone(), endpoints, strategy, label)
}

// ============================================================================
// CATALOG
// ============================================================================

pub fn departments(ctx: &AppContext) -> ResourceScreen<Department> {
    ScreenSpec::new(
        endpoints::DEPARTMENTS,
        RefreshStrategy::Reload,
        FormSchema::new().text("departmentName", "Department name"),
        "departments",
        "Department",
    )
    .build(ctx)
}

pub fn courses(ctx: &AppContext, department_id: &RecordId) -> ResourceScreen<Course> {
    ScreenSpec::new(
        endpoints::COURSES,
        RefreshStrategy::Reload,
        FormSchema::new()
            .text("courseName", "Course name")
            .text("courseDescription", "Course description")
            .optional_number("courseCount", "Course count")
            .file("courseThumbnail", "Thumbnail", true)
            .boolean("hide", "Hide")
            .multipart(),
        "courses",
        "Course",
    )
    .params(&[("departmentId", department_id)])
    .fixed(&[("departmentId", department_id)])
    .build(ctx)
}

pub fn topics(ctx: &AppContext, course_id: &RecordId) -> ResourceScreen<Topic> {
    ScreenSpec::new(
        endpoints::TOPICS,
        RefreshStrategy::Optimistic,
        FormSchema::new()
            .text("title", "Title")
            .text("description", "Description")
            .text("video", "Video link")
            .optional_text("pptLink", "Slides link"),
        "topics",
        "Topic",
    )
    .params(&[("courseId", course_id)])
    .build(ctx)
}

pub fn projects(ctx: &AppContext, course_id: &RecordId) -> ResourceScreen<Project> {
    ScreenSpec::new(
        endpoints::PROJECTS,
        RefreshStrategy::Optimistic,
        FormSchema::new()
            .text("projectName", "Project name")
            .text("projectLink", "Project link"),
        "projects",
        "Project",
    )
    .params(&[("courseId", course_id)])
    .build(ctx)
}

pub fn course_tools(ctx: &AppContext, course_id: &RecordId) -> ResourceScreen<CourseTool> {
    ScreenSpec::new(
        endpoints::COURSE_TOOLS,
        RefreshStrategy::Optimistic,
        FormSchema::new()
            .text("toolName", "Tool name")
            .file("toolImage", "Tool image", true)
            .multipart(),
        "course tools",
        "Tool",
    )
    .params(&[("courseId", course_id)])
    .fixed(&[("courseId", course_id)])
    .build(ctx)
}

/// Quiz questions of one topic; answers are edited as a list on the draft
pub struct QuizScreen {
    pub questions: ResourceScreen<QuizQuestion>,
    pub course_id: Option<RecordId>,
}

impl QuizScreen {
    pub async fn mount(&self) -> bool {
        self.questions.mount().await
    }

    fn answers(&self) -> Vec<Answer> {
        self.questions
            .form
            .draft()
            .get("answers")
            .and_then(|value| value.to_json())
            .and_then(|json| serde_json::from_value(json).ok())
            .unwrap_or_default()
    }

    fn store_answers(&self, answers: Vec<Answer>) {
        let json = serde_json::to_value(answers).unwrap_or(Value::Array(Vec::new()));
        self.questions.form.set_field("answers", FieldValue::Json(json));
    }

    pub fn add_answer(&self) {
        let mut answers = self.answers();
        answers.push(Answer::default());
        self.store_answers(answers);
    }

    pub fn set_answer(&self, index: usize, text: &str, is_correct: bool) {
        let mut answers = self.answers();
        if let Some(answer) = answers.get_mut(index) {
            answer.text = text.to_string();
            answer.is_correct = is_correct;
            self.store_answers(answers);
        }
    }

    pub fn remove_answer(&self, index: usize) {
        let mut answers = self.answers();
        if index < answers.len() {
            answers.remove(index);
            self.store_answers(answers);
        }
    }
}

pub fn quiz(ctx: &AppContext, topic_id: &RecordId, course_id: Option<RecordId>) -> QuizScreen {
    QuizScreen {
        questions: ScreenSpec::new(
            endpoints::QUIZ_QUESTIONS,
            RefreshStrategy::Optimistic,
            FormSchema::new().text("text", "Question").json("answers", "Answers"),
            "quiz questions",
            "Quiz question",
        )
        .params(&[("topicId", topic_id)])
        .build(ctx),
        course_id,
    }
}

/// Curriculum modules with their content rows
pub struct ModulesScreen {
    pub modules: ResourceScreen<CurriculumModule>,
    pub content: Rc<FormController<Content>>,
    content_list: ListController<Content>,
}

impl ModulesScreen {
    pub async fn mount(&self) -> bool {
        self.modules.mount().await
    }

    pub fn start_add_content(&self, module_id: &RecordId) {
        self.content.set_param("moduleId", module_id);
        self.content.start_create();
    }

    pub fn start_edit_content(&self, content: &Content) {
        self.content.start_edit(content);
    }

    /// Saving content refreshes the modules it is listed under
    pub async fn submit_content(&self) -> SubmitStatus {
        let status = self.content.submit().await;
        if let SubmitStatus::Saved(_) = status {
            self.modules.list.refresh().await;
        }
        status
    }

    pub async fn delete_content(&self, content_id: &RecordId) -> bool {
        let deleted = self.content_list.delete(content_id).await;
        if deleted {
            self.modules.list.refresh().await;
        }
        deleted
    }
}

pub fn modules(ctx: &AppContext, course_id: &RecordId) -> ModulesScreen {
    ModulesScreen {
        modules: ScreenSpec::new(
            endpoints::MODULES,
            RefreshStrategy::Reload,
            FormSchema::new().text("moduleName", "Module name"),
            "modules",
            "Module",
        )
        .params(&[("courseId", course_id)])
        .build(ctx),
        content: Rc::new(FormController::new(
            ctx.client.clone(),
            ctx.notification.clone(),
            endpoints::CONTENTS,
            FormSchema::new().text("contentName", "Content name"),
            "Content",
        )),
        content_list: list_only(ctx, endpoints::CONTENTS, RefreshStrategy::Optimistic, "content"),
    }
}

// ============================================================================
// WEBSITE
// ============================================================================

pub fn mentors(ctx: &AppContext) -> ResourceScreen<Mentor> {
    ScreenSpec::new(
        endpoints::MENTORS,
        RefreshStrategy::Reload,
        FormSchema::new()
            .text("name", "Name")
            .text("qualification", "Qualification")
            .text("company", "Company")
            .file("photo", "Photo", true)
            .multipart(),
        "mentors",
        "Mentor",
    )
    .build(ctx)
}

pub fn project_mentors(ctx: &AppContext) -> ResourceScreen<ProjectMentor> {
    ScreenSpec::new(
        endpoints::PROJECT_MENTORS,
        RefreshStrategy::Reload,
        FormSchema::new()
            .text("email", "Email")
            .text("mentorName", "Mentor name")
            .text("password", "Password")
            .text("courseId", "Course"),
        "project mentors",
        "Project mentor",
    )
    .build(ctx)
}

pub fn testimonials(ctx: &AppContext) -> ResourceScreen<Testimonial> {
    ScreenSpec::new(
        endpoints::TESTIMONIALS,
        RefreshStrategy::Reload,
        FormSchema::new()
            .text("name", "Name")
            .text("collageName", "College name")
            .text("review", "Review")
            .number("stars", "Stars")
            .file("collageLogo", "College logo", true)
            .rule(Rule::Range {
                field: "stars",
                min: 1.0,
                max: 5.0,
                message: "Stars must be between 1 and 5.",
            })
            .multipart(),
        "testimonials",
        "Testimonial",
    )
    .build(ctx)
}

pub fn faqs(ctx: &AppContext) -> ResourceScreen<Faq> {
    ScreenSpec::new(
        endpoints::FAQS,
        RefreshStrategy::Optimistic,
        FormSchema::new()
            .text("question", "Question")
            .text("answer", "Answer")
            .rule(Rule::EndsWith {
                field: "question",
                suffix: "?",
                message: "Question must end with a question mark.",
            }),
        "FAQs",
        "FAQ",
    )
    .build(ctx)
}

pub fn careers(ctx: &AppContext) -> ResourceScreen<JobPosting> {
    ScreenSpec::new(
        endpoints::JOB_POSTINGS,
        RefreshStrategy::Optimistic,
        FormSchema::new()
            .text("roleName", "Role")
            .text("jobDescription", "Description")
            .text("location", "Location")
            .text("type", "Type")
            .text("experience", "Experience")
            .text("responsibilities", "Responsibilities")
            .text("requirements", "Requirements")
            .text("applicationLink", "Application link"),
        "job postings",
        "Job posting",
    )
    .build(ctx)
}

pub fn contacts(ctx: &AppContext) -> Rc<ListController<Contact>> {
    Rc::new(
        list_only(ctx, endpoints::CONTACTS, RefreshStrategy::Optimistic, "contacts")
            .with_paging(PageMode::Client, ctx.config.users_page_size),
    )
}

/// Pricing plans, plus the feature list of the plan picked by the admin
pub struct PricingScreen {
    pub plans: ResourceScreen<PricingPlan>,
    pub features: ResourceScreen<PricingFeature>,
    selected: RefCell<Option<PricingPlan>>,
}

impl PricingScreen {
    pub async fn mount(&self) -> bool {
        self.plans.mount().await
    }

    pub fn selected_plan(&self) -> Option<PricingPlan> {
        self.selected.borrow().clone()
    }

    pub async fn select_plan(&self, plan: &PricingPlan) -> bool {
        *self.selected.borrow_mut() = Some(plan.clone());
        self.features.list.set_param("pricingId", plan.id());
        self.features.form.set_param("pricingId", plan.id());
        self.features.list.load().await
    }
}

pub fn pricing(ctx: &AppContext) -> PricingScreen {
    PricingScreen {
        plans: ScreenSpec::new(
            endpoints::PRICING_PLANS,
            RefreshStrategy::Reload,
            FormSchema::new()
                .text("pricingName", "Plan name")
                .number("price", "Price"),
            "pricing plans",
            "Pricing plan",
        )
        .build(ctx),
        features: ScreenSpec::new(
            endpoints::PRICING_FEATURES,
            RefreshStrategy::Reload,
            FormSchema::new()
                .text("name", "Feature")
                .boolean("isIncluded", "Included"),
            "features",
            "Feature",
        )
        .build(ctx),
        selected: RefCell::new(None),
    }
}

// ============================================================================
// CONTROL CENTER
// ============================================================================

pub fn bounties(ctx: &AppContext) -> ResourceScreen<Bounty> {
    ScreenSpec::new(
        endpoints::BOUNTIES,
        RefreshStrategy::Optimistic,
        FormSchema::new()
            .text("name", "Name")
            .text("description", "Description")
            .text("link", "Link")
            .text("courseId", "Course")
            .number("amount", "Amount")
            .number("slots", "Slots")
            .text("type", "Type")
            .datetime("expiryDate", "Expiry date"),
        "bounties",
        "Bounty",
    )
    .build(ctx)
}

pub struct SubmissionsScreen {
    pub bounty_id: RecordId,
    pub list: Rc<ListController<BountySubmission>>,
    client: crate::services::ApiClient,
    notification: Rc<crate::state::Notification>,
}

impl SubmissionsScreen {
    pub async fn mount(&self) -> bool {
        self.list.load().await
    }

    pub async fn set_status(&self, submission: &BountySubmission, state: SubmissionState) -> bool {
        match bounty_service::verify_submission(&self.client, submission, state).await {
            Ok(envelope) => {
                self.list.refresh().await;
                self.notification.show(
                    envelope
                        .message
                        .unwrap_or_else(|| "Submission status updated.".to_string()),
                );
                true
            }
            Err(error) => {
                log::error!("❌ [BOUNTY] Status update failed: {}", error);
                self.notification
                    .show(error.user_message("Failed to update submission status."));
                false
            }
        }
    }
}

pub fn bounty_submissions(ctx: &AppContext, bounty_id: &RecordId) -> SubmissionsScreen {
    SubmissionsScreen {
        bounty_id: bounty_id.clone(),
        list: Rc::new(
            list_only(ctx, endpoints::BOUNTY_SUBMISSIONS, RefreshStrategy::Reload, "submissions")
                .with_param("bountyId", bounty_id),
        ),
        client: ctx.client.clone(),
        notification: ctx.notification.clone(),
    }
}

pub fn bounty_applications(ctx: &AppContext, bounty_id: &RecordId) -> Rc<ListController<BountyApplication>> {
    Rc::new(
        list_only(ctx, endpoints::BOUNTY_APPLICATIONS, RefreshStrategy::Reload, "applications")
            .with_param("bountyId", bounty_id),
    )
}

pub struct QuestionsHubScreen {
    pub list: Rc<ListController<UserQuestion>>,
    client: crate::services::ApiClient,
    notification: Rc<crate::state::Notification>,
}

impl QuestionsHubScreen {
    pub async fn mount(&self) -> bool {
        self.list.load().await
    }

    /// Flip the verified flag on the server and in the list
    pub async fn toggle_verified(&self, id: &RecordId) -> bool {
        match question_service::verify_question(&self.client, id).await {
            Ok(envelope) => {
                if let Some(mut question) = self.list.find(id) {
                    question.is_verified = !question.is_verified;
                    self.list.apply_mutation(MutationKind::Updated, Some(question)).await;
                }
                self.notification.show(
                    envelope
                        .message
                        .unwrap_or_else(|| "Question updated.".to_string()),
                );
                true
            }
            Err(error) => {
                log::error!("❌ [QUESTIONS] Verify failed: {}", error);
                self.notification.show(error.user_message("Failed to verify question."));
                false
            }
        }
    }

    pub async fn delete(&self, id: &RecordId) -> bool {
        self.list.delete(id).await
    }
}

pub fn questions_hub(ctx: &AppContext) -> QuestionsHubScreen {
    QuestionsHubScreen {
        list: Rc::new(
            list_only(ctx, endpoints::USER_QUESTIONS, RefreshStrategy::Optimistic, "questions")
                .with_paging(PageMode::Client, ctx.config.users_page_size),
        ),
        client: ctx.client.clone(),
        notification: ctx.notification.clone(),
    }
}

// ============================================================================
// SALES
// ============================================================================

pub struct SalesScreen {
    pub sales: ResourceScreen<Sale>,
    pub pricings: Rc<ListController<CoursePricing>>,
    filter: Cell<PaymentFilter>,
    client: crate::services::ApiClient,
    notification: Rc<crate::state::Notification>,
}

impl SalesScreen {
    pub async fn mount(&self) -> bool {
        let loaded = self.sales.mount().await;
        self.pricings.refresh().await;
        loaded
    }

    /// New email search; restarts from page 1
    pub async fn search(&self, email: &str) -> bool {
        self.sales.list.set_search(email);
        self.sales.list.load().await
    }

    pub fn filter(&self) -> PaymentFilter {
        self.filter.get()
    }

    pub fn set_filter(&self, filter: PaymentFilter) {
        self.filter.set(filter);
    }

    /// Rows of the current page that pass the paid/unpaid toggle
    pub fn visible(&self) -> Vec<Sale> {
        let filter = self.filter.get();
        self.sales.list.page_rows(|sale| filter.accepts(sale))
    }

    /// Local search over the loaded page
    pub fn matching(&self, term: &str) -> Vec<Sale> {
        let filter = self.filter.get();
        self.sales.list.filtered(|sale| {
            filter.accepts(sale) && any_field_matches(&[sale.email.as_str(), sale.course_name.as_str()], term)
        })
    }

    pub async fn remove_access(&self, sale: &Sale) -> bool {
        match sales_service::remove_course_access(&self.client, sale).await {
            Ok(envelope) => {
                self.sales.list.refresh().await;
                self.notification.show(
                    envelope
                        .message
                        .unwrap_or_else(|| "Course access removed.".to_string()),
                );
                true
            }
            Err(error) => {
                log::error!("❌ [SALES] Removing access failed: {}", error);
                self.notification.show(error.user_message("Failed to remove course access."));
                false
            }
        }
    }
}

pub fn sales(ctx: &AppContext) -> SalesScreen {
    SalesScreen {
        sales: ScreenSpec::new(
            endpoints::SALES,
            RefreshStrategy::Reload,
            FormSchema::new()
                .text("email", "Email")
                .optional_text("phoneNumber", "Phone number")
                .text("courseId", "Course")
                .optional_number("amount", "Amount")
                .optional_text("priceId", "Price")
                .boolean("isFullPayment", "Full payment"),
            "sales",
            "Sale",
        )
        .paging(
            PageMode::Server { search_param: Some("email") },
            ctx.config.sales_page_size,
        )
        .build(ctx),
        pricings: Rc::new(list_only(
            ctx,
            endpoints::COURSE_PRICINGS,
            RefreshStrategy::Reload,
            "course pricings",
        )),
        filter: Cell::new(PaymentFilter::default()),
        client: ctx.client.clone(),
        notification: ctx.notification.clone(),
    }
}

// ============================================================================
// DASHBOARD AND SHARED LOOKUPS
// ============================================================================

pub struct DashboardScreen {
    pub purchases: Rc<ListController<Purchase>>,
}

impl DashboardScreen {
    pub async fn mount(&self) -> bool {
        self.purchases.refresh().await
    }

    pub fn summary(&self) -> PurchaseSummary {
        aggregate(&self.purchases.items())
    }
}

pub fn dashboard(ctx: &AppContext) -> DashboardScreen {
    DashboardScreen {
        purchases: Rc::new(list_only(ctx, endpoints::PURCHASES, RefreshStrategy::Reload, "purchases")),
    }
}

/// Course names and mentors used by dropdowns across screens
pub struct Lookups {
    pub course_names: Rc<ListController<CourseName>>,
    pub mentors: Rc<ListController<Mentor>>,
}

impl Lookups {
    pub fn new(client: &crate::services::ApiClient, notification: &Rc<crate::state::Notification>) -> Self {
        Self {
            course_names: Rc::new(ListController::new(
                client.clone(),
                notification.clone(),
                endpoints::COURSE_NAMES,
                RefreshStrategy::Reload,
                "courses",
            )),
            mentors: Rc::new(ListController::new(
                client.clone(),
                notification.clone(),
                endpoints::MENTORS,
                RefreshStrategy::Reload,
                "mentors",
            )),
        }
    }

    /// Fetch whatever has not been fetched yet
    pub async fn ensure_loaded(&self) {
        if self.course_names.is_empty() {
            self.course_names.refresh().await;
        }
        if self.mentors.is_empty() {
            self.mentors.refresh().await;
        }
    }

    pub fn course_name(&self, id: &RecordId) -> Option<String> {
        self.course_names.find(id).map(|course| course.course_name)
    }

    pub fn clear(&self) {
        self.course_names.clear();
        self.mentors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::transport::{HttpMethod, RequestBody};
    use crate::testing::{shown, test_context, FakeTransport};
    use serde_json::json;

    fn context() -> (AppContext, Rc<FakeTransport>) {
        let transport = Rc::new(FakeTransport::new());
        (test_context(transport.clone()), transport)
    }

    #[tokio::test]
    async fn course_create_is_multipart_with_department() {
        let (ctx, transport) = context();
        let screen = courses(&ctx, &"d1".into());
        transport.reply(200, json!({ "departmentCourses": { "courses": [] } }));
        screen.mount().await;
        assert!(transport
            .last_request()
            .url
            .ends_with("/api/v1/courses/getCoursesByDeptId/d1"));

        transport.reply(201, json!({ "message": "Course added" }));
        screen.form.start_create();
        screen.form.set_field("courseName", FieldValue::text("Rust 101"));
        screen.form.set_field("courseDescription", FieldValue::text("Ownership first"));
        screen.form.set_field(
            "courseThumbnail",
            FieldValue::File(FileUpload::new("cover.png", "image/png", vec![1, 2, 3])),
        );

        assert_eq!(screen.form.submit().await, SubmitStatus::Saved(MutationKind::Created));

        let post = &transport.requests()[1];
        assert!(post.url.ends_with("/api/v1/courses/addNewCourse"));
        let RequestBody::Multipart(parts) = &post.body else {
            panic!("expected multipart body");
        };
        let names: Vec<&str> = parts.iter().map(|part| part.name()).collect();
        assert_eq!(names, vec!["courseName", "courseDescription", "courseThumbnail", "departmentId"]);
        // Reload strategy refetches the list
        assert_eq!(transport.requests().len(), 3);
    }

    #[tokio::test]
    async fn quiz_answers_are_edited_on_the_draft() {
        let (ctx, transport) = context();
        let screen = quiz(&ctx, &"t1".into(), Some("c1".into()));
        transport.reply(
            201,
            json!({ "question": { "id": "q1", "text": "2 + 2?", "answers": [{ "text": "4", "isCorrect": true }] } }),
        );

        screen.questions.form.start_create();
        screen.questions.form.set_field("text", FieldValue::text("2 + 2?"));
        screen.add_answer();
        screen.add_answer();
        screen.set_answer(0, "4", true);
        screen.set_answer(1, "5", false);
        screen.remove_answer(1);
        screen.remove_answer(7);
        screen.questions.form.submit().await;

        let post = transport.last_request();
        assert!(post.url.ends_with("/api/v1/quiz/addquiz/t1"));
        assert_eq!(
            post.body,
            RequestBody::Json(json!({ "text": "2 + 2?", "answers": [{ "text": "4", "isCorrect": true }] }))
        );
        let questions = screen.questions.list.items();
        assert_eq!(questions[0].id.as_str(), "q1");
        assert!(questions[0].answers[0].is_correct);
    }

    #[tokio::test]
    async fn saving_content_refreshes_modules() {
        let (ctx, transport) = context();
        let screen = modules(&ctx, &"c1".into());
        transport.reply(201, json!({ "message": "Content added" }));
        transport.reply(
            200,
            json!({ "allModules": [{ "id": "m1", "moduleName": "Basics", "contents": [{ "id": "x1", "contentName": "Intro" }] }] }),
        );

        screen.start_add_content(&"m1".into());
        screen.content.set_field("contentName", FieldValue::text("Intro"));
        assert_eq!(screen.submit_content().await, SubmitStatus::Saved(MutationKind::Created));

        let requests = transport.requests();
        assert!(requests[0].url.ends_with("/api/v1/curriculum/addContent/m1"));
        assert!(requests[1].url.ends_with("/api/v1/curriculum/getAllModules/c1"));
        assert_eq!(screen.modules.list.items()[0].contents[0].content_name, "Intro");
        assert_eq!(shown(&ctx).as_deref(), Some("Content added"));
    }

    #[tokio::test]
    async fn deleting_content_refreshes_modules() {
        let (ctx, transport) = context();
        let screen = modules(&ctx, &"c1".into());
        transport.reply(200, json!({ "message": "Content deleted" }));
        transport.reply(200, json!({ "allModules": [] }));

        assert!(screen.delete_content(&"x1".into()).await);

        let requests = transport.requests();
        assert_eq!(requests[0].method, HttpMethod::Delete);
        assert!(requests[0].url.ends_with("/api/v1/curriculum/deleteContent/x1"));
        assert_eq!(requests[1].method, HttpMethod::Get);
        assert!(requests[1].url.ends_with("/api/v1/curriculum/getAllModules/c1"));
        assert_eq!(requests.len(), 2);
    }

    #[test]
    fn content_has_no_list_to_refetch() {
        let (ctx, _transport) = context();
        let screen = modules(&ctx, &"c1".into());
        assert_eq!(screen.content_list.strategy(), RefreshStrategy::Optimistic);
    }

    #[tokio::test]
    async fn selecting_a_plan_loads_its_features() {
        let (ctx, transport) = context();
        let screen = pricing(&ctx);
        transport.reply(200, json!({ "allpricings": [{ "pricingId": "p1", "name": "Pro", "price": "499" }] }));
        transport.reply(200, json!({ "features": [{ "id": "f1", "name": "Mentoring", "isIncluded": true }] }));

        screen.mount().await;
        let plan = screen.plans.list.items()[0].clone();
        assert_eq!(plan.price, 499.0);
        assert!(screen.select_plan(&plan).await);

        assert!(transport.last_request().url.ends_with("/api/v1/pricings/features/p1"));
        assert_eq!(screen.selected_plan(), Some(plan));
        assert_eq!(screen.features.list.items()[0].name, "Mentoring");
    }

    #[tokio::test]
    async fn bounty_expiry_is_sent_as_utc() {
        let (ctx, transport) = context();
        let screen = bounties(&ctx);
        transport.reply(
            201,
            json!({ "additional": { "_id": "b1", "name": "Fix docs", "amount": 50, "slots": 2 } }),
        );

        screen.form.start_create();
        for (name, value) in [
            ("name", "Fix docs"),
            ("description", "Typos"),
            ("link", "https://x"),
            ("courseId", "c1"),
            ("amount", "50"),
            ("slots", "2"),
            ("type", "DOCS"),
            ("expiryDate", "2025-03-01T18:30"),
        ] {
            screen.form.set_field(name, FieldValue::text(value));
        }
        screen.form.submit().await;

        let RequestBody::Json(body) = transport.last_request().body else {
            panic!("expected JSON body");
        };
        assert_eq!(body["expiryDate"], "2025-03-01T18:30:00.000Z");
        assert_eq!(body["amount"], 50);
        assert_eq!(screen.list.items()[0].id().as_str(), "b1");
    }

    #[tokio::test]
    async fn submission_status_update_refreshes_list() {
        let (ctx, transport) = context();
        let screen = bounty_submissions(&ctx, &"b1".into());
        transport.reply(200, json!({ "message": "Status updated" }));
        transport.reply(200, json!({ "additional": [{ "id": "s1", "status": "SUCCESSFUL" }] }));

        let submission = BountySubmission { id: "s1".into(), ..BountySubmission::default() };
        assert!(screen.set_status(&submission, SubmissionState::Successful).await);

        assert!(transport.last_request().url.ends_with("/api/v1/bounties/bounty/submissions/b1"));
        assert_eq!(screen.list.items()[0].status, SubmissionState::Successful);
        assert_eq!(shown(&ctx).as_deref(), Some("Status updated"));
    }

    #[tokio::test]
    async fn verifying_a_question_flips_it_locally() {
        let (ctx, transport) = context();
        let screen = questions_hub(&ctx);
        transport.reply(200, json!({ "additional": [{ "id": "u1", "question": "Why?", "isVerified": false }] }));
        transport.reply(200, json!({}));
        screen.mount().await;

        assert!(screen.toggle_verified(&"u1".into()).await);

        assert!(screen.list.items()[0].is_verified);
        assert_eq!(transport.requests().len(), 2);
        assert_eq!(transport.last_request().method, HttpMethod::Put);
        assert_eq!(shown(&ctx).as_deref(), Some("Question updated."));
    }

    #[tokio::test]
    async fn sales_search_filter_and_access_removal() {
        let (ctx, transport) = context();
        let screen = sales(&ctx);
        let page = json!({ "additional": { "totalCount": 2, "sales": [
            { "id": 1, "email": "a@x.io", "courseName": "Rust", "isFullPayment": true, "userId": "u1", "courseId": "c1" },
            { "id": 2, "email": "b@x.io", "courseName": "Go", "isFullPayment": false }
        ]}});
        transport.reply(200, page.clone());
        transport.reply(200, json!({ "additional": [] }));
        screen.mount().await;

        assert_eq!(screen.visible().len(), 1);
        screen.set_filter(screen.filter().toggled());
        assert_eq!(screen.visible()[0].email, "b@x.io");
        assert_eq!(screen.matching("rust").len(), 0);

        transport.reply(200, page.clone());
        screen.search("a@x.io").await;
        assert!(transport.last_request().url.ends_with("retired?page=1&email=a%40x.io"));

        transport.reply(200, json!({ "message": "Access removed" }));
        transport.reply(200, page);
        let sale = screen.sales.list.items()[0].clone();
        assert!(screen.remove_access(&sale).await);
        let requests = transport.requests();
        assert_eq!(requests[requests.len() - 2].method, HttpMethod::Delete);
        assert_eq!(shown(&ctx).as_deref(), Some("Access removed"));
    }

    #[tokio::test]
    async fn contacts_page_locally() {
        let (ctx, transport) = context();
        let rows: Vec<_> = (1..=12).map(|n| json!({ "id": n, "name": format!("C{}", n) })).collect();
        transport.reply(200, json!({ "allContacts": rows }));
        let list = contacts(&ctx);
        list.load().await;

        assert_eq!(list.page_rows(|_| true).len(), 10);
        assert!(list.next_page().await);
        assert_eq!(list.page_rows(|_| true).len(), 2);
    }

    #[tokio::test]
    async fn lookups_fetch_once() {
        let (ctx, transport) = context();
        transport.reply(200, json!({ "allCourses": [{ "id": "c1", "courseName": "Rust" }] }));
        transport.reply(200, json!({ "mentors": [{ "id": "m1", "name": "Ada" }] }));

        ctx.lookups.ensure_loaded().await;
        ctx.lookups.ensure_loaded().await;

        assert_eq!(transport.requests().len(), 2);
        assert_eq!(ctx.lookups.course_name(&"c1".into()).as_deref(), Some("Rust"));
        ctx.lookups.clear();
        assert!(ctx.lookups.mentors.is_empty());
    }
}
