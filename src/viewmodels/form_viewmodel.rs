// ============================================================================
// FORM VIEWMODEL - Create-or-edit drafts, validation and submit
// ============================================================================
// A form is either creating (no `editing_id`, submit POSTs) or editing
// (`editing_id` captured by `start_edit`, submit PUTs to that id). Validation
// runs before anything touches the network. On failure the draft stays as
// the admin left it.
// ============================================================================

use serde_json::{Map, Value};
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

use super::list_viewmodel::{ListController, MutationKind};
use crate::models::bounty::expiry_to_iso;
use crate::models::{Draft, Envelope, FieldValue, RecordId, Resource};
use crate::services::api_client::{ApiClient, ApiRequest};
use crate::services::endpoints::{Endpoint, ResourceEndpoints};
use crate::services::transport::{Part, RequestBody};
use crate::state::{Notification, ReactiveState};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Bool,
    File,
    /// `datetime-local` input, sent as an ISO-8601 UTC string
    DateTime,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    EndsWith {
        field: &'static str,
        suffix: &'static str,
        message: &'static str,
    },
    Range {
        field: &'static str,
        min: f64,
        max: f64,
        message: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyEncoding {
    /// Multipart only when a file is attached
    #[default]
    Auto,
    /// Backend reads form-data even without a file
    AlwaysMultipart,
}

/// Fields, rules and wire encoding of one resource form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSchema {
    pub fields: Vec<FieldSpec>,
    pub rules: Vec<Rule>,
    pub encoding: BodyEncoding,
}

impl FormSchema {
    pub fn new() -> Self {
        Self::default()
    }

    fn field(mut self, name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> Self {
        self.fields.push(FieldSpec { name, label, kind, required });
        self
    }

    pub fn text(self, name: &'static str, label: &'static str) -> Self {
        self.field(name, label, FieldKind::Text, true)
    }

    pub fn optional_text(self, name: &'static str, label: &'static str) -> Self {
        self.field(name, label, FieldKind::Text, false)
    }

    pub fn number(self, name: &'static str, label: &'static str) -> Self {
        self.field(name, label, FieldKind::Number, true)
    }

    pub fn optional_number(self, name: &'static str, label: &'static str) -> Self {
        self.field(name, label, FieldKind::Number, false)
    }

    pub fn boolean(self, name: &'static str, label: &'static str) -> Self {
        self.field(name, label, FieldKind::Bool, false)
    }

    /// Required files are only demanded when creating
    pub fn file(self, name: &'static str, label: &'static str, required: bool) -> Self {
        self.field(name, label, FieldKind::File, required)
    }

    pub fn datetime(self, name: &'static str, label: &'static str) -> Self {
        self.field(name, label, FieldKind::DateTime, true)
    }

    pub fn json(self, name: &'static str, label: &'static str) -> Self {
        self.field(name, label, FieldKind::Json, false)
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn multipart(mut self) -> Self {
        self.encoding = BodyEncoding::AlwaysMultipart;
        self
    }

    pub fn spec(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn validate(&self, draft: &Draft) -> Result<(), ValidationError> {
        for spec in &self.fields {
            let value = draft.get(spec.name).unwrap_or(&FieldValue::Null);
            let required = spec.required && !(spec.kind == FieldKind::File && draft.is_editing());
            if required && value.is_blank() {
                return Err(ValidationError::new(format!("{} is required.", spec.label)));
            }
            if spec.kind == FieldKind::Number && !value.is_blank() && value.as_number().is_none() {
                return Err(ValidationError::new(format!("{} must be a number.", spec.label)));
            }
        }

        for rule in &self.rules {
            match rule {
                Rule::EndsWith { field, suffix, message } => {
                    let text = draft.get(field).and_then(FieldValue::as_text).unwrap_or("");
                    if !text.trim_end().ends_with(suffix) {
                        return Err(ValidationError::new(*message));
                    }
                }
                Rule::Range { field, min, max, message } => {
                    if let Some(n) = draft.get(field).and_then(FieldValue::as_number) {
                        if n < *min || n > *max {
                            return Err(ValidationError::new(*message));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Normalise a draft value into what goes on the wire for this field
    fn wire_value(&self, name: &str, value: &FieldValue) -> FieldValue {
        match self.spec(name).map(|spec| spec.kind) {
            Some(FieldKind::Number) => value
                .as_number()
                .map(FieldValue::Number)
                .unwrap_or(FieldValue::Null),
            Some(FieldKind::DateTime) => match value.as_text() {
                Some(text) if !text.trim().is_empty() => FieldValue::Text(expiry_to_iso(text)),
                _ => FieldValue::Null,
            },
            _ => value.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStatus {
    Saved(MutationKind),
    Invalid(String),
    Failed(String),
    /// A submit is already in flight
    Busy,
}

pub struct FormController<R: Resource> {
    client: ApiClient,
    notification: Rc<Notification>,
    endpoints: ResourceEndpoints,
    schema: FormSchema,
    label: &'static str,
    list: Option<Rc<ListController<R>>>,
    params: RefCell<Vec<(String, String)>>,
    fixed: RefCell<Vec<(String, Value)>>,
    original: RefCell<Option<Value>>,
    draft: ReactiveState<Draft>,
    open: ReactiveState<bool>,
    submitting: ReactiveState<bool>,
}

impl<R: Resource> FormController<R> {
    pub fn new(
        client: ApiClient,
        notification: Rc<Notification>,
        endpoints: ResourceEndpoints,
        schema: FormSchema,
        label: &'static str,
    ) -> Self {
        Self {
            client,
            notification,
            endpoints,
            schema,
            label,
            list: None,
            params: RefCell::new(Vec::new()),
            fixed: RefCell::new(Vec::new()),
            original: RefCell::new(None),
            draft: ReactiveState::new(Draft::default()),
            open: ReactiveState::new(false),
            submitting: ReactiveState::new(false),
        }
    }

    /// List that receives saved records
    pub fn with_list(mut self, list: Rc<ListController<R>>) -> Self {
        self.list = Some(list);
        self
    }

    /// Path parameter for the create endpoint (`:courseId`, `:topicId`, ...)
    pub fn with_param(self, name: &str, value: impl ToString) -> Self {
        self.set_param(name, value);
        self
    }

    pub fn set_param(&self, name: &str, value: impl ToString) {
        let mut params = self.params.borrow_mut();
        params.retain(|(key, _)| key != name);
        params.push((name.to_string(), value.to_string()));
    }

    /// Field merged into every body, e.g. the `departmentId` from the route
    pub fn with_fixed(self, name: &str, value: impl Into<Value>) -> Self {
        self.fixed.borrow_mut().push((name.to_string(), value.into()));
        self
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn draft(&self) -> Draft {
        self.draft.get()
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) -> usize {
        self.draft.subscribe(callback)
    }

    pub fn start_create(&self) {
        *self.original.borrow_mut() = None;
        self.draft.set(Draft::default());
        self.open.set(true);
    }

    /// Copy the record's fields into the draft. File inputs start empty.
    pub fn start_edit(&self, record: &R) {
        let json = serde_json::to_value(record).unwrap_or(Value::Null);
        let mut draft = Draft {
            editing_id: Some(record.id().clone()),
            ..Draft::default()
        };
        for spec in &self.schema.fields {
            let value = match (spec.kind, json.get(spec.name)) {
                (FieldKind::File, _) | (_, None) => FieldValue::Null,
                (FieldKind::DateTime, Some(Value::String(date))) => {
                    FieldValue::Text(date.chars().take(16).collect())
                }
                (_, Some(value)) => FieldValue::from_json(value),
            };
            draft.set(spec.name, value);
        }
        *self.original.borrow_mut() = Some(json);
        self.draft.set(draft);
        self.open.set(true);
    }

    pub fn set_field(&self, name: &str, value: FieldValue) {
        self.draft.update(|draft| draft.set(name, value));
    }

    /// Edit a draft field in place (answer lists and other structured values)
    pub fn update_draft<F: FnOnce(&mut Draft)>(&self, updater: F) {
        self.draft.update(updater);
    }

    pub fn cancel(&self) {
        self.reset();
    }

    fn reset(&self) {
        *self.original.borrow_mut() = None;
        self.draft.set(Draft::default());
        self.open.set(false);
    }

    fn json_body(&self, draft: &Draft) -> Map<String, Value> {
        let mut body = Map::new();
        for spec in &self.schema.fields {
            let Some(value) = draft.get(spec.name) else { continue };
            match self.schema.wire_value(spec.name, value).to_json() {
                Some(Value::Null) | None => {}
                Some(json) => {
                    body.insert(spec.name.to_string(), json);
                }
            }
        }
        for (name, value) in self.fixed.borrow().iter() {
            body.insert(name.clone(), value.clone());
        }
        body
    }

    fn multipart_body(&self, draft: &Draft) -> Vec<Part> {
        let mut parts = Vec::new();
        for spec in &self.schema.fields {
            let Some(value) = draft.get(spec.name) else { continue };
            match self.schema.wire_value(spec.name, value) {
                FieldValue::File(file) => parts.push(Part::File {
                    name: spec.name.to_string(),
                    file,
                }),
                other => {
                    if let Some(text) = other.to_form_text() {
                        parts.push(Part::Text { name: spec.name.to_string(), value: text });
                    }
                }
            }
        }
        for (name, value) in self.fixed.borrow().iter() {
            let text = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            parts.push(Part::Text { name: name.clone(), value: text });
        }
        parts
    }

    fn build_body(&self, draft: &Draft) -> RequestBody {
        if self.schema.encoding == BodyEncoding::AlwaysMultipart || draft.has_file() {
            RequestBody::Multipart(self.multipart_body(draft))
        } else {
            RequestBody::Json(Value::Object(self.json_body(draft)))
        }
    }

    /// The saved record: from the response if it carries one, otherwise the
    /// edited record with the draft merged over it.
    fn saved_record(&self, envelope: &Envelope, endpoint: &Endpoint, draft: &Draft) -> Option<R> {
        if let Some(record) = endpoint
            .pointer
            .and_then(|pointer| envelope.record::<R>(pointer))
            .filter(|record| !record.id().is_empty())
        {
            return Some(record);
        }

        let id = match &draft.editing_id {
            Some(id) => id.clone(),
            None => RecordId::from(envelope.text(self.endpoints.created_id?)?),
        };
        let mut merged = match self.original.borrow().clone() {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        merged.extend(self.json_body(draft));
        merged.insert("id".to_string(), Value::String(id.to_string()));
        serde_json::from_value(Value::Object(merged)).ok()
    }

    pub async fn submit(&self) -> SubmitStatus {
        if self.is_submitting() {
            return SubmitStatus::Busy;
        }
        let draft = self.draft.get();

        if let Err(error) = self.schema.validate(&draft) {
            log::warn!("⚠️ [FORM] {} draft rejected: {}", self.label, error);
            self.notification.show(error.message.clone());
            return SubmitStatus::Invalid(error.message);
        }

        let (kind, endpoint) = match &draft.editing_id {
            Some(_) => (MutationKind::Updated, self.endpoints.update),
            None => (MutationKind::Created, self.endpoints.create),
        };
        let Some(endpoint) = endpoint else {
            let message = format!("{} cannot be saved here.", self.label);
            self.notification.show(message.clone());
            return SubmitStatus::Failed(message);
        };

        let mut request = match kind {
            MutationKind::Updated => ApiRequest::put(endpoint.path),
            MutationKind::Created => ApiRequest::post(endpoint.path),
        }
        .params(self.params.borrow().iter())
        .body(self.build_body(&draft));
        if let Some(id) = &draft.editing_id {
            // Added last so route params never shadow the record id
            request = request.param("id", id);
        }

        log::info!("💾 [FORM] Saving {} ({:?})", self.label, kind);
        self.submitting.set(true);
        let result = self.client.send(request).await;
        self.submitting.set(false);

        match result {
            Ok(envelope) => {
                let record = self.saved_record(&envelope, &endpoint, &draft);
                if let Some(list) = &self.list {
                    list.apply_mutation(kind, record).await;
                }
                let verb = match kind {
                    MutationKind::Created => "created",
                    MutationKind::Updated => "updated",
                };
                self.notification.show(
                    envelope
                        .message
                        .unwrap_or_else(|| format!("{} {} successfully.", self.label, verb)),
                );
                self.reset();
                log::info!("✅ [FORM] {} {}", self.label, verb);
                SubmitStatus::Saved(kind)
            }
            Err(error) => {
                log::error!("❌ [FORM] Saving {} failed: {}", self.label, error);
                let message =
                    error.user_message(&format!("Failed to save {}. Please try again.", self.label));
                self.notification.show(message.clone());
                SubmitStatus::Failed(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Department, Faq, FileUpload, Mentor, Project, Testimonial};
    use crate::services::endpoints::{DEPARTMENTS, FAQS, MENTORS, PROJECTS, TESTIMONIALS};
    use crate::services::transport::HttpMethod;
    use crate::testing::Harness;
    use crate::viewmodels::list_viewmodel::RefreshStrategy;
    use serde_json::json;

    fn faq_form(harness: &Harness, list: Rc<ListController<Faq>>) -> FormController<Faq> {
        let schema = FormSchema::new()
            .text("question", "Question")
            .text("answer", "Answer")
            .rule(Rule::EndsWith {
                field: "question",
                suffix: "?",
                message: "Question must end with a question mark.",
            });
        FormController::new(harness.client.clone(), harness.notification.clone(), FAQS, schema, "FAQ")
            .with_list(list)
    }

    fn faq_list(harness: &Harness) -> Rc<ListController<Faq>> {
        Rc::new(ListController::new(
            harness.client.clone(),
            harness.notification.clone(),
            FAQS,
            RefreshStrategy::Optimistic,
            "FAQs",
        ))
    }

    #[tokio::test]
    async fn add_department_posts_and_refreshes() {
        let harness = Harness::signed_in();
        let list = Rc::new(ListController::<Department>::new(
            harness.client.clone(),
            harness.notification.clone(),
            DEPARTMENTS,
            RefreshStrategy::Reload,
            "departments",
        ));
        let form = FormController::new(
            harness.client.clone(),
            harness.notification.clone(),
            DEPARTMENTS,
            FormSchema::new().text("departmentName", "Department name"),
            "Department",
        )
        .with_list(list.clone());

        harness.transport.reply(201, json!({ "message": "Department created successfully" }));
        harness.transport.reply(
            200,
            json!({ "message": "ok", "alldepartments": [{ "id": 1, "departmentName": "Engineering" }] }),
        );

        form.start_create();
        form.set_field("departmentName", FieldValue::text("Engineering"));
        let status = form.submit().await;

        assert_eq!(status, SubmitStatus::Saved(MutationKind::Created));
        let post = &harness.transport.requests()[0];
        assert_eq!(post.method, HttpMethod::Post);
        assert!(post.url.ends_with("/api/v1/departments/createDepartment"));
        assert_eq!(post.body, RequestBody::Json(json!({ "departmentName": "Engineering" })));
        assert_eq!(post.header("Content-Type"), Some("application/json"));

        assert_eq!(list.items()[0].department_name, "Engineering");
        assert_eq!(harness.message().as_deref(), Some("Department created successfully"));
        assert!(!form.is_open());
        assert_eq!(form.draft(), Draft::default());
    }

    #[tokio::test]
    async fn edit_mentor_with_photo_sends_multipart_put() {
        let harness = Harness::signed_in();
        let list = Rc::new(ListController::<Mentor>::new(
            harness.client.clone(),
            harness.notification.clone(),
            MENTORS,
            RefreshStrategy::Reload,
            "mentors",
        ));
        let form = FormController::new(
            harness.client.clone(),
            harness.notification.clone(),
            MENTORS,
            FormSchema::new()
                .text("name", "Name")
                .text("qualification", "Qualification")
                .text("company", "Company")
                .file("photo", "Photo", true)
                .multipart(),
            "Mentor",
        )
        .with_list(list.clone());

        harness.transport.reply(200, json!({ "message": "Mentor updated" }));
        harness.transport.reply(
            200,
            json!({ "mentors": [{ "id": "m7", "name": "Grace", "qualification": "PhD", "company": "Navy" }] }),
        );

        let mentor = Mentor {
            id: "m7".into(),
            name: "Grace".into(),
            qualification: "MSc".into(),
            company: "Navy".into(),
            photo: Some("https://cdn/grace.png".into()),
        };
        form.start_edit(&mentor);
        assert_eq!(form.draft().get("photo"), Some(&FieldValue::Null));

        form.set_field("qualification", FieldValue::text("PhD"));
        form.set_field(
            "photo",
            FieldValue::File(FileUpload::new("grace.jpg", "image/jpeg", vec![0xff, 0xd8])),
        );
        assert_eq!(form.draft().file_display_name("photo"), Some("grace.jpg"));

        assert_eq!(form.submit().await, SubmitStatus::Saved(MutationKind::Updated));

        let put = &harness.transport.requests()[0];
        assert_eq!(put.method, HttpMethod::Put);
        assert!(put.url.ends_with("/api/v1/mentors/updateMentor/m7"));
        assert_eq!(put.header("Content-Type"), Some("multipart/form-data"));
        let RequestBody::Multipart(parts) = &put.body else {
            panic!("expected multipart body");
        };
        let names: Vec<&str> = parts.iter().map(Part::name).collect();
        assert_eq!(names, vec!["name", "qualification", "company", "photo"]);
        assert!(matches!(
            &parts[3],
            Part::File { file, .. } if file.bytes == vec![0xff, 0xd8]
        ));
        assert_eq!(list.items()[0].qualification, "PhD");
    }

    #[tokio::test]
    async fn faq_without_question_mark_never_hits_network() {
        let harness = Harness::signed_in();
        let form = faq_form(&harness, faq_list(&harness));

        form.start_create();
        form.set_field("question", FieldValue::text("What is Rust"));
        form.set_field("answer", FieldValue::text("A language"));
        let status = form.submit().await;

        assert_eq!(
            status,
            SubmitStatus::Invalid("Question must end with a question mark.".to_string())
        );
        assert!(harness.transport.requests().is_empty());
        assert_eq!(
            harness.message().as_deref(),
            Some("Question must end with a question mark.")
        );
        assert!(form.is_open());
    }

    #[tokio::test]
    async fn created_faq_takes_id_from_response() {
        let harness = Harness::signed_in();
        let list = faq_list(&harness);
        let form = faq_form(&harness, list.clone());
        harness.transport.reply(201, json!({ "id": 31, "message": "FAQ created" }));

        form.start_create();
        form.set_field("question", FieldValue::text("Is it fast?"));
        form.set_field("answer", FieldValue::text("Yes"));
        form.submit().await;

        assert_eq!(
            list.items(),
            vec![Faq { id: "31".into(), question: "Is it fast?".into(), answer: "Yes".into() }]
        );
        // Optimistic: no refetch
        assert_eq!(harness.transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn update_goes_to_captured_id_even_if_list_changes() {
        let harness = Harness::signed_in();
        let list = faq_list(&harness);
        let form = faq_form(&harness, list.clone());
        harness.transport.reply(200, json!({ "message": "FAQ updated" }));

        let faq = Faq { id: "f1".into(), question: "Old?".into(), answer: "a".into() };
        form.start_edit(&faq);
        form.set_field("question", FieldValue::text("New?"));
        form.submit().await;

        let put = harness.transport.last_request();
        assert_eq!(put.method, HttpMethod::Put);
        assert!(put.url.ends_with("/api/v1/faqs/updateFAQ/f1"));
        assert_eq!(put.body, RequestBody::Json(json!({ "question": "New?", "answer": "a" })));
    }

    #[tokio::test]
    async fn server_rejection_keeps_draft_and_shows_field_error() {
        let harness = Harness::signed_in();
        let form = faq_form(&harness, faq_list(&harness));
        harness.transport.reply(
            422,
            json!({ "message": "Validation failed", "errors": [{ "message": "Answer is too short" }] }),
        );

        form.start_create();
        form.set_field("question", FieldValue::text("Why?"));
        form.set_field("answer", FieldValue::text("b"));
        let status = form.submit().await;

        assert_eq!(status, SubmitStatus::Failed("Answer is too short".to_string()));
        assert!(form.is_open());
        assert_eq!(form.draft().get("answer"), Some(&FieldValue::text("b")));
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn generic_failure_uses_fallback_message() {
        let harness = Harness::signed_in();
        let form = faq_form(&harness, faq_list(&harness));
        harness.transport.fail("offline");

        form.start_create();
        form.set_field("question", FieldValue::text("Why?"));
        form.set_field("answer", FieldValue::text("Because"));

        assert_eq!(
            form.submit().await,
            SubmitStatus::Failed("Failed to save FAQ. Please try again.".to_string())
        );
    }

    #[tokio::test]
    async fn project_create_reads_record_from_body_root() {
        let harness = Harness::signed_in();
        let list = Rc::new(ListController::<Project>::new(
            harness.client.clone(),
            harness.notification.clone(),
            PROJECTS,
            RefreshStrategy::Optimistic,
            "projects",
        ));
        let form = FormController::new(
            harness.client.clone(),
            harness.notification.clone(),
            PROJECTS,
            FormSchema::new().text("projectName", "Project name").text("projectLink", "Project link"),
            "Project",
        )
        .with_list(list.clone())
        .with_param("courseId", "c1");
        harness
            .transport
            .reply(201, json!({ "id": "p1", "projectName": "CLI", "projectLink": "https://x" }));

        form.start_create();
        form.set_field("projectName", FieldValue::text("CLI"));
        form.set_field("projectLink", FieldValue::text("https://x"));
        form.submit().await;

        assert!(harness
            .transport
            .last_request()
            .url
            .ends_with("/api/v1/courseProjects/createProject/c1"));
        assert_eq!(list.items()[0].id.as_str(), "p1");
    }

    #[tokio::test]
    async fn testimonial_stars_out_of_range_are_rejected() {
        let harness = Harness::signed_in();
        let form: FormController<Testimonial> = FormController::new(
            harness.client.clone(),
            harness.notification.clone(),
            TESTIMONIALS,
            FormSchema::new()
                .text("name", "Name")
                .number("stars", "Stars")
                .rule(Rule::Range {
                    field: "stars",
                    min: 1.0,
                    max: 5.0,
                    message: "Stars must be between 1 and 5.",
                })
                .multipart(),
            "Testimonial",
        );

        form.start_create();
        form.set_field("name", FieldValue::text("Lin"));
        form.set_field("stars", FieldValue::text("7"));

        assert_eq!(
            form.submit().await,
            SubmitStatus::Invalid("Stars must be between 1 and 5.".to_string())
        );

        form.set_field("stars", FieldValue::text("many"));
        assert_eq!(
            form.submit().await,
            SubmitStatus::Invalid("Stars must be a number.".to_string())
        );
        assert!(harness.transport.requests().is_empty());
    }

    #[test]
    fn required_file_is_optional_when_editing() {
        let schema = FormSchema::new().text("name", "Name").file("photo", "Photo", true);
        let mut draft = Draft::default();
        draft.set("name", FieldValue::text("Ada"));

        assert_eq!(
            schema.validate(&draft),
            Err(ValidationError { message: "Photo is required.".into() })
        );

        draft.editing_id = Some("m1".into());
        assert_eq!(schema.validate(&draft), Ok(()));
    }

    #[test]
    fn fixed_fields_join_json_body() {
        let harness = Harness::signed_in();
        let form: FormController<Department> = FormController::new(
            harness.client.clone(),
            harness.notification.clone(),
            DEPARTMENTS,
            FormSchema::new().text("courseName", "Course name").optional_number("courseCount", "Count"),
            "Course",
        )
        .with_fixed("departmentId", "d1");
        let mut draft = Draft::default();
        draft.set("courseName", FieldValue::text("Rust"));
        draft.set("courseCount", FieldValue::text("12"));

        assert_eq!(
            form.build_body(&draft),
            RequestBody::Json(json!({ "courseName": "Rust", "courseCount": 12, "departmentId": "d1" }))
        );
    }
}
