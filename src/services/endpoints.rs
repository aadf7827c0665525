// ============================================================================
// ENDPOINTS - Paths and payload locations per resource
// ============================================================================
// Paths are templates (`:id`, `:courseId`, ...). Pointers say where the
// payload sits inside the response body; `""` is the body itself.
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    /// Where the returned record or list sits, if the response carries one
    pub pointer: Option<&'static str>,
}

const fn at(path: &'static str, pointer: &'static str) -> Option<Endpoint> {
    Some(Endpoint { path, pointer: Some(pointer) })
}

const fn bare(path: &'static str) -> Option<Endpoint> {
    Some(Endpoint { path, pointer: None })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceEndpoints {
    pub list: Option<Endpoint>,
    /// Total row count for server-paginated lists
    pub total: Option<&'static str>,
    pub create: Option<Endpoint>,
    /// Id of a created record when only the id comes back
    pub created_id: Option<&'static str>,
    pub update: Option<Endpoint>,
    pub delete: Option<&'static str>,
}

const NONE: ResourceEndpoints = ResourceEndpoints {
    list: None,
    total: None,
    create: None,
    created_id: None,
    update: None,
    delete: None,
};

pub const LOGIN: &str = "/api/v1/admin/login";

pub const DEPARTMENTS: ResourceEndpoints = ResourceEndpoints {
    list: at("/api/v1/departments/allDepartments", "/alldepartments"),
    create: bare("/api/v1/departments/createDepartment"),
    update: bare("/api/v1/departments/updateDepartment/:id"),
    ..NONE
};

pub const COURSES: ResourceEndpoints = ResourceEndpoints {
    list: at("/api/v1/courses/getCoursesByDeptId/:departmentId", "/departmentCourses/courses"),
    create: bare("/api/v1/courses/addNewCourse"),
    update: bare("/api/v1/courses/updateCourse/:id"),
    ..NONE
};

pub const COURSE_NAMES: ResourceEndpoints = ResourceEndpoints {
    list: at("/api/v1/courses/allCourses", "/allCourses"),
    ..NONE
};

pub const TOPICS: ResourceEndpoints = ResourceEndpoints {
    list: at("/api/v1/courseTopics/getTopicsByCoureId/:courseId", "/topics"),
    create: bare("/api/v1/courseTopics/addTopic/:courseId"),
    update: at("/api/v1/courseTopics/updateTopic/:id", "/updatedTopic"),
    ..NONE
};

pub const QUIZ_QUESTIONS: ResourceEndpoints = ResourceEndpoints {
    list: at("/api/v1/quiz/getquiz/:topicId", "/quizzes/0/questions"),
    create: at("/api/v1/quiz/addquiz/:topicId", "/question"),
    update: bare("/api/v1/quiz/updateQuestion/:id"),
    delete: Some("/api/v1/quiz/deleteQuestion/:id"),
    ..NONE
};

pub const MODULES: ResourceEndpoints = ResourceEndpoints {
    list: at("/api/v1/curriculum/getAllModules/:courseId", "/allModules"),
    create: bare("/api/v1/curriculum/createModule/:courseId"),
    update: bare("/api/v1/curriculum/updateModule/:id"),
    delete: Some("/api/v1/curriculum/deleteModule/:id"),
    ..NONE
};

/// Content rows are listed inside their module
pub const CONTENTS: ResourceEndpoints = ResourceEndpoints {
    create: bare("/api/v1/curriculum/addContent/:moduleId"),
    update: bare("/api/v1/curriculum/updateContent/:id"),
    delete: Some("/api/v1/curriculum/deleteContent/:id"),
    ..NONE
};

pub const PROJECTS: ResourceEndpoints = ResourceEndpoints {
    list: at("/api/v1/courseProjects/getProjectByCourseID/:courseId", "/projects"),
    create: at("/api/v1/courseProjects/createProject/:courseId", ""),
    update: bare("/api/v1/courseProjects/updateProject/:id"),
    delete: Some("/api/v1/project/deleteProject/:id"),
    ..NONE
};

pub const COURSE_TOOLS: ResourceEndpoints = ResourceEndpoints {
    list: at("/api/v2/course-tools/tools/:courseId", "/additional"),
    create: at("/api/v2/course-tools/tools/", "/additional"),
    ..NONE
};

pub const MENTORS: ResourceEndpoints = ResourceEndpoints {
    list: at("/api/v1/mentors/getAllMentors", "/mentors"),
    create: bare("/api/v1/mentors/addNewMentor"),
    update: bare("/api/v1/mentors/updateMentor/:id"),
    delete: Some("/api/v1/mentors/deleteMentor/:id"),
    ..NONE
};

pub const PROJECT_MENTORS: ResourceEndpoints = ResourceEndpoints {
    list: at("/api/v1/admin/allProjectMentors", "/additional"),
    create: bare("/api/v1/admin/createMentor"),
    update: bare("/api/v1/admin/changePassword/:id"),
    delete: Some("/api/v1/admin/deleteMentor/:id"),
    ..NONE
};

pub const TESTIMONIALS: ResourceEndpoints = ResourceEndpoints {
    list: at("/api/v1/testimonals/allTestimonals", "/allTestimonals"),
    create: bare("/api/v1/testimonals/createTestimonal"),
    update: bare("/api/v1/testimonals/updateTesimonal/:id"),
    delete: Some("/api/v1/testimonals/deleteTestimonal/:id"),
    ..NONE
};

pub const FAQS: ResourceEndpoints = ResourceEndpoints {
    list: at("/api/v1/faqs/allFAQs", "/allFAQs"),
    create: bare("/api/v1/faqs/createFAQ"),
    created_id: Some("/id"),
    update: bare("/api/v1/faqs/updateFAQ/:id"),
    delete: Some("/api/v1/faqs/deleteFAQ/:id"),
    ..NONE
};

pub const PRICING_PLANS: ResourceEndpoints = ResourceEndpoints {
    list: at("/api/v1/pricings/allPricings", "/allpricings"),
    create: bare("/api/v1/pricings/addPricing"),
    ..NONE
};

pub const PRICING_FEATURES: ResourceEndpoints = ResourceEndpoints {
    list: at("/api/v1/pricings/features/:pricingId", "/features"),
    create: bare("/api/v1/pricings/addPricingFeatures/:pricingId"),
    ..NONE
};

pub const COURSE_PRICINGS: ResourceEndpoints = ResourceEndpoints {
    list: at("/api/v2/pricings/pricing", "/additional"),
    ..NONE
};

pub const BOUNTIES: ResourceEndpoints = ResourceEndpoints {
    list: at("/api/v1/bounties/bounty", "/additional"),
    create: at("/api/v1/bounties/bounty", "/additional"),
    update: at("/api/v1/bounties/bounty/:id", "/additional"),
    delete: Some("/api/v1/bounties/bounty/:id"),
    ..NONE
};

pub const BOUNTY_SUBMISSIONS: ResourceEndpoints = ResourceEndpoints {
    list: at("/api/v1/bounties/bounty/submissions/:bountyId", "/additional"),
    ..NONE
};

pub const BOUNTY_VERIFY: &str = "/api/v1/bounties/verify-bounty/:submissionId";

pub const BOUNTY_APPLICATIONS: ResourceEndpoints = ResourceEndpoints {
    list: at("/api/v1/bounties/bounty/applications/:bountyId", "/additional"),
    ..NONE
};

pub const JOB_POSTINGS: ResourceEndpoints = ResourceEndpoints {
    list: at("/api/v1/careers/allOpportunites", "/additional"),
    create: bare("/api/v1/careers/addNewOpportunity"),
    update: bare("/api/v1/careers/updateOpportunity/:id"),
    delete: Some("/api/v1/careers/deleteOpportunity/:id"),
    ..NONE
};

pub const CONTACTS: ResourceEndpoints = ResourceEndpoints {
    list: at("/api/v1/contacts/allContacts", "/allContacts"),
    delete: Some("/api/v1/contacts/deleteContact/:id"),
    ..NONE
};

pub const USER_QUESTIONS: ResourceEndpoints = ResourceEndpoints {
    list: at("/api/v1/courseTopics/topics/all-questions", "/additional"),
    delete: Some("/api/v1/admin/topics/questions/deleteQuestion/:id"),
    ..NONE
};

pub const QUESTION_VERIFY: &str = "/api/v1/admin/topics/questions/verifyQuestion/:id";

pub const SALES: ResourceEndpoints = ResourceEndpoints {
    list: at("/api/v2/sales/retired", "/additional/sales"),
    total: Some("/additional/totalCount"),
    create: bare("/api/v2/sales/new-sale"),
    update: bare("/api/v1/purchase/updatePurchase/:id"),
    ..NONE
};

pub const SALES_REMOVE_ACCESS: &str = "/api/v2/sales/";

pub const PURCHASES: ResourceEndpoints = ResourceEndpoints {
    list: at("/api/v1/purchase/getAllPurchases", ""),
    ..NONE
};
