use chrono::Datelike;
use models::issue::{ValidationIssue, ValidationReport};
use models::plan::{Plan, PlannedEntry};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A student's proposed multi-year schedule, as submitted by the frontend.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub courses: Vec<PlanCourseRequest>,
    /// First calendar year of the plan; informational only.
    #[serde(default = "default_start_year")]
    pub start_year: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanCourseRequest {
    pub course_code: String,
    pub year: i32,
    pub semester: String,
}

fn default_start_year() -> i32 {
    chrono::Utc::now().year()
}

impl From<PlanRequest> for Plan {
    fn from(request: PlanRequest) -> Self {
        Plan::new(
            request
                .courses
                .into_iter()
                .map(|course| PlannedEntry::new(course.course_code, course.year, course.semester))
                .collect(),
            request.start_year,
        )
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanValidationResponse {
    pub is_valid: bool,
    pub errors: Vec<IssueResponse>,
    pub warnings: Vec<IssueResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct IssueResponse {
    #[serde(rename = "courseCode")]
    pub course_code: Option<String>,
    pub year: i32,
    pub semester: String,
    pub error: String,
    pub severity: String,
}

impl From<ValidationIssue> for IssueResponse {
    fn from(issue: ValidationIssue) -> Self {
        Self {
            course_code: issue.course_code,
            year: issue.year,
            semester: issue.term,
            error: issue.message,
            severity: issue.severity.to_string(),
        }
    }
}

impl From<ValidationReport> for PlanValidationResponse {
    fn from(report: ValidationReport) -> Self {
        Self {
            is_valid: report.is_valid(),
            errors: report.errors.into_iter().map(IssueResponse::from).collect(),
            warnings: report
                .warnings
                .into_iter()
                .map(IssueResponse::from)
                .collect(),
        }
    }
}
