use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub course_code: String,
    pub title: String,
    pub description: Option<String>,
    pub credits: u32,
    pub department: String,
    pub level: i32,
    pub semesters: Vec<String>,
    pub prerequisites: Vec<PrerequisiteResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrerequisiteResponse {
    pub target: String,
    pub group: Option<String>,
    pub min_grade: Option<String>,
    pub concurrent: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedCoursesResponse {
    pub courses: Vec<CourseResponse>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct CourseQueryParams {
    #[serde(default = "default_page")]
    pub page: u64,

    #[serde(default = "default_per_page")]
    pub per_page: u64,

    pub search: Option<String>,
    pub department: Option<Vec<String>>,
    pub level: Option<Vec<i32>>,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    20
}
