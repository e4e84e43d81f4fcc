use crate::dtos::course::{
    CourseQueryParams, CourseResponse, PaginatedCoursesResponse, PaginationMeta,
    PrerequisiteResponse,
};
use axum::{
    Json,
    extract::{Path, Query},
    http::StatusCode,
};
use database::{
    db::create_connection,
    entities::{course, prerequisite},
    services::query_course::QueryCourseService,
};

/// Get paginated list of courses
#[utoipa::path(
    get,
    path = "/courses",
    params(CourseQueryParams),
    responses(
        (status = 200, description = "List of courses retrieved successfully", body = PaginatedCoursesResponse),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_courses(
    Query(params): Query<CourseQueryParams>,
) -> Result<Json<PaginatedCoursesResponse>, StatusCode> {
    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let per_page = params.per_page.max(1);
    let (courses, total_items) = QueryCourseService::get_courses_paginated(
        &db,
        params.page,
        per_page,
        params.search,
        params.department,
        params.level,
    )
    .await
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let course_responses = courses
        .into_iter()
        .map(|course| convert_to_course_response(course, vec![]))
        .collect();

    // Calculate pagination metadata
    let total_pages = total_items.div_ceil(per_page);
    let pagination = PaginationMeta {
        page: params.page,
        per_page,
        total_pages,
        total_items,
        has_next: params.page < total_pages,
        has_prev: params.page > 1,
    };

    Ok(Json(PaginatedCoursesResponse {
        courses: course_responses,
        pagination,
    }))
}

/// Get a specific course by its code
#[utoipa::path(
    get,
    path = "/courses/{code}",
    params(
        ("code" = String, Path, description = "Course code, e.g. CS 2100")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_course_by_code(
    Path(code): Path<String>,
) -> Result<Json<CourseResponse>, StatusCode> {
    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let course_data = QueryCourseService::get_course_by_code(&db, &code)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    match course_data {
        Some((course, prerequisites)) => {
            Ok(Json(convert_to_course_response(course, prerequisites)))
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Helper function to convert database models to API response
fn convert_to_course_response(
    course: course::Model,
    prerequisites: Vec<prerequisite::Model>,
) -> CourseResponse {
    let semesters: Vec<String> = serde_json::from_value(course.offered_terms).unwrap_or_default();

    let prerequisite_responses = prerequisites
        .into_iter()
        .map(|row| PrerequisiteResponse {
            target: row.target_code,
            group: row.group_id,
            min_grade: row.min_grade,
            concurrent: row.concurrent,
        })
        .collect();

    CourseResponse {
        course_code: course.code,
        title: course.title,
        description: course.description,
        credits: u32::try_from(course.credits).unwrap_or(0),
        department: course.department,
        level: course.level,
        semesters,
        prerequisites: prerequisite_responses,
    }
}
