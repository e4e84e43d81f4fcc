use crate::routes::{club, course, health, plan, root};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        course::get_courses,
        course::get_course_by_code,
        plan::validate_plan,
        club::get_clubs,
        club::get_recommended_clubs
    ),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Courses", description = "Course catalog endpoints"),
        (name = "Planning", description = "Plan validation endpoints"),
        (name = "Clubs", description = "Student club endpoints"),
    ),
    info(
        title = "Academic Planner API",
        version = "1.0.0",
        description = "Academic planning API: course catalog, plan validation, club discovery",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
