use database::{db::create_connection, services::save_course::CourseService};
use models::course_data::CourseData;
use std::{env, fs};

/// Default location of the scraped course dataset
const DEFAULT_INPUT: &str = "./data/courses.json";

/// Loads a scraped course dataset into the database
#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let raw = fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"));
    let courses: Vec<CourseData> =
        serde_json::from_str(&raw).expect("Failed to parse course dataset");

    println!("Loaded {} courses from {path}", courses.len());

    let db = create_connection()
        .await
        .expect("Failed to connect to database");

    let ids = CourseService::save_courses(&db, courses)
        .await
        .expect("Failed to save courses");

    println!("Done: {} courses saved", ids.len());
}
