use crate::entities::{course, prerequisite};
use models::catalog::{CatalogSnapshot, CourseRecord};
use models::requisite::Requisite;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::collections::HashMap;
use uuid::Uuid;

pub struct CatalogService;

impl CatalogService {
    /// Load the whole catalog into an immutable snapshot for one validation
    /// run. The engine never writes back, so concurrent runs can share a
    /// snapshot or load their own.
    pub async fn load_snapshot(db: &DatabaseConnection) -> Result<CatalogSnapshot, DbErr> {
        let courses = course::Entity::find().all(db).await?;
        let prerequisites = prerequisite::Entity::find()
            .order_by_asc(prerequisite::Column::CourseId)
            .order_by_asc(prerequisite::Column::Position)
            .all(db)
            .await?;

        Ok(build_snapshot(courses, prerequisites))
    }
}

/// Assemble a snapshot from raw rows, attaching prerequisite rows to their
/// course's code in declaration order.
fn build_snapshot(
    courses: Vec<course::Model>,
    prerequisites: Vec<prerequisite::Model>,
) -> CatalogSnapshot {
    let mut code_by_id: HashMap<Uuid, String> = HashMap::with_capacity(courses.len());
    let mut snapshot = CatalogSnapshot::new();

    for row in courses {
        code_by_id.insert(row.id, row.code.clone());

        let offered_terms = serde_json::from_value(row.offered_terms).unwrap_or_default();
        snapshot.insert_course(CourseRecord {
            code: row.code,
            title: row.title,
            credits: u32::try_from(row.credits).unwrap_or(0),
            department: row.department,
            level: row.level,
            offered_terms,
        });
    }

    for row in prerequisites {
        // Rows whose course has been deleted are dropped.
        let Some(code) = code_by_id.get(&row.course_id) else {
            continue;
        };

        snapshot.insert_requisite(
            code.clone(),
            Requisite {
                target: row.target_code,
                group: row.group_id,
                min_grade: row.min_grade,
                concurrent: row.concurrent,
            },
        );
    }

    snapshot
}
