use crate::entities::{course, prerequisite};
use chrono::Utc;
use models::course_data::CourseData;
use models::requisite::Requisite;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, QueryFilter, TransactionTrait,
};
use uuid::Uuid;

pub struct CourseService;

impl CourseService {
    /// The number of courses to save in a single batch
    const BATCH_SIZE: usize = 100;

    /// Upsert scraped course data, keyed on course code. Each course's
    /// prerequisite rows are replaced wholesale so removals propagate.
    pub async fn save_courses(
        db: &DatabaseConnection,
        courses: Vec<CourseData>,
    ) -> Result<Vec<Uuid>, DbErr> {
        let total = courses.len();
        println!("Saving {total} courses in batches of {}", Self::BATCH_SIZE);

        let mut ids = Vec::with_capacity(total);

        for (batch_idx, batch) in courses.chunks(Self::BATCH_SIZE).enumerate() {
            let txn = db.begin().await?;

            for data in batch {
                ids.push(Self::upsert_course(&txn, data).await?);
            }

            txn.commit().await?;
            println!(
                "Completed batch {}: {}/{total} courses saved",
                batch_idx + 1,
                ids.len()
            );
        }

        Ok(ids)
    }

    async fn upsert_course(txn: &DatabaseTransaction, data: &CourseData) -> Result<Uuid, DbErr> {
        let now = Utc::now().naive_utc();

        let existing = course::Entity::find()
            .filter(course::Column::Code.eq(data.course_code.as_str()))
            .one(txn)
            .await?;

        let id = match existing {
            Some(found) => {
                let id = found.id;

                let mut active: course::ActiveModel = found.into();
                active.title = Set(data.title.clone());
                active.description = Set(data.description.clone());
                active.credits = Set(data.credits as i32);
                active.department = Set(data.department.clone());
                active.level = Set(data.level);
                active.offered_terms = Set(serde_json::json!(data.semesters));
                active.updated_at = Set(now);
                active.update(txn).await?;

                prerequisite::Entity::delete_many()
                    .filter(prerequisite::Column::CourseId.eq(id))
                    .exec(txn)
                    .await?;

                id
            }
            None => {
                let id = Uuid::new_v4();

                course::ActiveModel {
                    id: Set(id),
                    code: Set(data.course_code.clone()),
                    title: Set(data.title.clone()),
                    description: Set(data.description.clone()),
                    credits: Set(data.credits as i32),
                    department: Set(data.department.clone()),
                    level: Set(data.level),
                    offered_terms: Set(serde_json::json!(data.semesters)),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(txn)
                .await?;

                id
            }
        };

        let rows: Vec<prerequisite::ActiveModel> = data
            .prerequisites
            .iter()
            .cloned()
            .map(Requisite::from)
            .enumerate()
            .map(|(position, requisite)| prerequisite::ActiveModel {
                id: Set(Uuid::new_v4()),
                course_id: Set(id),
                position: Set(position as i32),
                target_code: Set(requisite.target),
                group_id: Set(requisite.group),
                min_grade: Set(requisite.min_grade),
                concurrent: Set(requisite.concurrent),
                created_at: Set(now),
                updated_at: Set(now),
            })
            .collect();

        if !rows.is_empty() {
            prerequisite::Entity::insert_many(rows).exec(txn).await?;
        }

        Ok(id)
    }
}
