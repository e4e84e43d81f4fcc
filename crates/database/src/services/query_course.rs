use crate::entities::{course, prerequisite};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

pub struct QueryCourseService;

impl QueryCourseService {
    /// Query courses with pagination and filtering
    pub async fn get_courses_paginated(
        db: &DatabaseConnection,
        page: u64,
        per_page: u64,
        search: Option<String>,
        departments: Option<Vec<String>>,
        levels: Option<Vec<i32>>,
    ) -> Result<(Vec<course::Model>, u64), DbErr> {
        let mut condition = Condition::all();

        if let Some(departments) = departments
            && !departments.is_empty()
        {
            condition = condition.add(course::Column::Department.is_in(departments));
        }

        if let Some(levels) = levels
            && !levels.is_empty()
        {
            condition = condition.add(course::Column::Level.is_in(levels));
        }

        if let Some(search) = search
            && !search.is_empty()
        {
            condition = condition.add(
                Condition::any()
                    .add(course::Column::Code.contains(search.as_str()))
                    .add(course::Column::Title.contains(search.as_str())),
            );
        }

        let query = course::Entity::find()
            .filter(condition)
            .order_by_asc(course::Column::Code);

        let total_items = query.clone().count(db).await?;
        let paginator = query.paginate(db, per_page);
        let courses = paginator.fetch_page(page.saturating_sub(1)).await?; // SeaORM uses 0-based pages

        Ok((courses, total_items))
    }

    /// Fetch one course by its code, along with its prerequisite rows in
    /// declaration order
    pub async fn get_course_by_code(
        db: &DatabaseConnection,
        code: &str,
    ) -> Result<Option<(course::Model, Vec<prerequisite::Model>)>, DbErr> {
        let found = course::Entity::find()
            .filter(course::Column::Code.eq(code))
            .find_with_related(prerequisite::Entity)
            .order_by_asc(prerequisite::Column::Position)
            .all(db)
            .await?;

        Ok(found.into_iter().next())
    }
}
