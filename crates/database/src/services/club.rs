use crate::entities::club;
use chrono::Utc;
use models::club_data::ClubData;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

pub struct ClubService;

impl ClubService {
    /// List clubs, optionally filtered by a name/description substring and a
    /// category
    pub async fn get_clubs(
        db: &DatabaseConnection,
        search: Option<String>,
        category: Option<String>,
    ) -> Result<Vec<club::Model>, DbErr> {
        let mut condition = Condition::all();

        if let Some(category) = category
            && !category.is_empty()
        {
            condition = condition.add(club::Column::Category.eq(category));
        }

        if let Some(search) = search
            && !search.is_empty()
        {
            condition = condition.add(
                Condition::any()
                    .add(club::Column::Name.contains(search.as_str()))
                    .add(club::Column::Description.contains(search.as_str())),
            );
        }

        club::Entity::find()
            .filter(condition)
            .order_by_asc(club::Column::Name)
            .all(db)
            .await
    }

    /// Upsert scraped club data, keyed on club name
    pub async fn save_clubs(db: &DatabaseConnection, clubs: Vec<ClubData>) -> Result<usize, DbErr> {
        let total = clubs.len();
        println!("Saving {total} clubs");

        let txn = db.begin().await?;
        let now = Utc::now().naive_utc();

        for data in clubs {
            let existing = club::Entity::find()
                .filter(club::Column::Name.eq(data.name.as_str()))
                .one(&txn)
                .await?;

            match existing {
                Some(found) => {
                    let mut active: club::ActiveModel = found.into();
                    active.description = Set(data.description);
                    active.category = Set(data.category);
                    active.tags = Set(serde_json::json!(data.tags));
                    active.email = Set(data.email);
                    active.website = Set(data.website);
                    active.updated_at = Set(now);
                    active.update(&txn).await?;
                }
                None => {
                    club::ActiveModel {
                        id: Set(Uuid::new_v4()),
                        name: Set(data.name),
                        description: Set(data.description),
                        category: Set(data.category),
                        tags: Set(serde_json::json!(data.tags)),
                        email: Set(data.email),
                        website: Set(data.website),
                        created_at: Set(now),
                        updated_at: Set(now),
                    }
                    .insert(&txn)
                    .await?;
                }
            }
        }

        txn.commit().await?;
        println!("Saved {total} clubs");

        Ok(total)
    }
}
