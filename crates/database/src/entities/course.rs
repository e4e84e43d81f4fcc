use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub credits: i32,
    pub department: String,
    pub level: i32,
    /// JSON array of term names the course is typically offered in
    pub offered_terms: Json,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::prerequisite::Entity")]
    Prerequisites,
}

impl Related<super::prerequisite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Prerequisites.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
