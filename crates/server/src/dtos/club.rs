use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct ClubResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub email: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClubsResponse {
    pub clubs: Vec<ClubResponse>,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct ClubQueryParams {
    pub search: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct RecommendedClubParams {
    /// Free-text interests, e.g. "programming music service"
    pub interests: Option<String>,
}
