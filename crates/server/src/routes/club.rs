use crate::dtos::club::{ClubQueryParams, ClubResponse, ClubsResponse, RecommendedClubParams};
use axum::{Json, extract::Query, http::StatusCode};
use database::{db::create_connection, entities::club, services::club::ClubService};

/// How many recommendations to return
const RECOMMENDATION_LIMIT: usize = 6;

/// Get student clubs with optional filtering
#[utoipa::path(
    get,
    path = "/clubs",
    params(ClubQueryParams),
    responses(
        (status = 200, description = "List of clubs retrieved successfully", body = ClubsResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Clubs"
)]
pub async fn get_clubs(
    Query(params): Query<ClubQueryParams>,
) -> Result<Json<ClubsResponse>, StatusCode> {
    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let clubs = ClubService::get_clubs(&db, params.search, params.category)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(ClubsResponse {
        clubs: clubs.into_iter().map(convert_to_club_response).collect(),
    }))
}

/// Get recommended clubs based on user interests
#[utoipa::path(
    get,
    path = "/clubs/recommended",
    params(RecommendedClubParams),
    responses(
        (status = 200, description = "Recommended clubs retrieved successfully", body = ClubsResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Clubs"
)]
pub async fn get_recommended_clubs(
    Query(params): Query<RecommendedClubParams>,
) -> Result<Json<ClubsResponse>, StatusCode> {
    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let clubs = ClubService::get_clubs(&db, None, None)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let mut responses: Vec<ClubResponse> =
        clubs.into_iter().map(convert_to_club_response).collect();

    if let Some(interests) = params.interests {
        let keywords: Vec<String> = interests
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        responses.retain(|club| {
            club.tags
                .iter()
                .any(|tag| keywords.iter().any(|kw| tag.to_lowercase().contains(kw)))
        });
    }

    responses.truncate(RECOMMENDATION_LIMIT);

    Ok(Json(ClubsResponse { clubs: responses }))
}

/// Helper function to convert database models to API response
fn convert_to_club_response(club: club::Model) -> ClubResponse {
    let tags: Vec<String> = serde_json::from_value(club.tags).unwrap_or_default();

    ClubResponse {
        id: club.id.to_string(),
        name: club.name,
        description: club.description,
        category: club.category,
        tags,
        email: club.email,
        website: club.website,
    }
}
