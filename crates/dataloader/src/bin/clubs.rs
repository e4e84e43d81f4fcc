use database::{db::create_connection, services::club::ClubService};
use models::club_data::ClubData;
use std::{env, fs};

/// Default location of the scraped club dataset
const DEFAULT_INPUT: &str = "./data/clubs.json";

/// Loads a scraped club dataset into the database
#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let raw = fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"));
    let clubs: Vec<ClubData> = serde_json::from_str(&raw).expect("Failed to parse club dataset");

    println!("Loaded {} clubs from {path}", clubs.len());

    let db = create_connection()
        .await
        .expect("Failed to connect to database");

    let saved = ClubService::save_clubs(&db, clubs)
        .await
        .expect("Failed to save clubs");

    println!("Done: {saved} clubs saved");
}
