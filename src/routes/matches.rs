use actix_web::{get, post, web, HttpResponse};

use crate::handlers::match_handler;
use crate::models::game_match::NewMatch;
use crate::services::store::FantasyStore;

#[get("/matches")]
async fn list_matches(store: web::Data<FantasyStore>) -> HttpResponse {
    match_handler::list_matches(store).await
}

#[post("/matches")]
async fn create_match(new_match: web::Json<NewMatch>, store: web::Data<FantasyStore>) -> HttpResponse {
    match_handler::create_match(new_match, store).await
}
