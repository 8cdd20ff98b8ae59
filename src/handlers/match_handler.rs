use actix_web::{web, HttpResponse};

use crate::handlers::store_error_response;
use crate::models::game_match::NewMatch;
use crate::services::store::FantasyStore;

#[tracing::instrument(name = "List matches", skip(store))]
pub async fn list_matches(store: web::Data<FantasyStore>) -> HttpResponse {
    match store.matches() {
        Ok(matches) => HttpResponse::Ok().json(matches),
        Err(e) => store_error_response(&e),
    }
}

#[tracing::instrument(
    name = "Create match",
    skip(new_match, store),
    fields(date = %new_match.date)
)]
pub async fn create_match(
    new_match: web::Json<NewMatch>,
    store: web::Data<FantasyStore>,
) -> HttpResponse {
    match store.add_match(new_match.into_inner()) {
        Ok(created) => {
            tracing::info!("Match {} created", created.id);
            HttpResponse::Created().json(created)
        }
        Err(e) => {
            tracing::warn!("Match creation rejected: {}", e);
            store_error_response(&e)
        }
    }
}
