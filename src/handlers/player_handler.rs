use actix_web::{web, HttpResponse};

use crate::handlers::store_error_response;
use crate::models::player::NewPlayer;
use crate::services::store::FantasyStore;

#[tracing::instrument(name = "List players", skip(store))]
pub async fn list_players(store: web::Data<FantasyStore>) -> HttpResponse {
    match store.players() {
        Ok(players) => HttpResponse::Ok().json(players),
        Err(e) => store_error_response(&e),
    }
}

#[tracing::instrument(
    name = "Add player",
    skip(player, store),
    fields(
        player_name = %player.name,
        role = %player.role
    )
)]
pub async fn add_player(
    player: web::Json<NewPlayer>,
    store: web::Data<FantasyStore>,
) -> HttpResponse {
    match store.add_player(player.into_inner()) {
        Ok(created) => {
            tracing::info!("Added player {} ({})", created.name, created.id);
            HttpResponse::Created().json(created)
        }
        Err(e) => store_error_response(&e),
    }
}
