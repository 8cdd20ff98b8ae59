use actix_web::{get, post, web, HttpResponse};

use crate::handlers::player_handler;
use crate::models::player::NewPlayer;
use crate::services::store::FantasyStore;

#[get("/players")]
async fn list_players(store: web::Data<FantasyStore>) -> HttpResponse {
    player_handler::list_players(store).await
}

#[post("/players")]
async fn add_player(player: web::Json<NewPlayer>, store: web::Data<FantasyStore>) -> HttpResponse {
    player_handler::add_player(player, store).await
}
