use actix_web::{get, post, web, HttpResponse};

use crate::handlers::team_handler;
use crate::models::team::NewTeam;
use crate::services::store::FantasyStore;

#[get("/teams")]
async fn list_teams(store: web::Data<FantasyStore>) -> HttpResponse {
    team_handler::list_teams(store).await
}

#[post("/teams")]
async fn create_team(team: web::Json<NewTeam>, store: web::Data<FantasyStore>) -> HttpResponse {
    team_handler::create_team(team, store).await
}
