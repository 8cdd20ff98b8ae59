use actix_web::{web, HttpResponse};

use crate::handlers::store_error_response;
use crate::models::team::NewTeam;
use crate::services::store::FantasyStore;

#[tracing::instrument(name = "List teams", skip(store))]
pub async fn list_teams(store: web::Data<FantasyStore>) -> HttpResponse {
    match store.teams() {
        Ok(teams) => HttpResponse::Ok().json(teams),
        Err(e) => store_error_response(&e),
    }
}

/// Create a team from a submitted roster
#[tracing::instrument(
    name = "Create team",
    skip(team, store),
    fields(
        team_name = %team.name,
        player_count = team.players.len()
    )
)]
pub async fn create_team(team: web::Json<NewTeam>, store: web::Data<FantasyStore>) -> HttpResponse {
    match store.add_team(team.into_inner()) {
        Ok(created) => {
            tracing::info!("Team '{}' created with id {}", created.name, created.id);
            HttpResponse::Created().json(created)
        }
        Err(e) => {
            tracing::warn!("Team creation rejected: {}", e);
            store_error_response(&e)
        }
    }
}
