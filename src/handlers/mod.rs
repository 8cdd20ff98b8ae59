pub mod backend_health_handler;
pub mod match_handler;
pub mod player_handler;
pub mod team_handler;

use actix_web::HttpResponse;

use crate::models::common::ErrorBody;
use crate::services::store::StoreError;

/// Map a store rejection onto the status code the front end expects
pub(crate) fn store_error_response(e: &StoreError) -> HttpResponse {
    match e {
        StoreError::UnknownPlayer(_)
        | StoreError::UnknownTeam(_)
        | StoreError::WinnerNotInMatch(_) => {
            HttpResponse::BadRequest().json(ErrorBody::new(e.to_string()))
        }
        StoreError::DuplicateTeamName(_) => {
            HttpResponse::Conflict().json(ErrorBody::new(e.to_string()))
        }
        StoreError::Poisoned => {
            tracing::error!("Store unavailable: {}", e);
            HttpResponse::InternalServerError().json(ErrorBody::new("Store unavailable"))
        }
    }
}
