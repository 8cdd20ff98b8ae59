use actix_web::web;

pub mod backend_health;
pub mod matches;
pub mod players;
pub mod teams;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    cfg.service(players::list_players)
        .service(players::add_player);

    cfg.service(teams::list_teams)
        .service(teams::create_team);

    cfg.service(matches::list_matches)
        .service(matches::create_match);
}
