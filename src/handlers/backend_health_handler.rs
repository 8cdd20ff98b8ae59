use actix_web::HttpResponse;

use crate::models::common::HealthStatus;

pub async fn backend_health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus::up())
}
