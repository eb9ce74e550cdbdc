use actix_web::{HttpResponse, Responder, get, web};

use crate::models::responses::{HealthResponse, SERVICE_NAME};

#[get("")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "active",
        service: SERVICE_NAME,
    })
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
