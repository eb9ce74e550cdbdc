use actix_web::{HttpResponse, Responder, get, web};
use once_cell::sync::Lazy;
use serde_json::{Value, json};

static ENDPOINTS: Lazy<Value> = Lazy::new(|| {
    json!({
        "message": "API para gestión de citas - Excel",
        "endpoints": {
            "todas_las_citas": "/api/citas",
            "cita_especifica": "/api/citas/<id>",
            "agendar_cita": "POST /api/citas",
            "estado": "/health"
        }
    })
});

#[get("/")]
async fn home() -> impl Responder {
    HttpResponse::Ok().json(&*ENDPOINTS)
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
}
