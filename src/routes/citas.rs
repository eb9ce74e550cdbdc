use actix_web::{HttpResponse, Responder, get, post, web};
use serde_json::Value;

use crate::error::ApiError;
use crate::excel::SheetSource;
use crate::handlers::citas::{create_cita, get_cita, get_citas};
use crate::models::responses::{CitaResponse, CitasResponse};

#[get("")]
async fn list(source: web::Data<SheetSource>) -> Result<HttpResponse, ApiError> {
    let citas = get_citas(&source).await?;
    Ok(HttpResponse::Ok().json(CitasResponse::new(citas)))
}

#[get("/{id}")]
async fn show(
    source: web::Data<SheetSource>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let cita = get_cita(&source, &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(CitaResponse {
        success: true,
        cita,
    }))
}

#[post("")]
async fn create(body: web::Json<Value>) -> impl Responder {
    HttpResponse::Created().json(create_cita(body.into_inner()))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list).service(show).service(create);
}
