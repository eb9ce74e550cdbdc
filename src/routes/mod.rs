pub mod citas;
pub mod health;
pub mod home;

use actix_web::web;

use crate::error::ApiError;

pub fn init(cfg: &mut web::ServiceConfig) {
    // no body size cap; malformed bodies answer with the same JSON envelope
    // as other failures
    cfg.app_data(
        web::JsonConfig::default()
            .limit(usize::MAX)
            .error_handler(|err, _req| ApiError::from(err).into()),
    )
    .configure(home::init)
    .service(web::scope("/health").configure(health::init))
    .service(web::scope("/api/citas").configure(citas::init));
}
