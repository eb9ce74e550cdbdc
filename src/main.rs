use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use api_citas_excel::config::AppConfig;
use api_citas_excel::excel::SheetSource;
use api_citas_excel::routes;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let source = web::Data::new(SheetSource::new(&config.source));
    info!(
        host = %config.server.host,
        port = config.server.port,
        source = source.url(),
        "starting api-citas-excel"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(source.clone())
            .configure(routes::init)
    })
    .bind(config.bind_addr())?
    .run()
    .await
}
