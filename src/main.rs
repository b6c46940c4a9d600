use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use chrono::Local;
use dotenvy::dotenv;

use chulseok::config::Config;
use chulseok::docs::ApiDoc;
use chulseok::{maintenance, routes, store};

use tracing::{info, warn};
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let stores = store::init_stores(&config.data_dir).expect("Failed to initialize data stores");

    // Catch up on the dated backup and log reset in case the server was
    // down over midnight.
    if let Err(e) = maintenance::run_daily(&stores, Local::now().date_naive()) {
        warn!(error = ?e, "Startup maintenance failed");
    }

    // Clone values for the closure (avoid move issues)
    let server_addr = config.server_addr.clone();
    let config_data = config.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(Data::new(stores.clone()))
            .app_data(Data::new(config.clone()))
            // Kiosk + report routes with rate limiting
            .configure(|cfg| routes::configure(cfg, config_data.clone()))
    })
    // The flat-file stores do no locking; a single worker keeps the log
    // single-writer.
    .workers(1)
    .bind(server_addr)?
    .run()
    .await
}
