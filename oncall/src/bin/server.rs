//! Local HTTP server for the on-call lookup
//!
//! Serves the same lookup as the Lambda function, for development and for
//! hosting outside AWS:
//!   GET /                      health check
//!   GET /oncall?scheduleid=ID  current on-call user
//!
//! Environment variables:
//!   OPSGENIE_API_KEY - OpsGenie API key (required)
//!   OPSGENIE_API_URL - API base URL (default https://api.opsgenie.com)
//!   ONCALL_BIND_ADDR - listen address (default 0.0.0.0)
//!   ONCALL_PORT      - listen port (default 8080)

use actix_cors::Cors;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use std::sync::Arc;

use oncall::api;
use oncall::config::Config;
use oncall::integrations::{OnCallProvider, OpsGenieClient};

#[get("/")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "On-call Lookup",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let provider: Arc<dyn OnCallProvider> = Arc::new(OpsGenieClient::from_config(&config));
    let provider = web::Data::from(provider);

    log::info!(
        "Starting on-call lookup server at http://{}:{}",
        config.bind_addr,
        config.port
    );
    log::info!("Using OpsGenie API at {}", config.api_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(provider.clone())
            .service(health_check)
            .configure(api::config)
    })
    .bind((config.bind_addr.as_str(), config.port))?
    .run()
    .await
}
