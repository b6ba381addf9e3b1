use lambda_http::{service_fn, Error, Request};

use oncall::config::Config;
use oncall::integrations::OpsGenieClient;
use oncall::lambda::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Local invocations (cargo lambda watch) may keep the key in .env
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    log::info!("On-call lookup Lambda using {}", config.api_url);

    let client = OpsGenieClient::from_config(&config);
    let client = &client;

    lambda_http::run(service_fn(move |event: Request| async move {
        function_handler(client, event).await
    }))
    .await
}
