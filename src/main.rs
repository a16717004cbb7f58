mod config;
mod judge;
mod model;
mod prompts;
mod web;

use std::sync::Arc;

use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::info;

use config::Config;
use model::{CompletionGateway, OpenAiGateway};
use web::routes;

// App state structure
pub struct AppState {
    gateway: Arc<dyn CompletionGateway>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn CompletionGateway>) -> Self {
        Self { gateway }
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting debate coach relay");

    let config = Config::from_env().context("Failed to load configuration")?;

    // One gateway for the whole process, handed to every worker
    let gateway: Arc<dyn CompletionGateway> = Arc::new(
        OpenAiGateway::new(&config).context("Failed to initialize completion gateway")?,
    );
    let app_state = Data::new(AppState::new(gateway));

    info!("Listening on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(routes::cors())
            .app_data(app_state.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
