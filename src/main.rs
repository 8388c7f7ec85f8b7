use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use log::info;

use chess_relay::config::Config;
use chess_relay::routes;
use chess_relay::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    let bind_addr = config.socket_addr_string();
    info!("Starting chess relay at http://{}", bind_addr);
    info!("Allowed cross-origin domain: {}", config.allowed_origin);

    // Create shared application state: one session for everyone
    let app_state = web::Data::new(AppState::new());
    let allowed_origin = config.allowed_origin.clone();

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_methods(vec!["GET", "POST"]);

        App::new()
            .app_data(app_state.clone())
            .wrap(cors)
            .configure(routes::configure_routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}
