//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, dispatcher wiring, and the Axum
//! server lifecycle.

use crate::application::dispatch::Dispatcher;
use crate::application::handlers::{
    CreateAccountHandler, CreateFavoriteHandler, GetFavoritesHandler, GetRentalDetailHandler,
    SearchRentalsHandler,
};
use crate::config::Config;
use crate::infrastructure::persistence::{PgAccountRepository, PgFavoriteRepository};
use crate::infrastructure::rental::{HttpRentalDataClient, RentalDataClient};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations
/// - Rental-data provider HTTP client
/// - Command/query dispatcher with all handler registrations
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;
    let rental_client: Arc<dyn RentalDataClient> = Arc::new(HttpRentalDataClient::new(
        http,
        config.rental_api_base_url.clone(),
        config.rental_api_key.clone(),
    ));

    let pool = Arc::new(pool);
    let account_repository = Arc::new(PgAccountRepository::new(pool.clone()));
    let favorite_repository = Arc::new(PgFavoriteRepository::new(pool.clone()));

    let dispatcher = Arc::new(Dispatcher::new(
        Arc::new(CreateAccountHandler::new(account_repository)),
        Arc::new(CreateFavoriteHandler::new(favorite_repository.clone())),
        Arc::new(GetFavoritesHandler::new(favorite_repository)),
        Arc::new(SearchRentalsHandler::new(rental_client.clone())),
        Arc::new(GetRentalDetailHandler::new(rental_client)),
    ));

    let state = AppState::new(dispatcher);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .await?;

    Ok(())
}
