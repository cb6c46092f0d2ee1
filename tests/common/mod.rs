#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use rent_estimator::application::dispatch::Dispatcher;
use rent_estimator::application::handlers::{
    CreateAccountHandler, CreateFavoriteHandler, GetFavoritesHandler, GetRentalDetailHandler,
    SearchRentalsHandler,
};
use rent_estimator::domain::entities::{Account, Favorite, NewAccount, NewFavorite};
use rent_estimator::domain::repositories::{AccountRepository, FavoriteRepository};
use rent_estimator::error::AppError;
use rent_estimator::infrastructure::rental::RentalDataClient;
use rent_estimator::state::AppState;

/// In-memory account store.
pub struct InMemoryAccountRepository {
    pub accounts: Mutex<Vec<Account>>,
    pub insert_calls: AtomicUsize,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(Vec::new()),
            insert_calls: AtomicUsize::new(0),
        }
    }

    pub fn insert_count(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, new_account: NewAccount) -> Result<Account, AppError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);

        let account = Account::new(
            new_account.id,
            new_account.username,
            new_account.first_name,
            new_account.last_name,
        );
        self.accounts.lock().unwrap().push(account.clone());

        Ok(account)
    }
}

/// In-memory favorite store.
pub struct InMemoryFavoriteRepository {
    pub favorites: Mutex<Vec<Favorite>>,
    pub insert_calls: AtomicUsize,
}

impl InMemoryFavoriteRepository {
    pub fn new() -> Self {
        Self {
            favorites: Mutex::new(Vec::new()),
            insert_calls: AtomicUsize::new(0),
        }
    }

    pub fn insert_count(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn seed(&self, id: &str, account_id: &str, property_id: &str) {
        self.favorites.lock().unwrap().push(Favorite::new(
            id.to_string(),
            account_id.to_string(),
            property_id.to_string(),
        ));
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryFavoriteRepository {
    async fn create(&self, new_favorite: NewFavorite) -> Result<Favorite, AppError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);

        let favorite = Favorite::new(
            new_favorite.id,
            new_favorite.account_id,
            new_favorite.property_id,
        );
        self.favorites.lock().unwrap().push(favorite.clone());

        Ok(favorite)
    }

    async fn list_by_account(&self, account_id: &str) -> Result<Vec<Favorite>, AppError> {
        Ok(self
            .favorites
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.account_id == account_id)
            .cloned()
            .collect())
    }
}

/// Rental-data client stub returning canned bodies.
pub struct StubRentalClient {
    pub listings_body: String,
    pub detail_body: String,
}

impl StubRentalClient {
    pub fn new(listings_body: &str, detail_body: &str) -> Self {
        Self {
            listings_body: listings_body.to_string(),
            detail_body: detail_body.to_string(),
        }
    }
}

#[async_trait]
impl RentalDataClient for StubRentalClient {
    async fn fetch_rentals_by_city_state(
        &self,
        _city: &str,
        _state_code: &str,
    ) -> Result<String, AppError> {
        Ok(self.listings_body.clone())
    }

    async fn fetch_rental(&self, _property_id: &str) -> Result<String, AppError> {
        Ok(self.detail_body.clone())
    }
}

/// Rental-data client stub that always fails upstream.
pub struct FailingRentalClient;

#[async_trait]
impl RentalDataClient for FailingRentalClient {
    async fn fetch_rentals_by_city_state(
        &self,
        _city: &str,
        _state_code: &str,
    ) -> Result<String, AppError> {
        Err(AppError::upstream("provider down", json!({ "status": 503 })))
    }

    async fn fetch_rental(&self, _property_id: &str) -> Result<String, AppError> {
        Err(AppError::upstream("provider down", json!({ "status": 503 })))
    }
}

/// Builds application state over in-memory collaborators.
///
/// Returns the repositories alongside the state so tests can seed rows and
/// assert call counts.
pub fn create_test_state(
    rental_client: Arc<dyn RentalDataClient>,
) -> (
    AppState,
    Arc<InMemoryAccountRepository>,
    Arc<InMemoryFavoriteRepository>,
) {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let favorites = Arc::new(InMemoryFavoriteRepository::new());

    let dispatcher = Arc::new(Dispatcher::new(
        Arc::new(CreateAccountHandler::new(accounts.clone())),
        Arc::new(CreateFavoriteHandler::new(favorites.clone())),
        Arc::new(GetFavoritesHandler::new(favorites.clone())),
        Arc::new(SearchRentalsHandler::new(rental_client.clone())),
        Arc::new(GetRentalDetailHandler::new(rental_client)),
    ));

    (AppState::new(dispatcher), accounts, favorites)
}

/// Default state with canned rental bodies.
pub fn default_test_state() -> (
    AppState,
    Arc<InMemoryAccountRepository>,
    Arc<InMemoryFavoriteRepository>,
) {
    create_test_state(Arc::new(StubRentalClient::new(
        "{ \"listings\": [] }",
        "{ content: contentValue}",
    )))
}
