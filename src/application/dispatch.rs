//! Command/query dispatcher.
//!
//! Requests are matched to exactly one handler by request type. Registration
//! is static: the [`Dispatcher`] is built once at startup with one handler
//! per request type, and the [`Route`] impls below form the dispatch table.

use async_trait::async_trait;
use std::sync::Arc;

use crate::api::dto::account::{CreateAccountRequest, CreateAccountResponse};
use crate::api::dto::favorite::{
    CreateFavoriteRequest, CreateFavoriteResponse, GetFavoritesRequest, GetFavoritesResponse,
};
use crate::api::dto::rental::{
    GetRentalDetailRequest, GetRentalDetailResponse, SearchRentalsRequest, SearchRentalsResponse,
};
use crate::error::AppError;

/// A request the dispatcher can route, tied to its response type.
pub trait Request: Send + 'static {
    type Response: Send + 'static;
}

/// Single-purpose mapping from one request type to one response type.
#[async_trait]
pub trait Handler<R: Request>: Send + Sync {
    async fn handle(&self, request: R) -> Result<R::Response, AppError>;
}

impl Request for CreateAccountRequest {
    type Response = CreateAccountResponse;
}

impl Request for CreateFavoriteRequest {
    type Response = CreateFavoriteResponse;
}

impl Request for GetFavoritesRequest {
    type Response = GetFavoritesResponse;
}

impl Request for SearchRentalsRequest {
    type Response = SearchRentalsResponse;
}

impl Request for GetRentalDetailRequest {
    type Response = GetRentalDetailResponse;
}

/// Process-wide registry routing a request object to its registered handler.
pub struct Dispatcher {
    create_account: Arc<dyn Handler<CreateAccountRequest>>,
    create_favorite: Arc<dyn Handler<CreateFavoriteRequest>>,
    get_favorites: Arc<dyn Handler<GetFavoritesRequest>>,
    search_rentals: Arc<dyn Handler<SearchRentalsRequest>>,
    get_rental_detail: Arc<dyn Handler<GetRentalDetailRequest>>,
}

impl Dispatcher {
    /// Registers one handler per request type.
    pub fn new(
        create_account: Arc<dyn Handler<CreateAccountRequest>>,
        create_favorite: Arc<dyn Handler<CreateFavoriteRequest>>,
        get_favorites: Arc<dyn Handler<GetFavoritesRequest>>,
        search_rentals: Arc<dyn Handler<SearchRentalsRequest>>,
        get_rental_detail: Arc<dyn Handler<GetRentalDetailRequest>>,
    ) -> Self {
        Self {
            create_account,
            create_favorite,
            get_favorites,
            search_rentals,
            get_rental_detail,
        }
    }

    /// Routes a request to its registered handler and awaits the result.
    pub async fn send<R: Route>(&self, request: R) -> Result<R::Response, AppError> {
        R::handler(self).handle(request).await
    }
}

/// Dispatch-table entry selecting the registered handler for a request type.
pub trait Route: Request + Sized {
    fn handler(dispatcher: &Dispatcher) -> &dyn Handler<Self>;
}

impl Route for CreateAccountRequest {
    fn handler(dispatcher: &Dispatcher) -> &dyn Handler<Self> {
        dispatcher.create_account.as_ref()
    }
}

impl Route for CreateFavoriteRequest {
    fn handler(dispatcher: &Dispatcher) -> &dyn Handler<Self> {
        dispatcher.create_favorite.as_ref()
    }
}

impl Route for GetFavoritesRequest {
    fn handler(dispatcher: &Dispatcher) -> &dyn Handler<Self> {
        dispatcher.get_favorites.as_ref()
    }
}

impl Route for SearchRentalsRequest {
    fn handler(dispatcher: &Dispatcher) -> &dyn Handler<Self> {
        dispatcher.search_rentals.as_ref()
    }
}

impl Route for GetRentalDetailRequest {
    fn handler(dispatcher: &Dispatcher) -> &dyn Handler<Self> {
        dispatcher.get_rental_detail.as_ref()
    }
}
