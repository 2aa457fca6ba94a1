use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_book::create_book;
use super::handlers::delete_book::delete_book;
use super::handlers::get_book::get_book;
use super::handlers::list_books::list_books;
use super::handlers::sign_in::sign_in;
use super::handlers::sign_up::sign_up;
use super::middleware::authenticate as auth_middleware;
use crate::domain::authentication::service::RequestAuthenticator;
use crate::domain::book::ports::BookRepository;
use crate::domain::book::service::BookService;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::service::UserService;

/// Shared application state, generic over the persistence adapters.
pub struct AppState<UR, BR>
where
    UR: UserRepository,
    BR: BookRepository,
{
    pub user_service: Arc<UserService<UR>>,
    pub book_service: Arc<BookService<BR>>,
    pub request_authenticator: Arc<RequestAuthenticator<UR>>,
}

impl<UR, BR> Clone for AppState<UR, BR>
where
    UR: UserRepository,
    BR: BookRepository,
{
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            book_service: Arc::clone(&self.book_service),
            request_authenticator: Arc::clone(&self.request_authenticator),
        }
    }
}

pub fn create_router<UR, BR>(
    user_service: Arc<UserService<UR>>,
    book_service: Arc<BookService<BR>>,
    request_authenticator: Arc<RequestAuthenticator<UR>>,
) -> Router
where
    UR: UserRepository,
    BR: BookRepository,
{
    let state = AppState {
        user_service,
        book_service,
        request_authenticator,
    };

    let public_routes = Router::new()
        .route("/api/users/signup", post(sign_up::<UR, BR>))
        .route("/api/users/signin", post(sign_in::<UR, BR>));

    let protected_routes = Router::new()
        .route(
            "/api/books",
            get(list_books::<UR, BR>).post(create_book::<UR, BR>),
        )
        .route(
            "/api/books/:book_id",
            get(get_book::<UR, BR>).delete(delete_book::<UR, BR>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::<UR, BR>,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
