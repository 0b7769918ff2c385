use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{
    AppState, create_book, delete_book, get_book_by_id, list_books, update_book,
};

/// Creates the API router with all book management endpoints
///
/// - POST   /books           - Add a book
/// - GET    /books           - List books (filters: name, reading, finished)
/// - GET    /books/:book_id  - Get book details
/// - PUT    /books/:book_id  - Update a book
/// - DELETE /books/:book_id  - Delete a book
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/:book_id",
            get(get_book_by_id).put(update_book).delete(delete_book),
        )
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
