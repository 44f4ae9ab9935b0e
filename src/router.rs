use axum::{
    extract::Extension,
    http::{Method, StatusCode},
    response::IntoResponse,
    routing::{get, post, Router},
};
use tower_http::cors::{Any, CorsLayer};

use crate::db::DbPool;
use crate::entities::{book, book_import};

pub fn create_router(pool: DbPool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers(Any);

    let books_router = Router::new()
        .route("/", get(book::get_books_route).post(book::post_book_route))
        .route(
            "/:id",
            get(book::get_book_route)
                .put(book::put_book_route)
                .delete(book::delete_book_route),
        )
        .route("/import", post(book_import::post_import_csv_route));

    Router::new()
        .nest("/api/books", books_router)
        .route("/", get(root_handler))
        .fallback(fallback_handler)
        .layer(Extension(pool))
        .layer(cors)
}

async fn fallback_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404 Not Found")
}
async fn root_handler() -> impl IntoResponse {
    (StatusCode::OK, "Ok")
}
