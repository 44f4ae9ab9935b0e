use axum::{
    debug_handler,
    extract::{Extension, Json, Path},
    http::StatusCode,
};
use uuid::Uuid;

use crate::db::DbPool;
use crate::entities::error::ApiError;

use super::model::{
    Book, BookResponse, BooksResponse, DeletedBookResponse, NewBookDto, UpdateBookDto,
};

pub async fn get_books_route(
    Extension(pool): Extension<DbPool>,
) -> Result<Json<BooksResponse>, ApiError> {
    let books = Book::find_all(&pool)?;
    Ok(Json(BooksResponse {
        success: true,
        books,
    }))
}

pub async fn get_book_route(
    Extension(pool): Extension<DbPool>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = Book::find(id, &pool)?;
    Ok(Json(BookResponse {
        success: true,
        book,
    }))
}

#[debug_handler]
pub async fn post_book_route(
    Extension(pool): Extension<DbPool>,
    Json(payload): Json<NewBookDto>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    let (title, author, published_year) =
        match (payload.title, payload.author, payload.published_year) {
            (Some(title), Some(author), Some(year))
                if !title.trim().is_empty() && !author.trim().is_empty() =>
            {
                (title, author, year)
            }
            _ => return Err(ApiError::bad_request("Please provide all fields")),
        };

    let book = Book::new(None, title, author, published_year).create(&pool)?;
    Ok((
        StatusCode::CREATED,
        Json(BookResponse {
            success: true,
            book,
        }),
    ))
}

#[debug_handler]
pub async fn put_book_route(
    Extension(pool): Extension<DbPool>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBookDto>,
) -> Result<Json<BookResponse>, ApiError> {
    if payload.is_empty() {
        return Err(ApiError::bad_request("Send at least one field to update"));
    }
    let book = Book::update(id, &payload, &pool)?;
    Ok(Json(BookResponse {
        success: true,
        book,
    }))
}

pub async fn delete_book_route(
    Extension(pool): Extension<DbPool>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletedBookResponse>, ApiError> {
    let book = Book::delete(id, &pool)?;
    Ok(Json(DeletedBookResponse {
        success: true,
        message: "Book deleted".to_string(),
        book,
    }))
}
