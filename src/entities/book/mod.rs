pub mod model;
pub mod persist;
pub mod routes;

pub use model::{Book, NewBookDto, UpdateBookDto};
pub use routes::{
    delete_book_route, get_book_route, get_books_route, post_book_route, put_book_route,
};
