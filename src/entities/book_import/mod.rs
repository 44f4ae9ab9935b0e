pub mod model;
pub mod parser;
pub mod routes;
pub mod service;

pub use model::{ImportCsvResult, ImportRow, ImportRowFailure};
pub use routes::post_import_csv_route;
pub use service::import_books_csv;
