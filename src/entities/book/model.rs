use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::books;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = books)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub published_year: i32,
}

impl Book {
    /// Assigns a fresh v4 identifier only when the caller omits one.
    pub fn new(id: Option<Uuid>, title: String, author: String, published_year: i32) -> Book {
        Book {
            id: id.unwrap_or_else(Uuid::new_v4),
            title,
            author,
            published_year,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBookDto {
    pub title: Option<String>,
    pub author: Option<String>,
    pub published_year: Option<i32>,
}

#[derive(Deserialize, AsChangeset)]
#[diesel(table_name = books)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookDto {
    pub title: Option<String>,
    pub author: Option<String>,
    pub published_year: Option<i32>,
}

impl UpdateBookDto {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.published_year.is_none()
    }
}

#[derive(Serialize)]
pub struct BooksResponse {
    pub success: bool,
    pub books: Vec<Book>,
}

#[derive(Serialize)]
pub struct BookResponse {
    pub success: bool,
    pub book: Book,
}

#[derive(Serialize)]
pub struct DeletedBookResponse {
    pub success: bool,
    pub message: String,
    pub book: Book,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_an_id_when_none_is_given() {
        let book = Book::new(None, "Dune".to_string(), "Frank Herbert".to_string(), 1965);
        assert_eq!(book.id.get_version_num(), 4);
    }

    #[test]
    fn keeps_the_caller_id_when_given() {
        let id = Uuid::new_v4();
        let book = Book::new(
            Some(id),
            "Dune".to_string(),
            "Frank Herbert".to_string(),
            1965,
        );
        assert_eq!(book.id, id);
    }

    #[test]
    fn serializes_published_year_in_camel_case() {
        let book = Book::new(None, "Dune".to_string(), "Frank Herbert".to_string(), 1965);
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["publishedYear"], 1965);
        assert!(value.get("published_year").is_none());
    }

    #[test]
    fn update_payload_with_no_fields_is_empty() {
        let payload: UpdateBookDto = serde_json::from_str("{}").unwrap();
        assert!(payload.is_empty());
        let payload: UpdateBookDto = serde_json::from_str(r#"{"title": "Dune"}"#).unwrap();
        assert!(!payload.is_empty());
    }
}
