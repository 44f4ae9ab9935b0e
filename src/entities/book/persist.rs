use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::entities::error::ApiError;
use crate::schema::books;

use super::model::{Book, UpdateBookDto};

impl Book {
    pub fn find(id: Uuid, pool: &DbPool) -> Result<Book, ApiError> {
        let mut conn = pool
            .get()
            .expect("Failed to get a connection from the pool");

        let book = books::table.filter(books::id.eq(id)).first(&mut conn)?;
        Ok(book)
    }

    pub fn find_all(pool: &DbPool) -> Result<Vec<Book>, ApiError> {
        let mut conn = pool
            .get()
            .expect("Failed to get a connection from the pool");

        let results = books::table.load::<Book>(&mut conn)?;
        Ok(results)
    }

    pub fn create(self, pool: &DbPool) -> Result<Book, ApiError> {
        let mut conn = pool
            .get()
            .expect("Failed to get a connection from the pool");

        let book = diesel::insert_into(books::table)
            .values(&self)
            .get_result(&mut conn)?;
        Ok(book)
    }

    pub fn update(id: Uuid, changes: &UpdateBookDto, pool: &DbPool) -> Result<Book, ApiError> {
        let mut conn = pool
            .get()
            .expect("Failed to get a connection from the pool");

        let book = diesel::update(books::table)
            .filter(books::id.eq(id))
            .set(changes)
            .get_result(&mut conn)?;
        Ok(book)
    }

    pub fn delete(id: Uuid, pool: &DbPool) -> Result<Book, ApiError> {
        let mut conn = pool
            .get()
            .expect("Failed to get a connection from the pool");

        let book = diesel::delete(books::table.filter(books::id.eq(id))).get_result(&mut conn)?;
        Ok(book)
    }
}
