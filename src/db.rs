use crate::environment::get_database_url;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

pub fn establish_connection() -> PgConnection {
    let database_url = get_database_url();
    PgConnection::establish(&database_url)
        .unwrap_or_else(|_| panic!("Error connecting to {}", database_url))
}

pub fn build_pool() -> DbPool {
    let manager = ConnectionManager::new(get_database_url());
    DbPool::new(manager).expect("Failed to create connection pool")
}
