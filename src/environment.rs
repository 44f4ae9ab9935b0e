extern crate dotenv;

use dotenv::dotenv;

pub fn get_database_url() -> String {
    dotenv().ok();
    std::env::var("DATABASE_URL").expect("Database url should be set")
}

pub fn get_port() -> String {
    dotenv().ok();
    std::env::var("PORT").unwrap_or_else(|_| "5000".to_string())
}
