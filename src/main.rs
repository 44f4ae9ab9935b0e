use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use book_server::db;
use book_server::environment::get_port;
use book_server::logging;
use book_server::router::create_router;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

#[tokio::main]
async fn main() {
    logging::init_tracing();

    let mut connection = db::establish_connection();
    connection
        .run_pending_migrations(MIGRATIONS)
        .expect("should run migrations if any");

    let pool = db::build_pool();
    let app = create_router(pool);

    let port = get_port();
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .unwrap();
    tracing::info!("Server running on port {port}");
    axum::serve(listener, app).await.unwrap();
}
