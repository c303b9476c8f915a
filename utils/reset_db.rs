use sea_orm::{ConnectionTrait, Database, DbBackend, Statement};
use std::env;

const TABLES: [&str; 8] = [
    "case_status_updates",
    "case_documents",
    "lawyer_reviews",
    "fees",
    "cases",
    "lawyers",
    "users",
    "seaql_migrations",
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let db = Database::connect(database_url)
        .await
        .expect("Failed to connect to database");

    for table in TABLES {
        db.execute(Statement::from_string(
            DbBackend::Postgres,
            format!("DROP TABLE IF EXISTS \"{}\" CASCADE;", table),
        ))
        .await
        .unwrap();
    }
    println!("Database reset successfully");
}
