pub use sea_orm_migration::prelude::*;

mod m20250815_000001_create_users_table;
mod m20250815_000002_create_lawyers_table;
mod m20250815_000003_create_cases_table;
mod m20250816_000004_create_case_status_updates_table;
mod m20250816_000005_create_case_documents_table;
mod m20250817_000006_create_lawyer_reviews_table;
mod m20250817_000007_create_fees_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250815_000001_create_users_table::Migration),
            Box::new(m20250815_000002_create_lawyers_table::Migration),
            Box::new(m20250815_000003_create_cases_table::Migration),
            Box::new(m20250816_000004_create_case_status_updates_table::Migration),
            Box::new(m20250816_000005_create_case_documents_table::Migration),
            Box::new(m20250817_000006_create_lawyer_reviews_table::Migration),
            Box::new(m20250817_000007_create_fees_table::Migration),
        ]
    }
}
