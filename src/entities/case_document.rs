use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata for an uploaded case file. `file_name` is the sanitized
/// display name, `stored_filename` the actual name on disk.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "case_documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub case_id: Uuid,
    pub title: String,
    pub file_name: String,
    pub stored_filename: String,
    pub file_extension: String,
    pub file_size: i64,
    pub file_path: String,
    pub document_type: String,
    pub uploaded_by: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
