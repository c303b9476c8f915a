use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A court case registered by a user. The id is the client-generated
/// uid submitted with the case form. `current_status` mirrors the most
/// recent status update for the case.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "cases")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub case_type: String,
    pub case_description: String,
    pub lawyer_name: String,
    pub address: String,
    pub court_type: String,
    pub hearing_date: Date,
    pub email: String,
    pub current_status: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
