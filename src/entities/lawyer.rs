use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A lawyer profile from the directory. `average_rating` and
/// `review_count` are derived values refreshed after every review insert.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "lawyers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub bar_council_id: String,
    pub name: String,
    pub preferred_case_types: Json,
    pub fees: i64,
    pub years_of_experience: i32,
    pub average_rating: Option<f64>,
    pub review_count: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
