use axum::{
    extract::{Extension, Path, State},
    response::Json,
};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::Serialize;

use crate::entities::lawyer;
use crate::error::AppError;
use crate::middleware::auth::AuthUser;

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LawyerResponse {
    pub bar_council_id: String,
    pub name: String,
    #[schema(value_type = Vec<String>)]
    pub preferred_case_types: serde_json::Value,
    pub fees: i64,
    pub years_of_experience: i32,
    pub average_rating: Option<f64>,
    pub review_count: i64,
}

impl From<lawyer::Model> for LawyerResponse {
    fn from(model: lawyer::Model) -> Self {
        Self {
            bar_council_id: model.bar_council_id,
            name: model.name,
            preferred_case_types: model.preferred_case_types,
            fees: model.fees,
            years_of_experience: model.years_of_experience,
            average_rating: model.average_rating,
            review_count: model.review_count,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct LawyerListResponse {
    pub lawyers: Vec<LawyerResponse>,
}

#[utoipa::path(
    get,
    path = "/api/lawyers",
    responses(
        (status = 200, description = "The lawyer directory", body = LawyerListResponse),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Lawyers"
)]
pub async fn list_lawyers(
    Extension(user): Extension<AuthUser>,
    State(db): State<DatabaseConnection>,
) -> Result<Json<LawyerListResponse>, AppError> {
    let lawyers = lawyer::Entity::find().all(&db).await?;

    println!(
        "Lawyers | GET /api/lawyers | user={} | count={}",
        user.email,
        lawyers.len()
    );

    Ok(Json(LawyerListResponse {
        lawyers: lawyers.into_iter().map(LawyerResponse::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/lawyers/{id}",
    params(("id" = String, Path, description = "Bar council id")),
    responses(
        (status = 200, description = "Lawyer profile", body = LawyerResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Lawyer not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Lawyers"
)]
pub async fn get_lawyer(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    State(db): State<DatabaseConnection>,
) -> Result<Json<LawyerResponse>, AppError> {
    let lawyer = lawyer::Entity::find_by_id(id.clone())
        .one(&db)
        .await?
        .ok_or_else(|| AppError::NotFound("Lawyer not found".to_string()))?;

    println!(
        "Lawyers | GET /api/lawyers/{} | user={} | res=200",
        id, user.email
    );

    Ok(Json(LawyerResponse::from(lawyer)))
}
