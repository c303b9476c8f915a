use axum::{
    extract::{Extension, Query, State},
    http::StatusCode,
    response::Json,
};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{lawyer, lawyer_review};
use crate::error::AppError;
use crate::middleware::auth::AuthUser;

#[derive(Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListQuery {
    pub lawyer_id: Option<String>,
}

#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddReviewRequest {
    pub lawyer_id: Option<String>,
    /// Kept loose on purpose: a float or string rating must reach the
    /// validator and come back as a 400, not a deserialization reject.
    #[schema(value_type = i32)]
    pub rating: Option<serde_json::Value>,
    pub comment: Option<String>,
    pub case_id: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: Uuid,
    pub lawyer_id: String,
    pub rating: i32,
    pub comment: String,
    pub case_id: Option<Uuid>,
    pub user_email: String,
    pub created_at: String,
}

impl From<lawyer_review::Model> for ReviewResponse {
    fn from(model: lawyer_review::Model) -> Self {
        Self {
            id: model.id,
            lawyer_id: model.lawyer_id,
            rating: model.rating,
            comment: model.comment,
            case_id: model.case_id,
            user_email: model.user_email,
            created_at: model.created_at.to_string(),
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ReviewListResponse {
    pub reviews: Vec<ReviewResponse>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct AddReviewResponse {
    pub message: String,
    pub id: Uuid,
}

/// An acceptable rating is a JSON integer in [1,5]. Floats, strings and
/// out-of-range values are all rejected.
fn parse_rating(raw: &serde_json::Value) -> Option<i32> {
    let rating = raw.as_i64()?;
    if (1..=5).contains(&rating) {
        Some(rating as i32)
    } else {
        None
    }
}

/// Mean of all ratings, rounded to one decimal.
fn average_rating(ratings: &[i32]) -> f64 {
    let sum: i32 = ratings.iter().sum();
    let mean = f64::from(sum) / ratings.len() as f64;
    (mean * 10.0).round() / 10.0
}

#[utoipa::path(
    get,
    path = "/api/lawyer/reviews",
    params(ReviewListQuery),
    responses(
        (status = 200, description = "Reviews for a lawyer, newest first", body = ReviewListResponse),
        (status = 400, description = "Lawyer ID is required"),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Lawyer Reviews"
)]
pub async fn list_reviews(
    Extension(user): Extension<AuthUser>,
    State(db): State<DatabaseConnection>,
    Query(query): Query<ReviewListQuery>,
) -> Result<Json<ReviewListResponse>, AppError> {
    let lawyer_id = query
        .lawyer_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("Lawyer ID is required".to_string()))?;

    let reviews = lawyer_review::Entity::find()
        .filter(lawyer_review::Column::LawyerId.eq(&lawyer_id))
        .order_by_desc(lawyer_review::Column::CreatedAt)
        .all(&db)
        .await?;

    println!(
        "LawyerReviews | GET /api/lawyer/reviews | user={} | lawyer={} | count={}",
        user.email,
        lawyer_id,
        reviews.len()
    );

    Ok(Json(ReviewListResponse {
        reviews: reviews.into_iter().map(ReviewResponse::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/lawyer/reviews",
    request_body = AddReviewRequest,
    responses(
        (status = 201, description = "Review recorded, lawyer aggregate refreshed", body = AddReviewResponse),
        (status = 400, description = "Valid lawyer ID and rating (1-5) are required"),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Lawyer Reviews"
)]
pub async fn add_review(
    Extension(user): Extension<AuthUser>,
    State(db): State<DatabaseConnection>,
    Json(payload): Json<AddReviewRequest>,
) -> Result<(StatusCode, Json<AddReviewResponse>), AppError> {
    let invalid = || AppError::BadRequest("Valid lawyer ID and rating (1-5) are required".to_string());

    let lawyer_id = payload
        .lawyer_id
        .filter(|id| !id.is_empty())
        .ok_or_else(invalid)?;
    let rating = payload
        .rating
        .as_ref()
        .and_then(parse_rating)
        .ok_or_else(invalid)?;
    let case_id = payload.case_id.and_then(|id| id.parse::<Uuid>().ok());

    // Insert and aggregate refresh commit together, so the stored
    // average never lags behind a review that made it in.
    let txn = db.begin().await?;

    let review = lawyer_review::ActiveModel {
        id: Set(Uuid::new_v4()),
        lawyer_id: Set(lawyer_id.clone()),
        rating: Set(rating),
        comment: Set(payload.comment.unwrap_or_default()),
        case_id: Set(case_id),
        user_email: Set(user.email.clone()),
        created_at: Set(chrono::Utc::now().naive_utc()),
    }
    .insert(&txn)
    .await?;

    let ratings: Vec<i32> = lawyer_review::Entity::find()
        .filter(lawyer_review::Column::LawyerId.eq(&lawyer_id))
        .select_only()
        .column(lawyer_review::Column::Rating)
        .into_tuple()
        .all(&txn)
        .await?;

    lawyer::Entity::update_many()
        .col_expr(
            lawyer::Column::AverageRating,
            Expr::value(average_rating(&ratings)),
        )
        .col_expr(
            lawyer::Column::ReviewCount,
            Expr::value(ratings.len() as i64),
        )
        .filter(lawyer::Column::BarCouncilId.eq(&lawyer_id))
        .exec(&txn)
        .await?;

    txn.commit().await?;

    println!(
        "LawyerReviews | POST /api/lawyer/reviews | user={} | lawyer={} | rating={} | res=201",
        user.email, lawyer_id, rating
    );

    Ok((
        StatusCode::CREATED,
        Json(AddReviewResponse {
            message: "Review added successfully".to_string(),
            id: review.id,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_integer_ratings_in_range() {
        for r in 1..=5 {
            assert_eq!(parse_rating(&json!(r)), Some(r));
        }
    }

    #[test]
    fn rejects_out_of_range_and_non_integer_ratings() {
        assert_eq!(parse_rating(&json!(0)), None);
        assert_eq!(parse_rating(&json!(6)), None);
        assert_eq!(parse_rating(&json!(4.5)), None);
        assert_eq!(parse_rating(&json!("4")), None);
        assert_eq!(parse_rating(&json!(null)), None);
        assert_eq!(parse_rating(&json!(-3)), None);
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        assert_eq!(average_rating(&[4, 5]), 4.5);
        assert_eq!(average_rating(&[3, 4, 4]), 3.7);
        assert_eq!(average_rating(&[5]), 5.0);
        assert_eq!(average_rating(&[1, 1, 2]), 1.3);
    }
}
