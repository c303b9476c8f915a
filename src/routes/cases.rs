use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::Json,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::case;
use crate::error::AppError;
use crate::middleware::auth::AuthUser;

#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewCaseRequest {
    /// Client-generated case identifier; one is minted when absent.
    pub uid: Option<Uuid>,
    pub case_type: Option<String>,
    pub case_description: Option<String>,
    pub lawyer_name: Option<String>,
    pub address: Option<String>,
    pub court_type: Option<String>,
    /// YYYY-MM-DD
    pub hearing_date: Option<String>,
}

#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCaseRequest {
    pub case_id: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseResponse {
    pub id: Uuid,
    pub case_type: String,
    pub case_description: String,
    pub lawyer_name: String,
    pub address: String,
    pub court_type: String,
    pub hearing_date: String,
    pub email: String,
    pub current_status: Option<String>,
    pub created_at: String,
}

impl From<case::Model> for CaseResponse {
    fn from(model: case::Model) -> Self {
        Self {
            id: model.id,
            case_type: model.case_type,
            case_description: model.case_description,
            lawyer_name: model.lawyer_name,
            address: model.address,
            court_type: model.court_type,
            hearing_date: model.hearing_date.to_string(),
            email: model.email,
            current_status: model.current_status,
            created_at: model.created_at.to_string(),
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct CaseListResponse {
    pub cases: Vec<CaseResponse>,
    pub count: usize,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct CaseMutationResponse {
    pub message: String,
    pub id: Uuid,
}

#[utoipa::path(
    post,
    path = "/api/case/new",
    request_body = NewCaseRequest,
    responses(
        (status = 201, description = "Case registered", body = CaseMutationResponse),
        (status = 400, description = "A required case field is missing"),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Cases"
)]
pub async fn create_case(
    Extension(user): Extension<AuthUser>,
    State(db): State<DatabaseConnection>,
    Json(payload): Json<NewCaseRequest>,
) -> Result<(StatusCode, Json<CaseMutationResponse>), AppError> {
    let missing = || AppError::BadRequest("All case fields are required".to_string());

    let case_type = payload.case_type.filter(|v| !v.is_empty()).ok_or_else(missing)?;
    let case_description = payload
        .case_description
        .filter(|v| !v.is_empty())
        .ok_or_else(missing)?;
    let lawyer_name = payload.lawyer_name.filter(|v| !v.is_empty()).ok_or_else(missing)?;
    let address = payload.address.filter(|v| !v.is_empty()).ok_or_else(missing)?;
    let court_type = payload.court_type.filter(|v| !v.is_empty()).ok_or_else(missing)?;
    let hearing_date = payload
        .hearing_date
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(missing)?;
    let hearing_date = chrono::NaiveDate::parse_from_str(hearing_date, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest("Invalid date format, expected YYYY-MM-DD".to_string()))?;

    let created = case::ActiveModel {
        id: Set(payload.uid.unwrap_or_else(Uuid::new_v4)),
        case_type: Set(case_type),
        case_description: Set(case_description),
        lawyer_name: Set(lawyer_name),
        address: Set(address),
        court_type: Set(court_type),
        hearing_date: Set(hearing_date),
        email: Set(user.email.clone()),
        current_status: Set(Some("Filed".to_string())),
        created_at: Set(chrono::Utc::now().naive_utc()),
    }
    .insert(&db)
    .await?;

    println!(
        "Cases | POST /api/case/new | user={} | case={} | res=201",
        user.email, created.id
    );

    Ok((
        StatusCode::CREATED,
        Json(CaseMutationResponse {
            message: "Case added successfully".to_string(),
            id: created.id,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/cases",
    responses(
        (status = 200, description = "The caller's cases, by hearing date ascending", body = CaseListResponse),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Cases"
)]
pub async fn list_cases(
    Extension(user): Extension<AuthUser>,
    State(db): State<DatabaseConnection>,
) -> Result<Json<CaseListResponse>, AppError> {
    let cases = case::Entity::find()
        .filter(case::Column::Email.eq(&user.email))
        .order_by_asc(case::Column::HearingDate)
        .all(&db)
        .await?;

    println!(
        "Cases | GET /api/cases | user={} | count={}",
        user.email,
        cases.len()
    );

    let count = cases.len();
    Ok(Json(CaseListResponse {
        cases: cases.into_iter().map(CaseResponse::from).collect(),
        count,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/case/deletecase",
    request_body = DeleteCaseRequest,
    responses(
        (status = 200, description = "Case deleted", body = CaseMutationResponse),
        (status = 400, description = "Case ID is required"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "No such case owned by the caller")
    ),
    security(("bearer_auth" = [])),
    tag = "Cases"
)]
pub async fn delete_case(
    Extension(user): Extension<AuthUser>,
    State(db): State<DatabaseConnection>,
    Json(payload): Json<DeleteCaseRequest>,
) -> Result<Json<CaseMutationResponse>, AppError> {
    let case_id: Uuid = payload
        .case_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("Case ID is required".to_string()))?
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid case ID".to_string()))?;

    // Ownership is part of the filter: deleting someone else's case is
    // indistinguishable from deleting a missing one.
    let result = case::Entity::delete_many()
        .filter(case::Column::Id.eq(case_id))
        .filter(case::Column::Email.eq(&user.email))
        .exec(&db)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Case not found".to_string()));
    }

    println!(
        "Cases | DELETE /api/case/deletecase | user={} | case={} | res=200",
        user.email, case_id
    );

    Ok(Json(CaseMutationResponse {
        message: "Case deleted successfully".to_string(),
        id: case_id,
    }))
}
