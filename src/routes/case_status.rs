use axum::{
    extract::{Extension, Query, State},
    http::StatusCode,
    response::Json,
};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{case, case_status_update};
use crate::error::AppError;
use crate::middleware::auth::AuthUser;

/// The workflow states a case moves through.
pub const STATUS_OPTIONS: [&str; 8] = [
    "Filed",
    "In Progress",
    "Hearing Scheduled",
    "Under Review",
    "Judgment Reserved",
    "Completed",
    "Dismissed",
    "Withdrawn",
];

#[derive(Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct StatusListQuery {
    pub case_id: Option<String>,
}

#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddStatusRequest {
    pub case_id: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateResponse {
    pub id: Uuid,
    pub case_id: Uuid,
    pub status: String,
    pub notes: String,
    pub updated_by: String,
    pub created_at: String,
}

impl From<case_status_update::Model> for StatusUpdateResponse {
    fn from(model: case_status_update::Model) -> Self {
        Self {
            id: model.id,
            case_id: model.case_id,
            status: model.status,
            notes: model.notes,
            updated_by: model.updated_by,
            created_at: model.created_at.to_string(),
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusListResponse {
    pub status_updates: Vec<StatusUpdateResponse>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct AddStatusResponse {
    pub message: String,
    pub id: Uuid,
}

fn parse_case_id(raw: &str) -> Result<Uuid, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("Invalid case ID".to_string()))
}

#[utoipa::path(
    get,
    path = "/api/case/status",
    params(StatusListQuery),
    responses(
        (status = 200, description = "Status updates for a case, newest first", body = StatusListResponse),
        (status = 400, description = "Case ID is required"),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Case Status"
)]
pub async fn list_status_updates(
    Extension(user): Extension<AuthUser>,
    State(db): State<DatabaseConnection>,
    Query(query): Query<StatusListQuery>,
) -> Result<Json<StatusListResponse>, AppError> {
    let case_id = query
        .case_id
        .ok_or_else(|| AppError::BadRequest("Case ID is required".to_string()))?;
    let case_id = parse_case_id(&case_id)?;

    let updates = case_status_update::Entity::find()
        .filter(case_status_update::Column::CaseId.eq(case_id))
        .order_by_desc(case_status_update::Column::CreatedAt)
        .all(&db)
        .await?;

    println!(
        "CaseStatus | GET /api/case/status | user={} | case={} | count={}",
        user.email,
        case_id,
        updates.len()
    );

    Ok(Json(StatusListResponse {
        status_updates: updates.into_iter().map(StatusUpdateResponse::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/case/status",
    request_body = AddStatusRequest,
    responses(
        (status = 201, description = "Status recorded and mirrored onto the case", body = AddStatusResponse),
        (status = 400, description = "Case ID and status are required, or status not recognized"),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Case Status"
)]
pub async fn add_status_update(
    Extension(user): Extension<AuthUser>,
    State(db): State<DatabaseConnection>,
    Json(payload): Json<AddStatusRequest>,
) -> Result<(StatusCode, Json<AddStatusResponse>), AppError> {
    let (case_id, status) = match (payload.case_id, payload.status) {
        (Some(case_id), Some(status)) if !case_id.is_empty() && !status.is_empty() => {
            (case_id, status)
        }
        _ => {
            return Err(AppError::BadRequest(
                "Case ID and status are required".to_string(),
            ))
        }
    };
    let case_id = parse_case_id(&case_id)?;

    if !STATUS_OPTIONS.contains(&status.as_str()) {
        return Err(AppError::BadRequest("Invalid status value".to_string()));
    }

    // The append-only log entry and the denormalized current_status on
    // the case commit together or not at all.
    let txn = db.begin().await?;

    let update = case_status_update::ActiveModel {
        id: Set(Uuid::new_v4()),
        case_id: Set(case_id),
        status: Set(status.clone()),
        notes: Set(payload.notes.unwrap_or_default()),
        updated_by: Set(user.email.clone()),
        created_at: Set(chrono::Utc::now().naive_utc()),
    }
    .insert(&txn)
    .await?;

    // An unknown caseId updates no case row; the log entry still lands.
    case::Entity::update_many()
        .col_expr(case::Column::CurrentStatus, Expr::value(status.clone()))
        .filter(case::Column::Id.eq(case_id))
        .exec(&txn)
        .await?;

    txn.commit().await?;

    println!(
        "CaseStatus | POST /api/case/status | user={} | case={} | status={} | res=201",
        user.email, case_id, status
    );

    Ok((
        StatusCode::CREATED,
        Json(AddStatusResponse {
            message: "Status updated successfully".to_string(),
            id: update.id,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_all_eight_statuses() {
        for status in STATUS_OPTIONS {
            assert!(STATUS_OPTIONS.contains(&status));
        }
        assert_eq!(STATUS_OPTIONS.len(), 8);
        assert!(!STATUS_OPTIONS.contains(&"Closed"));
        assert!(!STATUS_OPTIONS.contains(&"filed"));
    }

    #[test]
    fn rejects_malformed_case_ids() {
        assert!(parse_case_id("not-a-uuid").is_err());
        assert!(parse_case_id("4f5b2a1e-8d5c-4f3a-9b1e-2c3d4e5f6a7b").is_ok());
    }
}
