use axum::{
    extract::{Extension, Query, State},
    response::Json,
};
use chrono::NaiveDate;
use sea_orm::{
    sea_query::{Expr, Func, SimpleExpr},
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::entities::case;
use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::routes::cases::CaseResponse;

#[derive(Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Free-text term, matched case-insensitively across case type,
    /// description, lawyer name and court type.
    pub q: Option<String>,
    pub case_type: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct SearchResponse {
    pub cases: Vec<CaseResponse>,
    pub count: usize,
    pub filters: serde_json::Value,
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest("Invalid date format, expected YYYY-MM-DD".to_string()))
}

fn contains_insensitive(column: case::Column, pattern: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column))).like(pattern)
}

/// Every search is scoped to the caller's own cases; the remaining
/// filters only narrow that set further.
fn build_search_filter(email: &str, params: &SearchQuery) -> Result<Condition, AppError> {
    let mut condition = Condition::all().add(case::Column::Email.eq(email));

    if let Some(q) = params.q.as_deref().filter(|q| !q.is_empty()) {
        let pattern = format!("%{}%", q.to_lowercase());
        condition = condition.add(
            Condition::any()
                .add(contains_insensitive(case::Column::CaseType, &pattern))
                .add(contains_insensitive(case::Column::CaseDescription, &pattern))
                .add(contains_insensitive(case::Column::LawyerName, &pattern))
                .add(contains_insensitive(case::Column::CourtType, &pattern)),
        );
    }

    if let Some(status) = params.status.as_deref().filter(|s| !s.is_empty()) {
        condition = condition.add(case::Column::CurrentStatus.eq(status));
    }

    if let Some(case_type) = params.case_type.as_deref().filter(|t| !t.is_empty()) {
        condition = condition.add(case::Column::CaseType.eq(case_type));
    }

    // Either bound alone gives a one-sided range; both give an
    // inclusive window.
    if let Some(start) = params.start_date.as_deref().filter(|d| !d.is_empty()) {
        condition = condition.add(case::Column::HearingDate.gte(parse_date(start)?));
    }
    if let Some(end) = params.end_date.as_deref().filter(|d| !d.is_empty()) {
        condition = condition.add(case::Column::HearingDate.lte(parse_date(end)?));
    }

    Ok(condition)
}

#[utoipa::path(
    get,
    path = "/api/case/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "The caller's cases matching the filters, by hearing date ascending", body = SearchResponse),
        (status = 400, description = "Malformed date bound"),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Case Search"
)]
pub async fn search_cases(
    Extension(user): Extension<AuthUser>,
    State(db): State<DatabaseConnection>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let condition = build_search_filter(&user.email, &params)?;

    let cases = case::Entity::find()
        .filter(condition)
        .order_by_asc(case::Column::HearingDate)
        .all(&db)
        .await?;

    println!(
        "CaseSearch | GET /api/case/search | user={} | q={:?} | count={}",
        user.email,
        params.q.as_deref().unwrap_or(""),
        cases.len()
    );

    let count = cases.len();
    Ok(Json(SearchResponse {
        cases: cases.into_iter().map(CaseResponse::from).collect(),
        count,
        filters: json!({
            "query": params.q.unwrap_or_default(),
            "email": user.email,
            "status": params.status,
            "caseType": params.case_type,
            "startDate": params.start_date,
            "endDate": params.end_date,
        }),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(
        q: Option<&str>,
        case_type: Option<&str>,
        status: Option<&str>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> SearchQuery {
        SearchQuery {
            q: q.map(String::from),
            case_type: case_type.map(String::from),
            status: status.map(String::from),
            start_date: start.map(String::from),
            end_date: end.map(String::from),
        }
    }

    #[test]
    fn accepts_iso_dates_and_rejects_everything_else() {
        assert!(parse_date("2024-01-01").is_ok());
        assert!(parse_date("2024-12-31").is_ok());
        assert!(parse_date("01/01/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn builds_with_any_combination_of_filters() {
        let email = "user@example.com";
        assert!(build_search_filter(email, &query(None, None, None, None, None)).is_ok());
        assert!(build_search_filter(
            &email,
            &query(Some("Criminal"), Some("Criminal"), Some("Filed"), None, None)
        )
        .is_ok());
        assert!(build_search_filter(
            &email,
            &query(None, None, None, Some("2024-01-01"), Some("2024-12-31"))
        )
        .is_ok());
        // One-sided ranges are fine too.
        assert!(
            build_search_filter(email, &query(None, None, None, Some("2024-01-01"), None)).is_ok()
        );
    }

    #[test]
    fn malformed_date_bound_is_a_bad_request() {
        let result = build_search_filter(
            "user@example.com",
            &query(None, None, None, Some("not-a-date"), None),
        );
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn empty_query_adds_no_text_filter() {
        let with_empty =
            build_search_filter("user@example.com", &query(Some(""), None, None, None, None))
                .unwrap();
        let without =
            build_search_filter("user@example.com", &query(None, None, None, None, None)).unwrap();
        assert_eq!(format!("{:?}", with_empty), format!("{:?}", without));
    }
}
