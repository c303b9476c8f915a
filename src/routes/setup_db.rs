use axum::{extract::State, response::Json};
use rand::Rng;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbBackend, EntityTrait, PaginatorTrait, QueryFilter, Set, Statement,
};
use serde::Serialize;
use uuid::Uuid;

use crate::config::get_config;
use crate::entities::{case, fee, lawyer};
use crate::error::AppError;

#[derive(Serialize, utoipa::ToSchema)]
pub struct SetupCounts {
    pub fees: u64,
    pub cases: u64,
    pub lawyers: u64,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct SetupResponse {
    pub message: String,
    pub collections: SetupCounts,
}

/// Secondary indexes backing the search handler. Created here rather
/// than in a migration because this endpoint is the historical origin
/// of the whole seeded dataset.
const SUPPORTING_INDEXES: [&str; 3] = [
    "CREATE INDEX IF NOT EXISTS idx_cases_hearing_date ON cases (hearing_date);",
    "CREATE INDEX IF NOT EXISTS idx_cases_email ON cases (email);",
    "CREATE INDEX IF NOT EXISTS idx_cases_lawyer_name ON cases (lawyer_name);",
];

#[utoipa::path(
    get,
    path = "/api/setup-db",
    responses(
        (status = 200, description = "Fees seeded, indexes created, missing statuses backfilled", body = SetupResponse),
        (status = 403, description = "Not running in development mode")
    ),
    tag = "Setup"
)]
pub async fn setup_db(
    State(db): State<DatabaseConnection>,
) -> Result<Json<SetupResponse>, AppError> {
    let config = get_config();
    if !config.is_development() {
        return Err(AppError::Forbidden(
            "This endpoint is only available in development mode".to_string(),
        ));
    }

    // Reseed the fee schedule: one row per lawyer, randomized amounts.
    let lawyers = lawyer::Entity::find().all(&db).await?;
    fee::Entity::delete_many().exec(&db).await?;

    // Rows are built up front so the thread-local rng never lives
    // across an await point.
    let fee_rows: Vec<fee::ActiveModel> = {
        let mut rng = rand::thread_rng();
        lawyers
            .iter()
            .map(|lawyer| fee::ActiveModel {
                id: Set(Uuid::new_v4()),
                lawyer_name: Set(lawyer.name.clone()),
                fees: Set(rng.gen_range(5000..15000)),
                consultation_fee: Set(rng.gen_range(1000..3000)),
                hearing_fee: Set(rng.gen_range(2000..5000)),
            })
            .collect()
    };
    for row in fee_rows {
        row.insert(&db).await?;
    }

    for index in SUPPORTING_INDEXES {
        db.execute(Statement::from_string(DbBackend::Postgres, index.to_owned()))
            .await?;
    }

    // Cases registered before status tracking existed get the initial state.
    case::Entity::update_many()
        .col_expr(case::Column::CurrentStatus, Expr::value("Filed"))
        .filter(case::Column::CurrentStatus.is_null())
        .exec(&db)
        .await?;

    let counts = SetupCounts {
        fees: fee::Entity::find().count(&db).await?,
        cases: case::Entity::find().count(&db).await?,
        lawyers: lawyers.len() as u64,
    };

    println!(
        "Setup | GET /api/setup-db | fees={} | cases={} | lawyers={} | res=200",
        counts.fees, counts.cases, counts.lawyers
    );

    Ok(Json(SetupResponse {
        message: "Database setup complete".to_string(),
        collections: counts,
    }))
}
