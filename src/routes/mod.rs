mod auth;
mod case_documents;
mod case_search;
mod case_status;
mod cases;
mod home;
mod lawyer_reviews;
mod lawyers;
mod setup_db;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::middleware::auth::auth_middleware;

/// Advertised client-side limit, enforced here as well.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

// Define the OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // General endpoints
        home::root,
        // Authentication endpoints
        auth::signup,
        auth::login,
        // Case endpoints
        cases::create_case,
        cases::list_cases,
        cases::delete_case,
        case_status::list_status_updates,
        case_status::add_status_update,
        case_documents::list_documents,
        case_documents::upload_document,
        case_search::search_cases,
        // Lawyer endpoints
        lawyers::list_lawyers,
        lawyers::get_lawyer,
        lawyer_reviews::list_reviews,
        lawyer_reviews::add_review,
        // Dev utilities
        setup_db::setup_db,
    ),
    components(
        schemas(
            auth::SignupRequest,
            auth::SignupResponse,
            auth::LoginRequest,
            auth::LoginResponse,
            cases::NewCaseRequest,
            cases::DeleteCaseRequest,
            cases::CaseResponse,
            cases::CaseListResponse,
            cases::CaseMutationResponse,
            case_status::AddStatusRequest,
            case_status::StatusUpdateResponse,
            case_status::StatusListResponse,
            case_status::AddStatusResponse,
            case_documents::DocumentResponse,
            case_documents::DocumentListResponse,
            case_documents::UploadDocumentResponse,
            case_search::SearchResponse,
            lawyers::LawyerResponse,
            lawyers::LawyerListResponse,
            lawyer_reviews::AddReviewRequest,
            lawyer_reviews::ReviewResponse,
            lawyer_reviews::ReviewListResponse,
            lawyer_reviews::AddReviewResponse,
            setup_db::SetupCounts,
            setup_db::SetupResponse,
        )
    ),
    tags(
        (name = "General", description = "General API information"),
        (name = "Authentication", description = "Signup and JWT login"),
        (name = "Cases", description = "Register, list and delete court cases"),
        (name = "Case Status", description = "Append-only case status log"),
        (name = "Case Documents", description = "Case file uploads and metadata"),
        (name = "Case Search", description = "Filtered search over the caller's cases"),
        (name = "Lawyers", description = "Lawyer directory and profiles"),
        (name = "Lawyer Reviews", description = "Ratings and derived lawyer aggregates"),
        (name = "Setup", description = "Development-only data seeding")
    ),
    info(
        title = "CaseKit API",
        version = "0.1.0",
        description = "A Rust/Axum application for court case management: case registration, status tracking, document uploads and lawyer reviews",
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

// Add security scheme for JWT Bearer tokens
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::Http::new(
                        utoipa::openapi::security::HttpAuthScheme::Bearer,
                    ),
                ),
            );
        }
    }
}

pub fn create_routes(db: DatabaseConnection) -> Router {
    // Swagger UI (stateless)
    let swagger_router: Router = SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into();

    // Session-gated routes
    let protected_routes = Router::new()
        .route(
            "/api/case/status",
            get(case_status::list_status_updates).post(case_status::add_status_update),
        )
        .route(
            "/api/case/documents",
            get(case_documents::list_documents).post(case_documents::upload_document),
        )
        .route("/api/case/search", get(case_search::search_cases))
        .route("/api/case/new", post(cases::create_case))
        .route("/api/case/deletecase", delete(cases::delete_case))
        .route("/api/cases", get(cases::list_cases))
        .route(
            "/api/lawyer/reviews",
            get(lawyer_reviews::list_reviews).post(lawyer_reviews::add_review),
        )
        .route("/api/lawyers", get(lawyers::list_lawyers))
        .route("/api/lawyers/{id}", get(lawyers::get_lawyer))
        .layer(middleware::from_fn(auth_middleware));

    // Public routes (no auth required) and merge all together
    let app_routes = Router::new()
        .route("/", get(home::root))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/setup-db", get(setup_db::setup_db))
        .merge(protected_routes)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(db);

    // Merge Swagger UI (which has no state) with the rest
    Router::new().merge(swagger_router).merge(app_routes)
}
