use axum::{
    extract::{Extension, Multipart, Query, State},
    http::StatusCode,
    response::Json,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::get_config;
use crate::entities::case_document;
use crate::error::AppError;
use crate::middleware::auth::AuthUser;

/// The recognized document categories; anything else is filed as Other.
pub const DOCUMENT_TYPES: [&str; 9] = [
    "Evidence",
    "Affidavit",
    "Legal Brief",
    "Court Order",
    "Judgment",
    "Petition",
    "Witness Statement",
    "Expert Report",
    "Other",
];

/// Extensions accepted for upload. The client advertises the same list;
/// this is the server-side enforcement of it.
const ALLOWED_EXTENSIONS: [&str; 9] = [
    ".pdf", ".doc", ".docx", ".jpg", ".jpeg", ".png", ".xls", ".xlsx", ".txt",
];

#[derive(Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct DocumentListQuery {
    pub case_id: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
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
    pub created_at: String,
}

impl From<case_document::Model> for DocumentResponse {
    fn from(model: case_document::Model) -> Self {
        Self {
            id: model.id,
            case_id: model.case_id,
            title: model.title,
            file_name: model.file_name,
            stored_filename: model.stored_filename,
            file_extension: model.file_extension,
            file_size: model.file_size,
            file_path: model.file_path,
            document_type: model.document_type,
            uploaded_by: model.uploaded_by,
            created_at: model.created_at.to_string(),
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct DocumentListResponse {
    pub documents: Vec<DocumentResponse>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct UploadDocumentResponse {
    pub message: String,
    pub document: DocumentResponse,
}

/// Lowercased `.ext` from the original filename, or empty when there is
/// no dot at all.
fn file_extension(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((_, ext)) => format!(".{}", ext.to_lowercase()),
        None => String::new(),
    }
}

/// Replace every character outside `[A-Za-z0-9.-]` with an underscore.
fn sanitize_filename(filename: &str) -> String {
    if filename.is_empty() {
        return "document".to_string();
    }
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Collision-resistant name on disk: `doc_<millisecond-timestamp><ext>`.
fn storage_filename(extension: &str) -> String {
    format!("doc_{}{}", chrono::Utc::now().timestamp_millis(), extension)
}

fn normalize_document_type(raw: Option<&str>) -> String {
    match raw {
        Some(t) if DOCUMENT_TYPES.contains(&t) => t.to_string(),
        _ => "Other".to_string(),
    }
}

#[utoipa::path(
    get,
    path = "/api/case/documents",
    params(DocumentListQuery),
    responses(
        (status = 200, description = "Documents for a case, newest first", body = DocumentListResponse),
        (status = 400, description = "Case ID is required"),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Case Documents"
)]
pub async fn list_documents(
    Extension(user): Extension<AuthUser>,
    State(db): State<DatabaseConnection>,
    Query(query): Query<DocumentListQuery>,
) -> Result<Json<DocumentListResponse>, AppError> {
    let case_id: Uuid = query
        .case_id
        .ok_or_else(|| AppError::BadRequest("Case ID is required".to_string()))?
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid case ID".to_string()))?;

    let documents = case_document::Entity::find()
        .filter(case_document::Column::CaseId.eq(case_id))
        .order_by_desc(case_document::Column::CreatedAt)
        .all(&db)
        .await?;

    println!(
        "CaseDocuments | GET /api/case/documents | user={} | case={} | count={}",
        user.email,
        case_id,
        documents.len()
    );

    Ok(Json(DocumentListResponse {
        documents: documents.into_iter().map(DocumentResponse::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/case/documents",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Document stored and metadata recorded", body = UploadDocumentResponse),
        (status = 400, description = "Missing caseId or file, or disallowed file type"),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Case Documents"
)]
pub async fn upload_document(
    Extension(user): Extension<AuthUser>,
    State(db): State<DatabaseConnection>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadDocumentResponse>), AppError> {
    let mut case_id: Option<String> = None;
    let mut title: Option<String> = None;
    let mut document_type: Option<String> = None;
    let mut upload: Option<(String, axum::body::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::BadRequest("Invalid multipart data".to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("caseId") => {
                case_id = Some(field.text().await.map_err(|_| {
                    AppError::BadRequest("Invalid multipart data".to_string())
                })?);
            }
            Some("title") => {
                title = Some(field.text().await.map_err(|_| {
                    AppError::BadRequest("Invalid multipart data".to_string())
                })?);
            }
            Some("documentType") => {
                document_type = Some(field.text().await.map_err(|_| {
                    AppError::BadRequest("Invalid multipart data".to_string())
                })?);
            }
            Some("document") => {
                let original = field.file_name().unwrap_or("document").to_string();
                let data = field.bytes().await.map_err(|_| {
                    AppError::InternalServerError("Failed to read file bytes".to_string())
                })?;
                upload = Some((original, data));
            }
            _ => {}
        }
    }

    let case_id: Uuid = case_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("Case ID is required".to_string()))?
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid case ID".to_string()))?;

    let (original_filename, data) =
        upload.ok_or_else(|| AppError::BadRequest("Document file is required".to_string()))?;

    let extension = file_extension(&original_filename);
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(AppError::BadRequest("File type not allowed".to_string()));
    }

    let sanitized = sanitize_filename(&original_filename);
    let stored = storage_filename(&extension);
    let file_size = data.len() as i64;

    let config = get_config();
    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    let disk_path = std::path::Path::new(&config.upload_dir).join(&stored);
    tokio::fs::write(&disk_path, &data)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    let document = case_document::ActiveModel {
        id: Set(Uuid::new_v4()),
        case_id: Set(case_id),
        title: Set(title.filter(|t| !t.is_empty()).unwrap_or_else(|| sanitized.clone())),
        file_name: Set(sanitized),
        stored_filename: Set(stored.clone()),
        file_extension: Set(extension),
        file_size: Set(file_size),
        file_path: Set(format!("/uploads/{}", stored)),
        document_type: Set(normalize_document_type(document_type.as_deref())),
        uploaded_by: Set(user.email.clone()),
        created_at: Set(chrono::Utc::now().naive_utc()),
    }
    .insert(&db)
    .await?;

    println!(
        "CaseDocuments | POST /api/case/documents | user={} | case={} | file={} | size={} | res=201",
        user.email, case_id, document.stored_filename, file_size
    );

    Ok((
        StatusCode::CREATED,
        Json(UploadDocumentResponse {
            message: "Document uploaded successfully".to_string(),
            document: DocumentResponse::from(document),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased_with_leading_dot() {
        assert_eq!(file_extension("report.PDF"), ".pdf");
        assert_eq!(file_extension("archive.tar.gz"), ".gz");
        assert_eq!(file_extension("no_extension"), "");
        assert_eq!(file_extension(".bashrc"), ".bashrc");
    }

    #[test]
    fn sanitizes_everything_outside_the_safe_set() {
        assert_eq!(
            sanitize_filename("My Report (final).pdf"),
            "My_Report__final_.pdf"
        );
        assert_eq!(sanitize_filename("já-hoje.txt"), "j_-hoje.txt");
        assert_eq!(sanitize_filename(""), "document");
        assert_eq!(sanitize_filename("clean-name.doc"), "clean-name.doc");
    }

    #[test]
    fn storage_filename_embeds_millisecond_timestamp() {
        let name = storage_filename(".pdf");
        assert!(name.starts_with("doc_"));
        assert!(name.ends_with(".pdf"));
        let digits = &name["doc_".len()..name.len() - ".pdf".len()];
        assert_eq!(digits.len(), 13);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn unknown_document_types_fall_back_to_other() {
        assert_eq!(normalize_document_type(Some("Evidence")), "Evidence");
        assert_eq!(normalize_document_type(Some("Meme")), "Other");
        assert_eq!(normalize_document_type(None), "Other");
    }

    #[test]
    fn whitelist_rejects_executables_and_missing_extensions() {
        assert!(ALLOWED_EXTENSIONS.contains(&".pdf"));
        assert!(!ALLOWED_EXTENSIONS.contains(&".exe"));
        assert!(!ALLOWED_EXTENSIONS.contains(&""));
    }
}
