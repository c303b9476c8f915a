use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CaseDocuments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CaseDocuments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CaseDocuments::CaseId).uuid().not_null())
                    .col(ColumnDef::new(CaseDocuments::Title).string().not_null())
                    .col(ColumnDef::new(CaseDocuments::FileName).string().not_null())
                    .col(
                        ColumnDef::new(CaseDocuments::StoredFilename)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(CaseDocuments::FileExtension).string().not_null())
                    .col(ColumnDef::new(CaseDocuments::FileSize).big_integer().not_null())
                    .col(ColumnDef::new(CaseDocuments::FilePath).string().not_null())
                    .col(ColumnDef::new(CaseDocuments::DocumentType).string().not_null())
                    .col(ColumnDef::new(CaseDocuments::UploadedBy).string().not_null())
                    .col(ColumnDef::new(CaseDocuments::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_case_documents_case_id")
                    .table(CaseDocuments::Table)
                    .col(CaseDocuments::CaseId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CaseDocuments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CaseDocuments {
    Table,
    Id,
    CaseId,
    Title,
    FileName,
    StoredFilename,
    FileExtension,
    FileSize,
    FilePath,
    DocumentType,
    UploadedBy,
    CreatedAt,
}
