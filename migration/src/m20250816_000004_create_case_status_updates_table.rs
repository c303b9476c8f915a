use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// No foreign key to cases: orphaned updates are representable, matching
// the document store this schema replaces.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CaseStatusUpdates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CaseStatusUpdates::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CaseStatusUpdates::CaseId).uuid().not_null())
                    .col(ColumnDef::new(CaseStatusUpdates::Status).string().not_null())
                    .col(ColumnDef::new(CaseStatusUpdates::Notes).text().not_null())
                    .col(ColumnDef::new(CaseStatusUpdates::UpdatedBy).string().not_null())
                    .col(ColumnDef::new(CaseStatusUpdates::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_case_status_updates_case_id")
                    .table(CaseStatusUpdates::Table)
                    .col(CaseStatusUpdates::CaseId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CaseStatusUpdates::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CaseStatusUpdates {
    Table,
    Id,
    CaseId,
    Status,
    Notes,
    UpdatedBy,
    CreatedAt,
}
